use teloxide::utils::command::BotCommands;
use worldclock_bot::bot::commands::time::TimeQuery;
use worldclock_bot::bot::commands::Command;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_help_command_parsing() {
        let result = Command::parse("/help", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Help));
    }

    #[test]
    fn test_start_command_parsing() {
        let result = Command::parse("/start", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Start));
    }

    #[test]
    fn test_time_command_without_arguments() {
        let result = Command::parse("/time", "testbot");
        assert!(result.is_ok());
        match result.unwrap() {
            Command::Time(args) => assert_eq!(args, ""),
            _ => panic!("Expected Time command"),
        }
    }

    #[test]
    fn test_time_command_captures_full_tail() {
        let result = Command::parse("/time in New York City", "testbot");
        assert!(result.is_ok());
        match result.unwrap() {
            Command::Time(args) => assert_eq!(args, "in New York City"),
            _ => panic!("Expected Time command"),
        }
    }

    #[test]
    fn test_time_command_with_bot_mention() {
        let result = Command::parse("/time@testbot in Tokyo", "testbot");
        assert!(result.is_ok());
        match result.unwrap() {
            Command::Time(args) => assert_eq!(args, "in Tokyo"),
            _ => panic!("Expected Time command"),
        }
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Command::parse("/weather Tokyo", "testbot").is_err());
    }

    // The /time tail grammar

    #[test]
    fn test_bare_time_queries_defaults() {
        assert_eq!(TimeQuery::parse(""), Some(TimeQuery::Defaults));
    }

    #[test]
    fn test_time_in_queries_a_place() {
        assert_eq!(
            TimeQuery::parse("in Buenos Aires"),
            Some(TimeQuery::In("Buenos Aires".to_string()))
        );
    }

    #[test]
    fn test_time_for_queries_a_user() {
        assert_eq!(
            TimeQuery::parse("for @alice"),
            Some(TimeQuery::For("@alice".to_string()))
        );
        assert_eq!(
            TimeQuery::parse("for alice"),
            Some(TimeQuery::For("alice".to_string()))
        );
    }

    #[test]
    fn test_unrecognized_tail_gets_no_query() {
        assert_eq!(TimeQuery::parse("Tokyo"), None);
        assert_eq!(TimeQuery::parse("in"), None);
        assert_eq!(TimeQuery::parse("for"), None);
    }
}
