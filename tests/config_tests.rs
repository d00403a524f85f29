use std::env;
use std::sync::Mutex;
use worldclock_bot::config::Config;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("GOOGLE_API_KEY", "test_key_456");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.google_api_key, "test_key_456");
    assert_eq!(config.http_port, 8080);

    // Clean up
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("GOOGLE_API_KEY");
    env::remove_var("HTTP_PORT");
}

#[test]
fn test_config_from_env_with_default_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::set_var("GOOGLE_API_KEY", "required_key");
    env::remove_var("HTTP_PORT");

    let config = Config::from_env().unwrap();

    assert_eq!(config.http_port, 3000);

    // Clean up
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("GOOGLE_API_KEY");
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::set_var("GOOGLE_API_KEY", "required_key");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    env::remove_var("GOOGLE_API_KEY");
}

#[test]
fn test_config_missing_google_api_key() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::remove_var("GOOGLE_API_KEY");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("GOOGLE_API_KEY must be set"));

    env::remove_var("TELEGRAM_BOT_TOKEN");
}

#[test]
fn test_config_empty_token_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    env::set_var("GOOGLE_API_KEY", "required_key");

    let result = Config::from_env();
    assert!(result.is_err());

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("GOOGLE_API_KEY");
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::set_var("GOOGLE_API_KEY", "required_key");
    env::set_var("HTTP_PORT", "not-a-port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("GOOGLE_API_KEY");
    env::remove_var("HTTP_PORT");
}
