use std::collections::HashMap;

/// What the bot needs from a chat-platform profile: a display name, an
/// optional numeric UTC offset, and an optional free-text timezone label.
///
/// Profile offsets are assumed to be DST-adjusted by the platform already,
/// so no DST component is applied on top of them.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub display_name: String,
    pub utc_offset_seconds: Option<i64>,
    pub tz_label: Option<String>,
}

/// Live user lookup capability.
///
/// Satisfied differently per chat platform; deployments on platforms
/// without rich profiles simply don't provide one.
pub trait UserDirectory: Send + Sync {
    /// Exact, case-sensitive match on the display name.
    fn find_by_name(&self, name: &str) -> Option<UserProfile>;
}

/// In-memory directory over a fixed roster. Useful for deployments that
/// configure their team by hand, and for tests.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    users: HashMap<String, UserProfile>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, profile: UserProfile) {
        self.users.insert(profile.display_name.clone(), profile);
    }
}

impl UserDirectory for StaticDirectory {
    fn find_by_name(&self, name: &str) -> Option<UserProfile> {
        self.users.get(name).cloned()
    }
}
