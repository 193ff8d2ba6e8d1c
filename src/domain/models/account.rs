use serde::{Deserialize, Serialize};

/// Account as returned by the `users/search` endpoint.
///
/// Only `id` is mandatory; the API omits fields freely depending on the
/// search type, so everything else falls back to its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub tick: bool,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub bio: String,
}

impl AccountRecord {
    /// Name shown on the first line of a dropdown row
    pub fn display_name(&self) -> String {
        if !self.full_name.trim().is_empty() {
            return self.full_name.trim().to_string();
        }

        let joined = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        if !joined.trim().is_empty() {
            return joined.trim().to_string();
        }

        self.nickname.clone()
    }

    pub fn profile_path(&self) -> String {
        format!("/profile/{}", self.nickname)
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar.is_empty()
    }
}
