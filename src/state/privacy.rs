//! Privacy flags and their editable projection

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::profile::Profile;

/// The three independent visibility flags of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivacyFlag {
    IsPublic,
    AllowFriendRequests,
    ShowActivityStatus,
}

impl PrivacyFlag {
    pub const ALL: [PrivacyFlag; 3] = [
        PrivacyFlag::IsPublic,
        PrivacyFlag::AllowFriendRequests,
        PrivacyFlag::ShowActivityStatus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrivacyFlag::IsPublic => "Public profile",
            PrivacyFlag::AllowFriendRequests => "Allow friend requests",
            PrivacyFlag::ShowActivityStatus => "Show activity status",
        }
    }
}

/// Snapshot of the three flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub is_public: bool,
    pub allow_friend_requests: bool,
    pub show_activity_status: bool,
}

impl PrivacySettings {
    pub fn get(&self, flag: PrivacyFlag) -> bool {
        match flag {
            PrivacyFlag::IsPublic => self.is_public,
            PrivacyFlag::AllowFriendRequests => self.allow_friend_requests,
            PrivacyFlag::ShowActivityStatus => self.show_activity_status,
        }
    }

    fn slot(&mut self, flag: PrivacyFlag) -> &mut bool {
        match flag {
            PrivacyFlag::IsPublic => &mut self.is_public,
            PrivacyFlag::AllowFriendRequests => &mut self.allow_friend_requests,
            PrivacyFlag::ShowActivityStatus => &mut self.show_activity_status,
        }
    }
}

/// Editable copy of a profile's privacy flags
///
/// Not a source of truth: it must be re-derived with `sync_from` every time
/// the profile it was taken from is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivacySettingsStore {
    settings: PrivacySettings,
}

impl PrivacySettingsStore {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            settings: profile.privacy(),
        }
    }

    pub fn sync_from(&mut self, profile: &Profile) {
        self.settings = profile.privacy();
    }

    /// Flip exactly one flag
    pub fn toggle(&mut self, flag: PrivacyFlag) {
        let slot = self.settings.slot(flag);
        *slot = !*slot;
        debug!(flag = ?flag, value = *slot, "Toggled privacy flag");
    }

    pub fn get(&self) -> PrivacySettings {
        self.settings
    }
}
