//! Profile record and its store
//!
//! There is exactly one profile per session. It is created from seed values
//! and only ever changes through `ProfileStore::replace`, which swaps the
//! whole record at once.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::notify::{Listener, Notifier};
use super::privacy::PrivacySettings;
use crate::constants::seed;

/// Opaque handle a view can render as an image (a data URI in practice)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of the two profile images an ingested file is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Profile,
    Banner,
}

/// Free-text fields editable from the profile editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Username,
    ProfileName,
    Pronouns,
    Bio,
    Instagram,
    Twitter,
    Email,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Username,
        ProfileField::ProfileName,
        ProfileField::Pronouns,
        ProfileField::Bio,
        ProfileField::Instagram,
        ProfileField::Twitter,
        ProfileField::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Username => "Username",
            ProfileField::ProfileName => "Profile name",
            ProfileField::Pronouns => "Pronouns",
            ProfileField::Bio => "Bio",
            ProfileField::Instagram => "Instagram",
            ProfileField::Twitter => "Twitter",
            ProfileField::Email => "Email",
        }
    }
}

/// The session's user profile
///
/// Every field has a default so a partially specified seed file still
/// produces a complete record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub username: String,
    pub profile_name: String,
    /// Empty means not set
    pub pronouns: String,
    pub bio: String,
    pub instagram: String,
    pub twitter: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<ImageRef>,
    pub is_public: bool,
    pub allow_friend_requests: bool,
    pub show_activity_status: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: seed::USERNAME.to_string(),
            profile_name: seed::PROFILE_NAME.to_string(),
            pronouns: String::new(),
            bio: seed::BIO.to_string(),
            instagram: seed::INSTAGRAM.to_string(),
            twitter: seed::TWITTER.to_string(),
            email: seed::EMAIL.to_string(),
            profile_picture: None,
            banner_image: None,
            is_public: seed::IS_PUBLIC,
            allow_friend_requests: seed::ALLOW_FRIEND_REQUESTS,
            show_activity_status: seed::SHOW_ACTIVITY_STATUS,
        }
    }
}

impl Profile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::ProfileName => &self.profile_name,
            ProfileField::Pronouns => &self.pronouns,
            ProfileField::Bio => &self.bio,
            ProfileField::Instagram => &self.instagram,
            ProfileField::Twitter => &self.twitter,
            ProfileField::Email => &self.email,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Username => &mut self.username,
            ProfileField::ProfileName => &mut self.profile_name,
            ProfileField::Pronouns => &mut self.pronouns,
            ProfileField::Bio => &mut self.bio,
            ProfileField::Instagram => &mut self.instagram,
            ProfileField::Twitter => &mut self.twitter,
            ProfileField::Email => &mut self.email,
        };
        *slot = value;
    }

    pub fn set_image(&mut self, slot: ImageSlot, image: ImageRef) {
        match slot {
            ImageSlot::Profile => self.profile_picture = Some(image),
            ImageSlot::Banner => self.banner_image = Some(image),
        }
    }

    pub fn privacy(&self) -> PrivacySettings {
        PrivacySettings {
            is_public: self.is_public,
            allow_friend_requests: self.allow_friend_requests,
            show_activity_status: self.show_activity_status,
        }
    }

    /// Overwrite the three privacy flags, whatever this record held before
    pub fn with_privacy(mut self, privacy: PrivacySettings) -> Self {
        self.is_public = privacy.is_public;
        self.allow_friend_requests = privacy.allow_friend_requests;
        self.show_activity_status = privacy.show_activity_status;
        self
    }
}

/// Single owner of the live profile
#[derive(Debug)]
pub struct ProfileStore {
    current: Profile,
    notifier: Notifier<Profile>,
}

impl ProfileStore {
    pub fn new(seed: Profile) -> Self {
        info!(username = %seed.username, "Created profile store");
        Self {
            current: seed,
            notifier: Notifier::new(),
        }
    }

    pub fn get(&self) -> &Profile {
        &self.current
    }

    pub fn snapshot(&self) -> Profile {
        self.current.clone()
    }

    /// Replace the whole record. Any values are accepted.
    pub fn replace(&mut self, next: Profile) {
        self.current = next;
        self.notifier.notify(&self.current);
        info!(
            username = %self.current.username,
            revision = self.notifier.revision(),
            "Profile replaced"
        );
    }

    pub fn subscribe(&mut self, listener: Listener<Profile>) {
        self.notifier.subscribe(listener);
    }

    pub fn revision(&self) -> u64 {
        self.notifier.revision()
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_seed_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.username, "leticiabumpy");
        assert_eq!(profile.profile_name, "PROFILE");
        assert!(profile.pronouns.is_empty());
        assert!(profile.profile_picture.is_none());
        assert!(profile.banner_image.is_none());
        assert!(profile.is_public);
        assert!(profile.allow_friend_requests);
        assert!(!profile.show_activity_status);
    }

    #[test]
    fn test_replace_overwrites_whole_record() {
        let mut store = ProfileStore::default();
        let next = Profile {
            username: String::new(),
            bio: "hi".to_string(),
            banner_image: Some(ImageRef::new("img://banner")),
            is_public: false,
            ..Profile::default()
        };

        store.replace(next.clone());
        assert_eq!(store.get(), &next);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_replace_notifies_subscribers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ProfileStore::default();

        let sink = Rc::clone(&seen);
        store.subscribe(Box::new(move |p: &Profile| sink.borrow_mut().push(p.bio.clone())));

        let mut next = store.snapshot();
        next.bio = "updated".to_string();
        store.replace(next);

        assert_eq!(*seen.borrow(), vec!["updated".to_string()]);
    }

    #[test]
    fn test_field_accessors_cover_all_fields() {
        let mut profile = Profile::default();
        for (idx, field) in ProfileField::ALL.iter().enumerate() {
            profile.set_field(*field, format!("value-{idx}"));
        }
        for (idx, field) in ProfileField::ALL.iter().enumerate() {
            assert_eq!(profile.field(*field), format!("value-{idx}"));
        }
    }

    #[test]
    fn test_with_privacy_wins() {
        let profile = Profile::default();
        let privacy = PrivacySettings {
            is_public: false,
            allow_friend_requests: false,
            show_activity_status: true,
        };

        let merged = profile.clone().with_privacy(privacy);
        assert_eq!(merged.privacy(), privacy);
        assert_eq!(merged.bio, profile.bio);
    }

    #[test]
    fn test_deserialize_partial_seed_uses_defaults() {
        let json = r#"{ "username": "rex", "showActivityStatus": true }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.username, "rex");
        assert!(profile.show_activity_status);
        assert_eq!(profile.profile_name, "PROFILE");
        assert_eq!(profile.instagram, "insta");
    }

    #[test]
    fn test_serialize_uses_camel_case_and_skips_missing_images() {
        let value = serde_json::to_value(Profile::default()).unwrap();

        assert!(value.get("profileName").is_some());
        assert!(value.get("allowFriendRequests").is_some());
        assert!(value.get("profilePicture").is_none());
    }
}
