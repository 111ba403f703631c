//! Application-wide constants
//!
//! Seed values for the session profile, static page content and
//! limits used by image ingestion.

/// Seed values for the one profile that lives for the whole session
pub mod seed {
    pub const USERNAME: &str = "leticiabumpy";
    pub const PROFILE_NAME: &str = "PROFILE";
    pub const BIO: &str = "Lorem Ipsum is simply dummy text of the printing and typesetting \
        industry. Lorem Ipsum has been the industry's standard dummy text ever since the 1500s, \
        when an unknown printer took a galley of type and scrambled it.";
    pub const INSTAGRAM: &str = "insta";
    pub const TWITTER: &str = "twitter";
    pub const EMAIL: &str = "email";

    pub const IS_PUBLIC: bool = true;
    pub const ALLOW_FRIEND_REQUESTS: bool = true;
    pub const SHOW_ACTIVITY_STATUS: bool = false;
}

/// Static content rendered around the profile
pub mod page {
    pub const TITLE: &str = "DINO LOGGER";

    /// Header navigation labels
    pub const NAV_ITEMS: [&str; 4] = ["REVIEWS", "COMMUNITIES", "DINOWIKI", "contact us"];

    /// Stats bar entries (number, label)
    pub const STATS: [(&str, &str); 3] = [
        ("278", "logged dinosaurs"),
        ("21", "created species"),
        ("86", "traded stickers"),
    ];
}

/// Image ingestion limits
pub mod ingest {
    /// Largest file accepted for embedding (10 MB)
    pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

    /// MIME type used when the extension is not a known image type
    pub const FALLBACK_MIME: &str = "application/octet-stream";
}
