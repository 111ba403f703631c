//! In-memory profile and post state
//!
//! - **profile** / **privacy**: the session profile and its privacy flags
//! - **posts**: the newest-first post feed
//! - **editor** / **composer**: draft state machines behind the two modals
//! - **notify**: explicit change notification used by the stores

pub mod composer;
pub mod editor;
pub mod notify;
pub mod posts;
pub mod privacy;
pub mod profile;

pub use composer::PostComposer;
pub use editor::ProfileEditor;
pub use posts::{Post, PostFeed, PostId};
pub use privacy::PrivacyFlag;
pub use profile::{ImageRef, ImageSlot, Profile, ProfileField, ProfileStore};

/// Identifies one Closed -> Open pass of a draft state machine.
/// Image reads started in an earlier pass carry an older id and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub(crate) u64);
