//! Edit-profile draft state machine
//!
//! Closed -> Open(draft, privacy draft) -> Closed, where leaving Open either
//! commits the merged draft into the `ProfileStore` or discards it.

use tracing::{debug, info};

use super::privacy::{PrivacyFlag, PrivacySettings, PrivacySettingsStore};
use super::profile::{ImageRef, ImageSlot, Profile, ProfileField, ProfileStore};
use super::SessionId;

#[derive(Debug)]
struct EditSession {
    id: SessionId,
    /// Store revision the drafts were taken from
    base_revision: u64,
    draft: Profile,
    privacy: PrivacySettingsStore,
}

impl EditSession {
    fn reset_from(&mut self, store: &ProfileStore) {
        self.base_revision = store.revision();
        self.draft = store.snapshot();
        self.privacy.sync_from(store.get());
    }
}

#[derive(Debug, Default)]
pub struct ProfileEditor {
    session: Option<EditSession>,
    opened: u64,
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Open with fresh drafts copied from the current store.
    /// Already open: keeps the drafts in progress.
    pub fn open(&mut self, store: &ProfileStore) -> SessionId {
        if let Some(session) = &self.session {
            debug!(session = ?session.id, "Profile editor already open");
            return session.id;
        }

        self.opened += 1;
        let id = SessionId(self.opened);
        let profile = store.get();
        self.session = Some(EditSession {
            id,
            base_revision: store.revision(),
            draft: profile.clone(),
            privacy: PrivacySettingsStore::from_profile(profile),
        });
        info!(session = ?id, "Profile editor opened");
        id
    }

    /// Re-derive the drafts if the store was replaced behind the editor's back
    pub fn sync(&mut self, store: &ProfileStore) {
        if let Some(session) = self.session.as_mut() {
            if session.base_revision != store.revision() {
                info!(
                    session = ?session.id,
                    from = session.base_revision,
                    to = store.revision(),
                    "Profile changed while editing, resetting drafts"
                );
                session.reset_from(store);
            }
        }
    }

    pub fn draft(&self) -> Option<&Profile> {
        self.session.as_ref().map(|s| &s.draft)
    }

    pub fn privacy_draft(&self) -> Option<PrivacySettings> {
        self.session.as_ref().map(|s| s.privacy.get())
    }

    pub fn field_edit(&mut self, field: ProfileField, value: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.draft.set_field(field, value.into());
        }
    }

    /// Deliver an ingested image. Ignored when closed, when the image belongs
    /// to an earlier session, or when ingestion yielded nothing.
    pub fn image_selected(
        &mut self,
        session_id: SessionId,
        slot: ImageSlot,
        image: Option<ImageRef>,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            debug!(session = ?session_id, "Dropping image for closed profile editor");
            return false;
        };
        if session.id != session_id {
            debug!(
                session = ?session_id,
                current = ?session.id,
                "Dropping image from stale editor session"
            );
            return false;
        }
        match image {
            Some(image) => {
                session.draft.set_image(slot, image);
                true
            }
            None => false,
        }
    }

    pub fn privacy_toggle(&mut self, flag: PrivacyFlag) {
        if let Some(session) = self.session.as_mut() {
            session.privacy.toggle(flag);
        }
    }

    /// Merge the privacy draft over the profile draft and replace the store.
    /// Returns false if there was nothing open to commit.
    pub fn commit(&mut self, store: &mut ProfileStore) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        let merged = session.draft.with_privacy(session.privacy.get());
        store.replace(merged);
        info!(session = ?session.id, "Profile editor committed");
        true
    }

    pub fn discard(&mut self) {
        if let Some(session) = self.session.take() {
            info!(session = ?session.id, "Profile editor discarded");
        }
    }
}
