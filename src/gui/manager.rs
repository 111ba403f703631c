//! Profile page app implemented with egui/eframe
//!
//! Owns the stores, the two draft state machines and the in-flight image
//! reads. Every frame it delivers finished reads, renders the current store
//! snapshots and routes modal actions into the state machines. Store
//! listeners raise a shared flag that turns into a repaint request.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use eframe::{egui, NativeOptions};
use tracing::{debug, info, warn};

use super::components::edit_profile::{EditProfileAction, EditProfileDialog};
use super::components::new_post::{NewPostAction, NewPostDialog};
use super::components::profile_page::{self, PageAction};
use super::constants::*;
use crate::clock::SystemClock;
use crate::constants::page;
use crate::ingest::{ImageIngestor, PendingImage};
use crate::state::{
    ImageSlot, Post, PostComposer, PostFeed, Profile, ProfileEditor, ProfileStore, SessionId,
};

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

struct ProfileApp {
    profile: ProfileStore,
    feed: PostFeed,
    editor: ProfileEditor,
    composer: PostComposer,
    clock: SystemClock,
    ingestor: ImageIngestor,
    editor_images: Vec<PendingImage<(SessionId, ImageSlot)>>,
    composer_images: Vec<PendingImage<SessionId>>,
    edit_dialog: EditProfileDialog,
    post_dialog: NewPostDialog,
    status_message: Option<StatusMessage>,
    /// Set by store listeners, cleared once a repaint is requested
    stores_changed: Rc<Cell<bool>>,
}

impl ProfileApp {
    fn new(seed: Profile, ingestor: ImageIngestor) -> Self {
        info!("Initializing profile page");
        let stores_changed = Rc::new(Cell::new(false));

        let mut profile = ProfileStore::new(seed);
        let flag = Rc::clone(&stores_changed);
        profile.subscribe(Box::new(move |p: &Profile| {
            debug!(username = %p.username, "Profile store changed");
            flag.set(true);
        }));

        let mut feed = PostFeed::new();
        let flag = Rc::clone(&stores_changed);
        feed.subscribe(Box::new(move |posts: &[Post]| {
            debug!(posts = posts.len(), "Post feed changed");
            flag.set(true);
        }));

        Self {
            profile,
            feed,
            editor: ProfileEditor::new(),
            composer: PostComposer::new(),
            clock: SystemClock::new(),
            ingestor,
            editor_images: Vec::new(),
            composer_images: Vec::new(),
            edit_dialog: EditProfileDialog::new(),
            post_dialog: NewPostDialog::new(),
            status_message: None,
            stores_changed,
        }
    }

    /// Hand finished reads to their state machine; stale ones are dropped there
    fn deliver_images(&mut self) {
        let editor = &mut self.editor;
        self.editor_images.retain_mut(|pending| match pending.try_take() {
            Some(image) => {
                let (session, slot) = *pending.tag();
                editor.image_selected(session, slot, image);
                false
            }
            None => true,
        });

        let composer = &mut self.composer;
        self.composer_images.retain_mut(|pending| match pending.try_take() {
            Some(image) => {
                composer.image_selected(*pending.tag(), image);
                false
            }
            None => true,
        });
    }

    fn modal_open(&self) -> bool {
        self.editor.is_open() || self.composer.is_open()
    }

    fn handle_page_action(&mut self, action: PageAction) {
        if action != PageAction::None && self.modal_open() {
            debug!(?action, "Ignoring page action while a dialog is open");
            return;
        }
        match action {
            PageAction::None => {}
            PageAction::EditProfile => self.open_editor(),
            PageAction::NewPost => self.open_composer(),
        }
    }

    fn open_editor(&mut self) {
        if !self.editor.is_open() {
            self.edit_dialog.reset();
        }
        self.editor.open(&self.profile);
    }

    fn open_composer(&mut self) {
        if !self.composer.is_open() {
            self.post_dialog.reset();
        }
        self.composer.open();
    }

    fn handle_edit_action(&mut self, action: EditProfileAction) {
        match action {
            EditProfileAction::None => {}
            EditProfileAction::LoadImage(slot, path) => {
                if let Some(session) = self.editor.session() {
                    let pending = self.ingestor.ingest((session, slot), path);
                    self.editor_images.push(pending);
                }
            }
            EditProfileAction::Save => {
                if self.editor.commit(&mut self.profile) {
                    self.status_message = Some(StatusMessage {
                        text: "Profile saved".to_string(),
                        color: STATUS_OK,
                    });
                }
                self.editor_images.clear();
            }
            EditProfileAction::Cancel => {
                self.editor.discard();
                self.editor_images.clear();
            }
        }
    }

    fn handle_post_action(&mut self, action: NewPostAction) {
        match action {
            NewPostAction::None => {}
            NewPostAction::LoadImage(path) => {
                if let Some(session) = self.composer.session() {
                    let pending = self.ingestor.ingest(session, path);
                    self.composer_images.push(pending);
                }
            }
            NewPostAction::Post => {
                match self.composer.post(&mut self.clock, &mut self.feed) {
                    Some(post) => {
                        self.status_message = Some(StatusMessage {
                            text: format!("Posted \"{}\"", post.description()),
                            color: STATUS_OK,
                        });
                        self.composer_images.clear();
                    }
                    None => warn!("Post button pressed without image and description"),
                }
            }
            NewPostAction::Cancel => {
                self.composer.discard();
                self.composer_images.clear();
            }
        }
    }

    /// True once per batch of store changes
    fn take_store_changes(&self) -> bool {
        self.stores_changed.replace(false)
    }
}

impl eframe::App for ProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.deliver_images();
        self.editor.sync(&self.profile);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(PADDING);
            profile_page::header(ui);
            ui.add_space(PADDING);
        });

        let mut page_action = PageAction::None;
        let modal_open = self.modal_open();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                page_action = profile_page::ui(ui, self.profile.get(), &self.feed, modal_open);
                if let Some(message) = &self.status_message {
                    ui.add_space(ITEM_SPACING);
                    ui.colored_label(message.color, &message.text);
                }
            });
        });

        self.handle_page_action(page_action);

        let edit_action = self.edit_dialog.ui(ctx, &mut self.editor);
        self.handle_edit_action(edit_action);

        let post_action = self.post_dialog.ui(ctx, &mut self.composer);
        self.handle_post_action(post_action);

        if self.take_store_changes() {
            ctx.request_repaint();
        }

        if !self.editor_images.is_empty() || !self.composer_images.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(INGEST_POLL_INTERVAL_MS));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            posts = self.feed.len(),
            feed_revision = self.feed.revision(),
            "Profile page exiting"
        );
    }
}

pub fn run_gui(seed: Profile) -> Result<()> {
    // Current-thread runtime: only its blocking pool is used, for file reads
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to build tokio runtime for image ingestion")?;
    let ingestor = ImageIngestor::new(runtime.handle().clone());

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(page::TITLE),
        ..Default::default()
    };

    eframe::run_native(
        page::TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ProfileApp::new(seed, ingestor)))),
    )
    .map_err(|err| anyhow!("Failed to launch profile page: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ImageRef, ProfileField};

    fn app() -> (tokio::runtime::Runtime, ProfileApp) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let ingestor = ImageIngestor::new(runtime.handle().clone());
        (runtime, ProfileApp::new(Profile::default(), ingestor))
    }

    #[test]
    fn test_store_listeners_raise_change_flag() {
        let (_runtime, mut app) = app();
        assert!(!app.take_store_changes());

        app.handle_page_action(PageAction::EditProfile);
        app.editor.field_edit(ProfileField::Bio, "hi");
        app.handle_edit_action(EditProfileAction::Save);
        assert!(app.take_store_changes());
        assert!(!app.take_store_changes());

        app.handle_page_action(PageAction::NewPost);
        let session = app.composer.session().unwrap();
        app.composer.image_selected(session, Some(ImageRef::new("img://1")));
        app.composer.description_edit("nice fossil");
        app.handle_post_action(NewPostAction::Post);
        assert!(app.take_store_changes());
        assert_eq!(app.feed.len(), 1);
    }

    #[test]
    fn test_reopen_while_open_keeps_path_fields() {
        let (_runtime, mut app) = app();

        app.open_editor();
        app.edit_dialog.avatar_path = "/tmp/rex.png".to_string();
        app.open_editor();
        assert_eq!(app.edit_dialog.avatar_path, "/tmp/rex.png");

        app.open_composer();
        app.post_dialog.image_path = "/tmp/fossil.png".to_string();
        app.open_composer();
        assert_eq!(app.post_dialog.image_path, "/tmp/fossil.png");
    }

    #[test]
    fn test_fresh_open_clears_path_fields() {
        let (_runtime, mut app) = app();

        app.open_editor();
        app.edit_dialog.banner_path = "/tmp/old.png".to_string();
        app.handle_edit_action(EditProfileAction::Cancel);
        app.open_editor();
        assert!(app.edit_dialog.banner_path.is_empty());
    }

    #[test]
    fn test_page_actions_ignored_while_dialog_open() {
        let (_runtime, mut app) = app();

        app.handle_page_action(PageAction::EditProfile);
        app.handle_page_action(PageAction::NewPost);
        assert!(app.editor.is_open());
        assert!(!app.composer.is_open());

        app.handle_edit_action(EditProfileAction::Cancel);
        app.handle_page_action(PageAction::NewPost);
        app.handle_page_action(PageAction::EditProfile);
        assert!(app.composer.is_open());
        assert!(!app.editor.is_open());
    }
}
