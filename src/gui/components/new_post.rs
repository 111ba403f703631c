use eframe::egui;
use std::path::PathBuf;

use crate::gui::components::edit_profile::image_row;
use crate::gui::components::profile_page::image_placeholder;
use crate::gui::components::{drop_target, dropped_file};
use crate::gui::constants::*;
use crate::state::PostComposer;

#[derive(Debug, Clone, PartialEq)]
pub enum NewPostAction {
    None,
    Post,
    Cancel,
    LoadImage(Option<PathBuf>),
}

pub struct NewPostDialog {
    pub(in crate::gui) image_path: String,
}

impl NewPostDialog {
    pub fn new() -> Self {
        Self {
            image_path: String::new(),
        }
    }

    pub fn reset(&mut self) {
        self.image_path.clear();
    }

    pub fn ui(&mut self, ctx: &egui::Context, composer: &mut PostComposer) -> NewPostAction {
        let mut action = NewPostAction::None;
        if !composer.is_open() {
            return action;
        }
        let mut open = true;

        let shown = egui::Window::new("NEW POST")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("CHOOSE PHOTO FROM DEVICE").strong());
                image_placeholder(ui, egui::vec2(TILE_SIZE, TILE_SIZE), composer.image(), "photo");
                if let Some(load) = image_row(ui, "Path:", &mut self.image_path) {
                    action = NewPostAction::LoadImage(load);
                }
                ui.label(egui::RichText::new("(or drop a file onto this window)").small().weak());

                ui.add_space(SECTION_SPACING);

                ui.label(egui::RichText::new("DESCRIPTION").strong());
                let mut description = composer.description().to_string();
                if ui.text_edit_multiline(&mut description).changed() {
                    composer.description_edit(description);
                }

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(composer.can_submit(), egui::Button::new("Post"))
                        .clicked()
                    {
                        action = NewPostAction::Post;
                    }
                    if ui.button("Cancel").clicked() {
                        action = NewPostAction::Cancel;
                    }
                });
            });

        // Only drops over this window belong to the composer
        if let (Some(shown), Some((path, pos))) = (shown, dropped_file(ctx)) {
            if drop_target(pos, &[(shown.response.rect, ())]).is_some() {
                self.image_path = path.display().to_string();
                action = NewPostAction::LoadImage(Some(path));
            }
        }

        if !open {
            action = NewPostAction::Cancel;
        }
        action
    }
}
