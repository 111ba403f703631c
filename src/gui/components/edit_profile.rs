use eframe::egui;
use std::path::PathBuf;

use crate::gui::components::profile_page::image_placeholder;
use crate::gui::components::{drop_target, dropped_file};
use crate::gui::constants::*;
use crate::state::{ImageSlot, PrivacyFlag, ProfileEditor, ProfileField};

#[derive(Debug, Clone, PartialEq)]
pub enum EditProfileAction {
    None,
    Save,
    Cancel,
    /// `None` path: selection cancelled
    LoadImage(ImageSlot, Option<PathBuf>),
}

/// Widget state that is not part of the profile draft
pub struct EditProfileDialog {
    pub(in crate::gui) avatar_path: String,
    pub(in crate::gui) banner_path: String,
}

impl EditProfileDialog {
    pub fn new() -> Self {
        Self {
            avatar_path: String::new(),
            banner_path: String::new(),
        }
    }

    pub fn reset(&mut self) {
        self.avatar_path.clear();
        self.banner_path.clear();
    }

    pub fn ui(&mut self, ctx: &egui::Context, editor: &mut ProfileEditor) -> EditProfileAction {
        let mut action = EditProfileAction::None;
        let Some(draft) = editor.draft().cloned() else {
            return action;
        };
        let Some(privacy) = editor.privacy_draft() else {
            return action;
        };
        let mut open = true;
        let dropped = dropped_file(ctx);

        egui::Window::new("EDIT PROFILE")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                let (avatar, banner) = ui
                    .horizontal(|ui| {
                        let avatar = image_placeholder(
                            ui,
                            egui::vec2(AVATAR_SIZE, AVATAR_SIZE),
                            draft.profile_picture.as_ref(),
                            "avatar",
                        );
                        let banner = image_placeholder(
                            ui,
                            egui::vec2(AVATAR_SIZE * 2.0, AVATAR_SIZE),
                            draft.banner_image.as_ref(),
                            "banner",
                        );
                        (avatar.rect, banner.rect)
                    })
                    .inner;
                ui.label(egui::RichText::new("(or drop a file onto the avatar or banner)").small().weak());

                // A drop only counts when it lands on one of the two image boxes
                if let Some((path, pos)) = &dropped {
                    let targets = [(avatar, ImageSlot::Profile), (banner, ImageSlot::Banner)];
                    if let Some(slot) = drop_target(*pos, &targets) {
                        let shown = path.display().to_string();
                        match slot {
                            ImageSlot::Profile => self.avatar_path = shown,
                            ImageSlot::Banner => self.banner_path = shown,
                        }
                        action = EditProfileAction::LoadImage(slot, Some(path.clone()));
                    }
                }
                if let Some(load) = image_row(ui, "Profile picture:", &mut self.avatar_path) {
                    action = EditProfileAction::LoadImage(ImageSlot::Profile, load);
                }
                if let Some(load) = image_row(ui, "Banner image:", &mut self.banner_path) {
                    action = EditProfileAction::LoadImage(ImageSlot::Banner, load);
                }

                ui.add_space(SECTION_SPACING);

                egui::Grid::new("edit_profile_fields")
                    .num_columns(2)
                    .spacing([ITEM_SPACING, ITEM_SPACING])
                    .show(ui, |ui| {
                        for field in ProfileField::ALL {
                            ui.label(format!("{}:", field.label()));
                            let mut value = draft.field(field).to_string();
                            let changed = if field == ProfileField::Bio {
                                ui.text_edit_multiline(&mut value).changed()
                            } else {
                                ui.text_edit_singleline(&mut value).changed()
                            };
                            if changed {
                                editor.field_edit(field, value);
                            }
                            ui.end_row();
                        }
                    });

                ui.add_space(SECTION_SPACING);

                ui.group(|ui| {
                    ui.label(egui::RichText::new("Privacy").strong());
                    for flag in PrivacyFlag::ALL {
                        let mut value = privacy.get(flag);
                        if ui.checkbox(&mut value, flag.label()).changed() {
                            editor.privacy_toggle(flag);
                        }
                    }
                });

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action = EditProfileAction::Save;
                    }
                    if ui.button("Cancel").clicked() {
                        action = EditProfileAction::Cancel;
                    }
                });
            });

        if !open {
            action = EditProfileAction::Cancel;
        }
        action
    }
}

/// Path field plus Load button; an empty path counts as a cancelled pick
pub fn image_row(ui: &mut egui::Ui, label: &str, path: &mut String) -> Option<Option<PathBuf>> {
    let mut load = None;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(path);
        if ui.button("Load").clicked() {
            let trimmed = path.trim();
            load = Some((!trimmed.is_empty()).then(|| PathBuf::from(trimmed)));
        }
    });
    load
}
