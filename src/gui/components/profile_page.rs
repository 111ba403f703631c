//! Read-only page: header, banner, profile details, stats and post gallery

use eframe::egui;

use crate::constants::page;
use crate::gui::constants::*;
use crate::state::{ImageRef, Post, PostFeed, Profile};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageAction {
    None,
    EditProfile,
    NewPost,
}

pub fn header(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(page::TITLE)
                .size(28.0)
                .color(ACCENT),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for item in page::NAV_ITEMS.iter().rev() {
                ui.add_space(ITEM_SPACING);
                ui.label(egui::RichText::new(*item).size(16.0));
            }
        });
    });
}

/// `modal_open` disables the page actions while either dialog is showing
pub fn ui(ui: &mut egui::Ui, profile: &Profile, feed: &PostFeed, modal_open: bool) -> PageAction {
    let mut action = PageAction::None;

    image_placeholder(
        ui,
        egui::vec2(ui.available_width(), BANNER_HEIGHT),
        profile.banner_image.as_ref(),
        "banner",
    );
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        image_placeholder(
            ui,
            egui::vec2(AVATAR_SIZE, AVATAR_SIZE),
            profile.profile_picture.as_ref(),
            "avatar",
        );
        ui.add_space(PADDING);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&profile.profile_name).heading().strong());
                if !profile.pronouns.is_empty() {
                    ui.label(egui::RichText::new(format!("({})", profile.pronouns)).weak());
                }
            });
            ui.label(format!("@{}", profile.username));
            ui.horizontal(|ui| {
                ui.label(format!("📷 {}", profile.instagram));
                ui.label(format!("🐦 {}", profile.twitter));
                ui.label(format!("✉ {}", profile.email));
            });
            let visibility = if profile.is_public { "Public" } else { "Private" };
            ui.label(egui::RichText::new(visibility).small().color(STATUS_MUTED));
        });
    });

    ui.add_space(ITEM_SPACING);
    ui.label(&profile.bio);
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!modal_open, egui::Button::new("✏ Edit profile"))
            .clicked()
        {
            action = PageAction::EditProfile;
        }
        if ui
            .add_enabled(!modal_open, egui::Button::new("➕ New post"))
            .clicked()
        {
            action = PageAction::NewPost;
        }
    });

    ui.add_space(SECTION_SPACING);
    stats_bar(ui);
    ui.add_space(SECTION_SPACING);
    ui.separator();
    gallery(ui, feed);

    action
}

fn stats_bar(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.columns(page::STATS.len(), |columns| {
            for (column, (number, label)) in columns.iter_mut().zip(page::STATS.iter()) {
                column.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(*number).size(24.0).strong().color(ACCENT));
                    ui.label(*label);
                });
            }
        });
    });
}

fn gallery(ui: &mut egui::Ui, feed: &PostFeed) {
    ui.label(egui::RichText::new("Posts").strong());
    ui.add_space(ITEM_SPACING);

    if feed.is_empty() {
        ui.label(egui::RichText::new("No posts yet").italics().weak());
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for post in feed.list() {
            ui.push_id(post.id().as_str(), |ui| tile(ui, post));
        }
    });
}

fn tile(ui: &mut egui::Ui, post: &Post) {
    ui.vertical(|ui| {
        ui.set_width(TILE_SIZE);
        image_placeholder(ui, egui::vec2(TILE_SIZE, TILE_SIZE), Some(post.image()), "post");
        ui.label(post.description());
        ui.label(
            egui::RichText::new(post.timestamp().format("%Y-%m-%d %H:%M").to_string())
                .small()
                .weak(),
        );
    });
}

/// Images are not decoded; draw a box noting whether one is set
pub fn image_placeholder(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    image: Option<&ImageRef>,
    what: &str,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, 4.0, PLACEHOLDER);

    let text = match image {
        Some(image) => format!("🖼 {what} ({} KB)", image.as_str().len() / 1024),
        None => format!("no {what}"),
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(13.0),
        STATUS_MUTED,
    );
    response
}
