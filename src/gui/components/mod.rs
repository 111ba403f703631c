pub mod edit_profile;
pub mod new_post;
pub mod profile_page;

use eframe::egui;
use std::path::PathBuf;

/// First file dropped onto the window this frame, with the pointer position
pub fn dropped_file(ctx: &egui::Context) -> Option<(PathBuf, Option<egui::Pos2>)> {
    ctx.input(|i| {
        i.raw
            .dropped_files
            .iter()
            .find_map(|file| file.path.clone())
            .map(|path| (path, i.pointer.hover_pos()))
    })
}

/// Which drop area, if any, contains the pointer
pub fn drop_target<T: Copy>(pos: Option<egui::Pos2>, targets: &[(egui::Rect, T)]) -> Option<T> {
    let pos = pos?;
    targets
        .iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, target)| *target)
}
