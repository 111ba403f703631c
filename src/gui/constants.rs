//! GUI-specific constants for layout and colors

use eframe::egui;

/// Window dimensions
pub const WINDOW_WIDTH: f32 = 900.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const WINDOW_MIN_WIDTH: f32 = 480.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const PADDING: f32 = 10.0;

/// Placeholder image sizes
pub const BANNER_HEIGHT: f32 = 160.0;
pub const AVATAR_SIZE: f32 = 96.0;
pub const TILE_SIZE: f32 = 180.0;

/// Brand and status colors
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x9c, 0x39, 0x17);
pub const PLACEHOLDER: egui::Color32 = egui::Color32::from_rgb(0xd9, 0xd9, 0xd9);
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 160, 0);
pub const STATUS_MUTED: egui::Color32 = egui::Color32::from_rgb(120, 120, 120);

/// Repaint interval while image reads are in flight
pub const INGEST_POLL_INTERVAL_MS: u64 = 100;
