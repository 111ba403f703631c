//! egui front end for the profile page

mod components;
mod constants;
mod manager;

pub use manager::run_gui;
