//! egui front end: controller, view state, and renderer.

pub mod controller;
pub mod state;
pub mod ui;
