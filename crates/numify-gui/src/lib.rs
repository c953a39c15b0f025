/// Numify GUI: egui-based desktop frontend.
///
/// This crate contains all UI code. Formatting logic lives in `numify-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod widgets;

pub use app::{NumifyApp, NumifyState};
