//! Shared egui components for the dashboard tables
//!
//! Rendering never mutates a table directly: widgets collect [`crate::TableCommand`]s
//! and the host applies them once the frame's borrows have ended.

use egui::containers::Popup;
use egui::{RectAlign, Response};

mod data_table;

pub use data_table::*;

/// Show a tooltip immediately (no delay) positioned below the widget
pub fn instant_tooltip(response: &Response, text: impl Into<String>) {
    if response.hovered() {
        let text = text.into();
        Popup::from_response(response)
            .align(RectAlign::BOTTOM_START)
            .gap(4.0)
            .show(|ui| {
                ui.label(&text);
            });
    }
}
