// src/gui/actions/index.rs
use eframe::egui;

use crate::gui::{app::App, progress::GuiProgress};

pub fn index(app: &mut App, ctx: &egui::Context) {
    // No validation here; the service answers bad URLs with an error
    let url = app.state.gui.url_text.clone();

    app.state.gui.word_count_visible = false;
    logf!("UI: Index url={}", url);

    let prog = GuiProgress::new(app.status.clone(), ctx.clone());

    // Detached; the result lands in app.client and the worker requests a repaint
    let pending = app.client.request_index(&url, Box::new(prog));
    logd!("UI: request #{} issued", pending.generation());
}

pub fn cancel(app: &mut App) {
    if app.client.cancel() {
        app.status("Cancelled");
    }
}
