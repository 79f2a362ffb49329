// src/gui/components/url_bar.rs
//
// URL field, Index/Cancel buttons, busy spinner and status line.

use eframe::egui::{self, widgets::Spinner};

use crate::{
    client::{ClientSnapshot, RequestStatus},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, snap: &ClientSnapshot) {
    let busy = snap.status.is_busy();

    ui.heading("Word Indexer");
    ui.add_space(4.0);

    let mut submit = false;
    ui.horizontal(|ui| {
        ui.label("URL:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .hint_text("https://example.com")
                .desired_width(ui.available_width() - 90.0),
        );
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        if ui.add_enabled(!busy, egui::Button::new("Index")).clicked() {
            submit = true;
        }
    });

    if submit && !busy {
        actions::index(app, ui.ctx());
    }

    ui.horizontal(|ui| {
        if busy {
            ui.add(Spinner::new().size(16.0));
            if ui.button("Cancel").clicked() {
                actions::cancel(app);
            }
        }

        match &snap.status {
            RequestStatus::Failed(msg) => {
                ui.colored_label(egui::Color32::from_rgb(220, 30, 30), format!("Error: {msg}"));
            }
            _ => {
                ui.label(app.status_text());
            }
        }
    });

    if let (Some(url), Some(words)) = (&snap.last_url, snap.indexed_words) {
        ui.small(format!("Index: {url} ({words} words)"));
    }
}
