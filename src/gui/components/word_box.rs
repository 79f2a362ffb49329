// src/gui/components/word_box.rs
//
// Word field + Search, and the word-count display.

use eframe::egui;

use crate::{
    client::ClientSnapshot,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, snap: &ClientSnapshot) {
    let mut search = false;

    ui.horizontal(|ui| {
        ui.label("Word:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.word_text)
                .desired_width(200.0),
        );
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            search = true;
        }
        if ui.button("Search").clicked() {
            search = true;
        }
    });

    if search {
        actions::search(app);
    }

    if app.state.gui.word_count_visible {
        ui.add_space(6.0);
        // snapshot predates a search made this frame
        let count = if search { app.client.last_count() } else { snap.last_count };
        ui.horizontal(|ui| {
            ui.label("Occurrences:");
            ui.heading(count.to_string());
        });
    }
}
