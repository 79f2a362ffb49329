// src/gui/components/word_table.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::TOP_WORDS, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let words = app.client.top_words(TOP_WORDS);
    if words.is_empty() {
        return;
    }

    ui.label(egui::RichText::new("Most frequent words").strong());

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(200.0).at_least(80.0).resizable(true).clip(true))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Word");
            });
            header.col(|ui| {
                ui.strong("Count");
            });
        })
        .body(|mut body| {
            for (word, count) in &words {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.monospace(word);
                    });
                    row.col(|ui| {
                        ui.label(count.to_string());
                    });
                });
            }
        });
}
