// src/gui/actions/search.rs
use crate::gui::app::App;

pub fn search(app: &mut App) {
    let n = app.client.lookup_word(&app.state.gui.word_text);
    logd!("UI: Search {:?} → {}", app.state.gui.word_text, n);
    app.state.gui.word_count_visible = true;
}
