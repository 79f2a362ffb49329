// tests/gui_actions.rs
//
// GUI actions against a service that accepts but never answers.
use std::net::TcpListener;

use eframe::egui;
use word_indexer::{
    config::{options::ClientOptions, state::AppState},
    gui::{actions, app::App},
};

#[test]
fn word_box_hides_on_the_frame_indexing_starts() {
    // Held open for the whole test; connections queue in the backlog
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let opts = ClientOptions {
        service_url: format!("http://{}", listener.local_addr().unwrap()),
        timeout_secs: 30,
    };
    let mut app = App::new(AppState::new(opts)).unwrap();
    let ctx = egui::Context::default();

    app.state.gui.word_count_visible = true;
    let snap = app.client.snapshot();
    assert!(!app.word_box_hidden(&snap));

    app.state.gui.url_text = "http://example.com".into();
    actions::index(&mut app, &ctx);

    // snapshot taken before the click still says idle
    assert!(!snap.status.is_busy());
    assert!(app.word_box_hidden(&snap));
    assert!(!app.state.gui.word_count_visible);

    actions::cancel(&mut app);
    assert!(!app.word_box_hidden(&app.client.snapshot()));
    assert_eq!(app.status_text(), "Cancelled");
}
