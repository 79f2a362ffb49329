// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, PoisonError},
};

use eframe::egui;

use crate::{
    client::{ClientSnapshot, IndexClient},
    config::{options::ClientOptions, state::AppState},
    core::HttpIndexService,
    error::ClientError,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let client_opts = ClientOptions::load(None).unwrap_or_else(|e| {
        loge!("Config: {} (using defaults)", e);
        ClientOptions::default()
    });
    let app = App::new(AppState::new(client_opts))?;

    eframe::run_native(
        "Word Indexer",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

pub struct App {
    // UI thread only
    pub state: AppState,

    pub client: IndexClient<HttpIndexService>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Result<Self, ClientError> {
        let service = HttpIndexService::new(&state.options)?;
        logf!("Init: service={}", service.endpoint());

        Ok(Self {
            state,
            client: IndexClient::new(service),
            status: Arc::new(Mutex::new(s!("Idle"))),
        })
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    /// Word box is hidden while loading. `snap` may predate a request the
    /// URL bar started this frame, so ask the client too.
    pub fn word_box_hidden(&self, snap: &ClientSnapshot) -> bool {
        snap.status.is_busy() || self.client.is_busy()
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snap = self.client.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            components::url_bar::draw(ui, self, &snap);

            if self.word_box_hidden(&snap) {
                return;
            }

            ui.separator();
            components::word_box::draw(ui, self, &snap);

            ui.separator();
            components::word_table::draw(ui, self);
        });
    }
}
