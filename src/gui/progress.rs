// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;

use crate::{client::Outcome, progress::Progress};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, url: &str) {
        self.set_status(format!("Indexing {url}…"));
    }
    fn finish(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Applied { words } => self.set_status(format!("Indexed {words} words")),
            Outcome::Failed(e) => self.set_status(format!("Error: {e}")),
            // a newer request owns the status line
            Outcome::Superseded => {}
        }
        // worker thread: wake the UI so it picks up the new state
        self.ctx.request_repaint();
    }
}
