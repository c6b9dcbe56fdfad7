// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Mirrors search progress into the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    via: String,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, via: s!() }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = text;
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, what: &str) {
        self.via = s!(what);
        self.set_status(format!("검색 중… ({what})"));
    }
    fn log(&mut self, msg: &str) {
        if self.via.is_empty() {
            self.set_status(s!(msg));
        } else {
            self.set_status(format!("{msg} ({})", self.via));
        }
    }
    // Final status is set by the UI thread once the result arrives.
}
