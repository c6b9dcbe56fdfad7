// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{Receiver, TryRecvError},
        Arc, Mutex,
    },
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{state::AppState, Settings},
    criteria::SearchCriteria,
    error::SearchError,
    extract::ListingTable,
};

use super::{actions, components, fonts};

/// What the worker thread sends back.
pub type SearchOutcome = (SearchCriteria, Result<ListingTable, SearchError>);

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            loge!("Config: {e}; using defaults");
            Settings::default()
        }
    };
    logf!("Init: base_url={} timeout={:?}", settings.base_url, settings.timeout);

    eframe::run_native(
        "법원경매 물건 검색",
        options,
        Box::new(move |cc| {
            fonts::install(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default(), settings)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings: Settings,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,

    // last search result; replaced wholesale by each search
    pub table: ListingTable,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<SearchOutcome>>,
}

impl App {
    pub fn new(state: AppState, settings: Settings) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        Self {
            state,
            settings,
            out_path_text,
            table: ListingTable::empty(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Pick up a finished search, if any.
    fn poll_worker(&mut self) {
        let polled = self.pending.as_ref().map(|rx| rx.try_recv());
        match polled {
            Some(Ok(outcome)) => {
                self.pending = None;
                actions::finish_search(self, outcome);
            }
            Some(Err(TryRecvError::Disconnected)) => {
                self.pending = None;
                self.running = false;
                loge!("Search: worker exited without a result");
                self.status("Error: 검색 작업이 중단되었습니다.");
            }
            Some(Err(TryRecvError::Empty)) | None => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("search_form").show(ctx, |ui| {
            ui.add_space(4.0);
            components::search_form::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
