// src/gui/actions/search.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    file,
    gui::{
        app::{App, SearchOutcome},
        progress::GuiProgress,
    },
    search::{self, NO_RESULTS},
};

/// Start one search on a worker thread. Ignored while one is running.
pub fn search(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Search: Clicked while running, ignored");
        return;
    }

    let opts = &app.state.options.search;
    let criteria = match opts.to_criteria() {
        Ok(c) => c,
        Err(e) => {
            logw!("Search: Rejected criteria: {}", e);
            app.status(format!("Error: {}", e.user_message()));
            return;
        }
    };
    let kind = opts.transport;
    let settings = app.settings.clone();
    let status = app.status.clone();
    let ctx2 = ctx.clone();

    let (tx, rx) = mpsc::channel::<SearchOutcome>();
    app.running = true;
    app.pending = Some(rx);
    app.status(format!("검색 중… ({})", kind.label()));

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx2.clone());
        let result = search::search(kind, &settings, &criteria, Some(&mut prog));
        // Receiver gone means the window closed; nothing to report to.
        let _ = tx.send((criteria, result));
        ctx2.request_repaint();
    });
}

/// Apply a finished search on the UI thread.
pub fn finish_search(app: &mut App, (criteria, result): SearchOutcome) {
    app.running = false;

    match result {
        Ok(table) if table.is_empty() => {
            app.table = table;
            app.status(NO_RESULTS);
        }
        Ok(table) => {
            let n = table.row_count();
            app.table = table;

            // Suggest a file name for this search unless the user typed one.
            if !app.state.gui.out_path_dirty {
                let export = &mut app.state.options.export;
                export.set_stem(&file::default_stem(&criteria));
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
            app.status(format!("{n}건 조회됨"));
        }
        Err(e) => {
            // Stale rows would read as results for the new criteria.
            app.table.rows.clear();
            app.table.headers = None;
            app.status(format!("Error: {}", e.user_message()));
        }
    }
}
