// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, csv};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.table.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = csv::to_export_string(&app.table, export.include_headers, export.delim());
    logf!(
        "Copy: rows={}, headers={}",
        app.table.row_count(),
        app.table.header_count()
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
