// src/gui/actions/export.rs
use crate::{error::ExportError, file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    super::commit_out_path(app);

    logf!(
        "Export: Begin rows={}, headers={}, format={:?}",
        app.table.row_count(),
        app.table.header_count(),
        app.state.options.export.format
    );

    let status_msg = match file::write_export(&app.state.options.export, &app.table) {
        Ok(path) => format!("Exported {} rows → {}", app.table.row_count(), path.display()),
        Err(ExportError::Empty) => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
