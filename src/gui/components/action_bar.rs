// src/gui/components/action_bar.rs

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        ui.horizontal(|ui| {
            let prev_fmt = export.format;
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            if export.format != prev_fmt {
                logf!("UI: Export format → {:?}", export.format);
                // Refresh the extension unless the user is mid-edit.
                if !app.state.gui.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });
    }

    // --- Output field ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }
    });

    if open_folder_clicked {
        open_output_folder(app);
    }

    // --- Copy / Export + status ---
    ui.horizontal(|ui| {
        let has_rows = !app.table.is_empty();

        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        ui.separator();
        ui.label(app.status_text());
    });
}

/// Open the output folder in the system file explorer.
fn open_output_folder(app: &App) {
    let path = app.state.options.export.out_path();
    let folder = path.parent().unwrap_or_else(|| Path::new("."));
    let folder_to_open = find_nearest_existing_parent(folder);

    let absolute_folder = match std::fs::canonicalize(&folder_to_open) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Walk up until something exists; the output dir is only created on export.
fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    std::process::Command::new(program)
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to spawn {program}: {e}"))
}
