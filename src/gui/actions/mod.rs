// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,search,finish_search}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod search;  // src/gui/actions/search.rs

pub use copy::copy;
pub use export::export;
pub use search::{finish_search, search};

use crate::gui::app::App;

/// Take the typed output path into ExportOptions once the user has edited it.
pub(super) fn commit_out_path(app: &mut App) {
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.state.gui.out_path_dirty = false;
    }
}
