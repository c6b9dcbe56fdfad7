// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use auction_scrape::{config::state::GuiState, gui, log, loge};
use eframe::egui::{IconData, ViewportBuilder};

const ICON_SIZE: u32 = 64;

/// Gavel-blue rounded square with a white bar; drawn, not loaded.
fn app_icon() -> IconData {
    let n = ICON_SIZE as i32;
    let r = 12;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..n {
        for x in 0..n {
            // distance into the nearest corner square, for rounding
            let cx = if x < r { r - x } else if x >= n - r { x - (n - r - 1) } else { 0 };
            let cy = if y < r { r - y } else if y >= n - r { y - (n - r - 1) } else { 0 };
            let inside = cx * cx + cy * cy <= r * r;
            let bar = (20..44).contains(&x) && (28..36).contains(&y);
            let px = match (inside, bar) {
                (false, _) => [0, 0, 0, 0],
                (true, true) => [255, 255, 255, 255],
                (true, false) => [0x1f, 0x4e, 0x8c, 255],
            };
            rgba.extend_from_slice(&px);
        }
    }
    IconData { rgba, width: ICON_SIZE, height: ICON_SIZE }
}

fn main() {
    log::init(log::Sink::File);

    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gs.window_w as f32, gs.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
