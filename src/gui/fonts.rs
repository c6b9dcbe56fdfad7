// src/gui/fonts.rs
use std::{fs, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

// egui's bundled fonts have no Hangul.
const CJK_FONTS: &[&str] = &[
    "C:\\Windows\\Fonts\\malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
];

/// Append the first system CJK font found as a fallback for both families.
pub fn install(ctx: &egui::Context) {
    let Some((path, bytes)) = CJK_FONTS
        .iter()
        .find_map(|p| fs::read(p).ok().map(|b| (*p, b)))
    else {
        logw!("Fonts: no CJK font found; Korean text will render as boxes");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(s!("cjk"), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!("cjk"));
    }
    ctx.set_fonts(fonts);
    logd!("Fonts: using {path}");
}
