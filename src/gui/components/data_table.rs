// src/gui/components/data_table.rs
//
// Draws the result table. Purely a view over App::table.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{extract::ListingTable, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let table = &app.table;
    let cols = table.column_count();

    if cols == 0 {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("검색 조건을 선택하고 검색을 누르세요.").weak());
        });
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let numeric = numeric_columns(table, cols);
    let avail_h = ui.available_height();

    egui::ScrollArea::new([true, false])
        .id_salt("listing_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                // Fresh widths whenever the shape changes
                .id_salt(("listing_table", cols))
                .columns(Column::auto().at_least(40.0).resizable(true).clip(true), cols)
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        let label = table
                            .headers
                            .as_ref()
                            .and_then(|h| h.get(ci).cloned())
                            .unwrap_or_else(|| format!("Col {}", ci + 1));
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.row_count(), |mut row| {
                        let data = &table.rows[row.index()];
                        for ci in 0..cols {
                            // Ragged rows: missing trailing cells draw empty
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric[ci] {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.label(cell);
                                    });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.label(cell);
                                    });
                                }
                            });
                        }
                    });
                });
        });
}

/// A column is numeric when every non-empty cell is digits and commas (amounts, counts).
fn numeric_columns(table: &ListingTable, cols: usize) -> Vec<bool> {
    (0..cols)
        .map(|ci| {
            let mut seen = false;
            let all = table.rows.iter().filter_map(|r| r.get(ci)).all(|c| {
                if c.is_empty() {
                    return true;
                }
                seen = true;
                c.chars().all(|ch| ch.is_ascii_digit() || ch == ',')
            });
            all && seen
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_numeric() {
        let t = ListingTable::new(
            None,
            vec![
                vec![s!("2024타경1"), s!("1,000,000"), s!("")],
                vec![s!("2024타경2"), s!("")],
            ],
        );
        assert_eq!(numeric_columns(&t, 3), vec![false, true, false]);
    }
}
