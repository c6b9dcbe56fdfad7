// src/gui/components/search_form.rs

use eframe::egui::{self, widgets::Spinner, ComboBox};
use egui_extras::DatePickerButton;

use crate::{config::catalog, gui::{actions, app::App}, transport::TransportKind};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cat = catalog();

    {
        let search = &mut app.state.options.search;

        ui.horizontal(|ui| {
            ui.label("법원:");
            let before = search.court.clone();
            ComboBox::from_id_salt("court")
                .selected_text(search.court.as_str())
                .width(160.0)
                .show_ui(ui, |ui| {
                    for name in cat.court_names() {
                        ui.selectable_value(&mut search.court, s!(name), name);
                    }
                });
            if search.court != before {
                logf!("UI: court → {}", search.court);
            }

            ui.separator();

            ui.label("용도:");
            let before = search.building.clone();
            ComboBox::from_id_salt("building")
                .selected_text(search.building.as_str())
                .width(120.0)
                .show_ui(ui, |ui| {
                    for label in cat.building_labels() {
                        ui.selectable_value(&mut search.building, s!(label), label);
                    }
                });
            if search.building != before {
                logf!("UI: building → {}", search.building);
            }
        });

        ui.horizontal(|ui| {
            ui.label("매각기일:");
            ui.add(DatePickerButton::new(&mut search.start_date).id_salt("start_date"));
            ui.label("~");
            ui.add(DatePickerButton::new(&mut search.end_date).id_salt("end_date"));
            if search.start_date > search.end_date {
                ui.colored_label(ui.visuals().warn_fg_color, "시작일이 종료일보다 늦습니다");
            }

            ui.separator();

            ui.label("방식:");
            let before = search.transport;
            ComboBox::from_id_salt("transport")
                .selected_text(search.transport.label())
                .show_ui(ui, |ui| {
                    for kind in TransportKind::ALL {
                        ui.selectable_value(&mut search.transport, kind, kind.label());
                    }
                });
            if search.transport != before {
                logf!("UI: transport → {}", search.transport.slug());
            }
        });
    }

    ui.horizontal(|ui| {
        let clicked = ui
            .add_enabled(
                !app.running,
                egui::Button::new(egui::RichText::new("검색").strong()).min_size(egui::vec2(72.0, 0.0)),
            )
            .clicked();
        if clicked {
            actions::search(app, ui.ctx());
        }
        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
    });
}
