#![cfg(feature = "egui")]

use eframe::egui::{self, Align, Color32, Layout, RichText, Sense, Vec2};

use crate::catalog::FilterOption;
use crate::model::Operator;

use super::state::IconGridApp;
use super::text::highlight_query_job;

/// Input collected while drawing one frame; applied after drawing so the
/// state is replaced once per event.
#[derive(Debug, Default)]
struct StagedInput {
    search: Option<String>,
    filter: Option<String>,
    open_detail: Option<Operator>,
}

pub fn update(app: &mut IconGridApp, ctx: &egui::Context, _frame: &mut eframe::Frame) {
    egui::CentralPanel::default().show(ctx, |ui| {
        update_with_ui(app, ui);
    });
}

/// Draw the grid into an existing `ui`, for embedding in other applications.
pub fn update_with_ui(app: &mut IconGridApp, ui: &mut egui::Ui) {
    let mut staged = StagedInput::default();

    egui::TopBottomPanel::top("icongrid_filters").show_inside(ui, |ui| {
        ui.horizontal(|ui| {
            let mut search = app.state.search_text.clone();
            let resp = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text(app.config.search_placeholder.as_str())
                    .desired_width(240.0),
            );
            if resp.changed() {
                staged.search = Some(search);
            }
            ui.separator();
            filter_dropdown(app, ui, &mut staged);
        });
    });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        if let Some(msg) = app.state.empty_message() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(msg).color(Color32::GRAY).size(16.0));
            });
            return;
        }
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for op in &app.state.items {
                    if tile(app, ui, op).clicked() {
                        staged.open_detail = Some(op.clone());
                    }
                }
            });
        });
    });

    if let Some(text) = staged.search {
        app.on_search(&text);
    }
    if let Some(value) = staged.filter {
        app.on_filter(&value);
    }
    if let Some(op) = staged.open_detail {
        app.detail = Some(op);
    }
    detail_window(app, ui.ctx());
}

fn filter_dropdown(app: &IconGridApp, ui: &mut egui::Ui, staged: &mut StagedInput) {
    let current = app.state.filter.to_lowercase();
    egui::ComboBox::from_id_salt("icongrid_filter")
        .selected_text(app.dropdown_text())
        .show_ui(ui, |ui| {
            for opt in &app.options {
                match opt {
                    FilterOption::Value(v) => {
                        if ui.selectable_label(current == v.to_lowercase(), v.as_str()).clicked() {
                            staged.filter = Some(v.clone());
                        }
                    }
                    FilterOption::Group(g) => {
                        ui.separator();
                        ui.label(RichText::new(&g.name).strong());
                        for v in &g.items {
                            if ui.selectable_label(current == v.to_lowercase(), v.as_str()).clicked() {
                                staged.filter = Some(v.clone());
                            }
                        }
                    }
                }
            }
        });
}

fn tile(app: &IconGridApp, ui: &mut egui::Ui, op: &Operator) -> egui::Response {
    let size = Vec2::splat(app.config.tile_size);
    let icon = app.icons.resolve(&op.id);
    let inner = ui
        .push_id(&op.id, |ui| {
            ui.allocate_ui_with_layout(size, Layout::top_down(Align::Center), |ui| {
                ui.set_min_size(size);
                ui.add(
                    egui::Image::from_bytes(icon.uri(), egui::load::Bytes::Shared(icon.svg.clone()))
                        .fit_to_exact_size(Vec2::splat(app.config.icon_size)),
                );
                ui.label(highlight_query_job(&op.name, &app.state.search_text));
            })
        })
        .inner;
    ui.interact(inner.response.rect, inner.response.id.with("tile"), Sense::click())
        .on_hover_text(format!("{} · {}", op.role, op.unit))
}

fn detail_window(app: &mut IconGridApp, ctx: &egui::Context) {
    let Some(op) = app.detail.clone() else {
        return;
    };
    let mut open = true;
    egui::Window::new(&op.name)
        .id(egui::Id::new("icongrid_detail"))
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            let icon = app.icons.resolve(&op.id);
            ui.add(
                egui::Image::from_bytes(icon.uri(), egui::load::Bytes::Shared(icon.svg.clone()))
                    .fit_to_exact_size(Vec2::splat(app.config.icon_size * 2.0)),
            );
            egui::Grid::new("icongrid_detail_attrs").striped(true).show(ui, |ui| {
                ui.label(RichText::new("Role").strong());
                ui.label(&op.role);
                ui.end_row();
                ui.label(RichText::new("Unit").strong());
                ui.label(&op.unit);
                ui.end_row();
                for key in op.extra.keys() {
                    ui.label(RichText::new(key).strong());
                    ui.label(op.extra_text(key).unwrap_or_default());
                    ui.end_row();
                }
            });
        });
    if !open {
        app.detail = None;
    }
}
