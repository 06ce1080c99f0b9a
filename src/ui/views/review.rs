use crate::OnboardingApp;
use crate::ui::helpers::icon_glyph;
use crate::ui::layout::step_header;
use egui::{Button, CentralPanel, Color32, Context, Grid, RichText, ScrollArea};

pub fn ui_review(app: &mut OnboardingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let content_width = ui.available_width().min(max_width);

        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    step_header(ui, app);

                    ui.heading("Review your profile");
                    ui.label(
                        RichText::new(
                            "Confirm your lifestyle details before matching with roommates",
                        )
                        .weak(),
                    );
                    ui.add_space(12.0);

                    let rows = app.review_rows();
                    let ready = app.review_ready();

                    // Tarjeta de estado
                    egui::Frame::default()
                        .fill(ui.visuals().faint_bg_color)
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.set_width(content_width * 0.92);
                            ui.horizontal(|ui| {
                                ui.label("🛡 Profile check");
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ready {
                                            ui.label(
                                                RichText::new("Ready")
                                                    .color(Color32::from_rgb(22, 163, 74))
                                                    .strong(),
                                            );
                                        } else {
                                            ui.label(
                                                RichText::new("Missing info")
                                                    .color(Color32::RED)
                                                    .strong(),
                                            );
                                        }
                                    },
                                );
                            });
                            ui.label(RichText::new("Everything look correct?").strong());
                            ui.label(
                                RichText::new(
                                    "Validate your selections or go back to adjust them.",
                                )
                                .weak()
                                .small(),
                            );
                        });
                    ui.add_space(12.0);

                    ScrollArea::vertical()
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            Grid::new("review_grid")
                                .striped(true)
                                .spacing([12.0, 10.0])
                                .show(ui, |ui| {
                                    for row in &rows {
                                        ui.label(
                                            RichText::new(icon_glyph(&row.icon)).size(20.0),
                                        );
                                        ui.vertical(|ui| {
                                            ui.label(RichText::new(&row.title).strong());
                                            if row.is_answered() {
                                                ui.label(&row.label);
                                            } else {
                                                ui.label(
                                                    RichText::new(&row.label)
                                                        .color(Color32::RED),
                                                );
                                            }
                                        });
                                        ui.label(if row.is_answered() { "✅" } else { "⚠" });
                                        ui.end_row();
                                    }
                                });
                        });

                    ui.add_space(12.0);
                    let btn_w = (content_width * 0.9).clamp(120.0, 360.0);
                    let btn_confirm = ui.add_enabled(
                        ready,
                        Button::new(RichText::new("Confirm profile").strong())
                            .min_size(egui::Vec2::new(btn_w, 46.0)),
                    );
                    if btn_confirm.clicked() {
                        app.confirmar_perfil();
                    }
                    ui.add_space(6.0);
                    let btn_edit =
                        ui.add_sized([btn_w, 40.0], Button::new("Edit answers"));
                    if btn_edit.clicked() {
                        app.editar_respuestas();
                    }
                });
        });
    });
}
