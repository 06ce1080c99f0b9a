use crate::OnboardingApp;
use crate::model::LocationStatus;
use crate::slider::{RADIUS_MAX, RADIUS_MIN};
use crate::ui::helpers::{labeled_input, radius_slider};
use crate::ui::layout::{ACCENT, step_header};
use egui::{Align, Button, CentralPanel, Context, RichText, Spinner};

pub fn ui_location(app: &mut OnboardingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let content_width = ui.available_width().min(max_width);

        let estimated_h = 480.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    step_header(ui, app);

                    ui.heading("Where do you want to live?");
                    ui.label(
                        RichText::new("Set your preferred location and search radius").weak(),
                    );
                    ui.add_space(14.0);

                    // Hueco del mapa, de momento solo decorativo
                    egui::Frame::default()
                        .fill(ui.visuals().faint_bg_color)
                        .inner_margin(egui::Margin::symmetric(8, 28))
                        .show(ui, |ui| {
                            ui.set_width(content_width * 0.92);
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new("📍").size(34.0));
                                ui.label(RichText::new("Map preview coming soon").weak());
                            });
                        });
                    ui.add_space(12.0);

                    let loading = app.location.status == LocationStatus::Loading;
                    let btn_w = (content_width * 0.9).clamp(120.0, 360.0);
                    let btn_locate = ui.add_enabled(
                        !loading,
                        Button::new("🧭 Use My Location").min_size(egui::Vec2::new(btn_w, 40.0)),
                    );
                    if btn_locate.clicked() {
                        app.request_device_location();
                    }
                    if loading {
                        ui.add_space(6.0);
                        ui.add(Spinner::new());
                    }
                    if app.location.status == LocationStatus::Error
                        && !app.location.error.is_empty()
                    {
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new(&app.location.error).color(egui::Color32::RED),
                        );
                    }
                    ui.add_space(12.0);

                    let field_w = content_width * 0.92;
                    labeled_input(
                        ui,
                        "search",
                        "Search city, area, or address",
                        &mut app.location.query,
                        false,
                        field_w,
                    );
                    ui.add_space(16.0);

                    // Radio de búsqueda
                    let slider_w = content_width * 0.88;
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Search Radius").strong());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    RichText::new(format!("{} km", app.location.radius))
                                        .color(ACCENT)
                                        .strong(),
                                );
                            },
                        );
                    });
                    ui.add_space(4.0);
                    if let Some(pointer_x) = radius_slider(ui, app.location.radius, slider_w) {
                        app.set_radius_from_pointer(pointer_x, slider_w);
                    }
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{RADIUS_MIN} km")).weak());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(RichText::new(format!("{RADIUS_MAX} km")).weak());
                            },
                        );
                    });
                    ui.add_space(16.0);

                    let btn_continue = ui.add_sized(
                        [btn_w, 46.0],
                        Button::new(RichText::new("Continue").strong()),
                    );
                    if btn_continue.clicked() {
                        app.continuar_desde_location();
                    }
                });
        });

        ui.add_space(vs / 2.0);
    });
}
