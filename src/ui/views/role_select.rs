use crate::OnboardingApp;
use crate::ui::helpers::icon_glyph;
use egui::{Align, Button, CentralPanel, Context, RichText, Vec2};

pub fn ui_role_select(app: &mut OnboardingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 440.0;
        let content_width = ui.available_width().min(max_width);

        let estimated_h = 400.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    ui.label(RichText::new("🏠").size(44.0));
                    ui.add_space(8.0);
                    ui.heading("Roominder");
                    ui.label(RichText::new("AI-Powered Colocation Platform").weak());
                    ui.add_space(20.0);

                    let card_w = (content_width * 0.95).clamp(160.0, 400.0);
                    for card in app.role_cards() {
                        let text = format!(
                            "{}  {}\n{}",
                            icon_glyph(card.icon),
                            card.title,
                            card.desc
                        );
                        let clicked = ui
                            .add(Button::new(text).min_size(Vec2::new(card_w, 64.0)))
                            .clicked();
                        ui.add_space(10.0);
                        if clicked {
                            app.elegir_rol(card.role);
                        }
                    }

                    ui.add_space(6.0);
                    ui.label(RichText::new("Select your role to continue").weak());
                });
        });

        ui.add_space(vs / 2.0);
    });
}
