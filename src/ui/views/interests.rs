use crate::OnboardingApp;
use crate::ui::helpers::interest_card_button;
use crate::ui::layout::step_header;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_interests(app: &mut OnboardingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let content_width = ui.available_width().min(max_width);

        let estimated_h = 380.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    step_header(ui, app);

                    ui.heading("What are you looking for?");
                    ui.label(RichText::new("Select one or both options").weak());
                    ui.add_space(16.0);

                    let card_w = (content_width * 0.95).clamp(160.0, 380.0);
                    for card in app.interest_cards() {
                        let active = app.interest_selected(card.interest);
                        if interest_card_button(ui, &card, active, card_w) {
                            app.toggle_interest(card.interest);
                        }
                        ui.add_space(10.0);
                    }

                    ui.add_space(8.0);
                    let btn_w = (content_width * 0.9).clamp(120.0, 360.0);
                    let btn_continue = ui.add_enabled(
                        app.has_interest_selection(),
                        Button::new(RichText::new("Continue").strong())
                            .min_size(egui::Vec2::new(btn_w, 46.0)),
                    );
                    if btn_continue.clicked() {
                        app.continuar_desde_interests();
                    }
                });
        });

        ui.add_space(vs / 2.0);
    });
}
