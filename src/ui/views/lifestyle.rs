use crate::OnboardingApp;
use crate::ui::helpers::option_card;
use crate::ui::layout::step_header;
use egui::{Button, CentralPanel, Context, RichText, ScrollArea};

pub fn ui_lifestyle(app: &mut OnboardingApp, ctx: &Context) {
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

                    ui.heading("Your Lifestyle");
                    ui.label(
                        RichText::new("Help us match you with compatible roommates").weak(),
                    );
                    ui.add_space(12.0);

                    // Copia del catálogo para no retener el borrow de `app`
                    // mientras se procesan los clicks
                    let questions = app.questions.clone();
                    let card_w = (content_width * 0.45).clamp(120.0, 190.0);

                    ScrollArea::vertical()
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            for q in &questions {
                                ui.label(RichText::new(&q.title).strong());
                                ui.add_space(4.0);
                                ui.horizontal(|ui| {
                                    for opt in &q.options {
                                        let selected = app.lifestyle.answers.answer_for(&q.key)
                                            == Some(opt.id.as_str());
                                        if option_card(ui, &opt.icon, &opt.label, selected, card_w)
                                        {
                                            app.select_lifestyle_option(&q.key, &opt.id);
                                        }
                                    }
                                });
                                ui.add_space(12.0);
                            }
                        });

                    ui.add_space(6.0);
                    let btn_w = (content_width * 0.9).clamp(120.0, 360.0);
                    let btn_continue = ui.add_enabled(
                        app.lifestyle_complete(),
                        Button::new(RichText::new("Continue").strong())
                            .min_size(egui::Vec2::new(btn_w, 46.0)),
                    );
                    if btn_continue.clicked() {
                        app.continuar_desde_lifestyle();
                    }
                });
        });
    });
}
