use crate::OnboardingApp;
use crate::ui::helpers::labeled_input;
use crate::ui::layout::step_header;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_profile(app: &mut OnboardingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let content_width = ui.available_width().min(max_width);

        let estimated_h = 420.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    step_header(ui, app);

                    ui.heading("Tell us about yourself");
                    ui.label(RichText::new("This helps us find your perfect match").weak());
                    ui.add_space(14.0);

                    // Avatar de momento fijo; la cámara vendrá después
                    ui.label(RichText::new("👤").size(46.0));
                    ui.label(RichText::new("📷 Add a photo").weak().small());
                    ui.add_space(14.0);

                    let field_w = content_width * 0.92;
                    labeled_input(ui, "user", "Full Name", &mut app.profile.full_name, false, field_w);
                    ui.add_space(8.0);
                    labeled_input(ui, "gift", "Age", &mut app.profile.age, false, field_w);
                    ui.add_space(8.0);
                    labeled_input(ui, "briefcase", "Occupation", &mut app.profile.occupation, false, field_w);
                    ui.add_space(18.0);

                    let btn_w = (content_width * 0.9).clamp(120.0, 360.0);
                    let btn_continue = ui.add_sized(
                        [btn_w, 46.0],
                        Button::new(RichText::new("Continue").strong()),
                    );
                    if btn_continue.clicked() {
                        app.continuar_desde_profile();
                    }
                });
        });

        ui.add_space(vs / 2.0);
    });
}
