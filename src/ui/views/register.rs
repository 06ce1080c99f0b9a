use crate::OnboardingApp;
use crate::ui::helpers::labeled_input;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_register(app: &mut OnboardingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let content_width = ui.available_width().min(max_width);

        let estimated_h = 440.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    ui.with_layout(egui::Layout::left_to_right(Align::Min), |ui| {
                        if ui.button("⬅ Back").clicked() {
                            app.back_route();
                        }
                    });
                    ui.add_space(10.0);

                    ui.heading("Create Account");
                    ui.label(RichText::new("Join our community and find your perfect home").weak());
                    if let Some(role) = app.role {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("Signing up as: {}", role.label())).weak());
                    }
                    ui.add_space(16.0);

                    let field_w = content_width * 0.92;
                    labeled_input(ui, "user", "Full Name", &mut app.register.full_name, false, field_w);
                    ui.add_space(8.0);
                    labeled_input(ui, "mail", "Email Address", &mut app.register.email, false, field_w);
                    ui.add_space(8.0);
                    labeled_input(ui, "lock", "Password", &mut app.register.password, true, field_w);
                    ui.add_space(8.0);
                    labeled_input(ui, "lock", "Confirm Password", &mut app.register.confirm, true, field_w);
                    ui.add_space(16.0);

                    let btn_w = (content_width * 0.9).clamp(120.0, 360.0);
                    let btn_create = ui.add_sized(
                        [btn_w, 46.0],
                        Button::new(RichText::new("Create Account").strong()),
                    );
                    if btn_create.clicked() {
                        app.enviar_registro();
                    }

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        ui.add_space((content_width - 240.0).max(0.0) / 2.0);
                        ui.label(RichText::new("Already have an account?").weak());
                        if ui.link("Sign In").clicked() {
                            app.abrir_login();
                        }
                    });

                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(
                            "By creating an account, you agree to our Terms of Service \
                             and Privacy Policy",
                        )
                        .weak()
                        .small(),
                    );
                });
        });

        ui.add_space(vs / 2.0);
    });
}
