use crate::OnboardingApp;
use crate::ui::layout::{ACCENT, centered_panel};
use egui::{Button, Context, RichText};

pub fn ui_safety(app: &mut OnboardingApp, ctx: &Context) {
    centered_panel(ctx, 340.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🛡").size(52.0));
            ui.add_space(14.0);
            ui.heading("Safe & Secure Platform");
            ui.add_space(10.0);
            ui.label(
                "Digital contracts, verified profiles, and secure \
                 communication for a trustworthy colocation experience.",
            );
            ui.add_space(16.0);

            ui.label(RichText::new("○  ●").color(ACCENT));
            ui.add_space(16.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 360.0);
            let btn_start = ui.add_sized(
                [btn_w, 46.0],
                Button::new(RichText::new("Get Started ▶").strong()),
            );
            if btn_start.clicked() {
                app.empezar_onboarding();
            }
        });
    });
}
