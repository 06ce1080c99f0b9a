use crate::OnboardingApp;
use crate::ui::layout::{ACCENT, centered_panel};
use egui::{Button, Context, RichText};

pub fn ui_welcome(app: &mut OnboardingApp, ctx: &Context) {
    centered_panel(ctx, 340.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("👥").size(52.0));
            ui.add_space(14.0);
            ui.heading("Match Compatible Roommates");
            ui.add_space(10.0);
            ui.label(
                "Connect with like-minded people who share your values, \
                 habits, and lifestyle for harmonious living.",
            );
            ui.add_space(16.0);

            // Puntos de paginación del carrusel
            ui.label(RichText::new("●  ○").color(ACCENT));
            ui.add_space(16.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 360.0);
            let btn_next =
                ui.add_sized([btn_w, 46.0], Button::new(RichText::new("Next ▶").strong()));
            if btn_next.clicked() {
                app.continuar_desde_welcome();
            }

            // Aviso tras confirmar el perfil
            if !app.message.is_empty() {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(&app.message)
                        .color(egui::Color32::YELLOW)
                        .strong(),
                );
            }
        });
    });
}
