use super::*;

impl OnboardingApp {
    /// Borra todo lo andado en el asistente y vuelve a la portada. El
    /// catálogo embebido se relee, el historial y las respuestas mueren.
    pub fn restart_onboarding(&mut self) {
        *self = OnboardingApp::new();
    }

    pub fn confirm_restart(&mut self, ctx: &egui::Context) {
        egui::Window::new("Start over?")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("This clears your selections and takes you back to the start.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, start over").clicked() {
                        self.restart_onboarding();
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_restart = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reiniciar_borra_respuestas_e_historial() {
        let mut app = OnboardingApp::new();
        app.empezar_onboarding();
        app.elegir_rol(Role::Owner);
        app.enviar_registro();
        app.toggle_interest(Interest::Housing);
        app.select_lifestyle_option("sleep", "early");
        app.confirm_restart = true;

        app.restart_onboarding();

        assert_eq!(app.state, AppState::Welcome);
        assert!(app.nav_stack.is_empty());
        assert!(app.role.is_none());
        assert!(!app.interests.housing);
        assert!(app.lifestyle.answers.is_empty());
        assert!(app.review.answers_param.is_empty());
        assert!(!app.confirm_restart);
    }
}
