mod helpers;
pub mod layout;
pub mod views;

use crate::app::OnboardingApp;
use crate::model::{AppState, LocationStatus};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for OnboardingApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // La ubicación se resuelve en otro hilo; aquí se recoge el resultado
        if self.state == AppState::Location {
            self.poll_location_result();
            if self.location.status == LocationStatus::Loading {
                ctx.request_repaint_after(std::time::Duration::from_millis(150));
            }
        }

        // BOTÓN SUPERIOR DE EMPEZAR DE NUEVO (solo en los pasos del asistente)
        if self.in_wizard() {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Safety => views::safety::ui_safety(self, ctx),
            AppState::RoleSelect => views::role_select::ui_role_select(self, ctx),
            AppState::Register => views::register::ui_register(self, ctx),
            AppState::Interests => views::interests::ui_interests(self, ctx),
            AppState::Location => views::location::ui_location(self, ctx),
            AppState::Profile => views::profile::ui_profile(self, ctx),
            AppState::Lifestyle => views::lifestyle::ui_lifestyle(self, ctx),
            AppState::Review => views::review::ui_review(self, ctx),
        }

        if self.confirm_restart {
            self.confirm_restart(ctx);
        }
    }
}
