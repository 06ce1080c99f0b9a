// src/view_models.rs

use crate::model::{Interest, Role};

/// Posición dentro del asistente de onboarding.
#[derive(Clone, Copy, Debug)]
pub struct StepInfo {
    pub number: usize, // 1-based
    pub total: usize,
    pub percent: f32, // relleno de la barra (0-100)
}

impl StepInfo {
    pub fn label(&self) -> String {
        format!("Step {} of {}", self.number, self.total)
    }

    pub fn fraction(&self) -> f32 {
        self.percent / 100.0
    }
}

/// Tarjeta de la pantalla de selección de rol.
#[derive(Clone, Copy, Debug)]
pub struct RoleCard {
    pub role: Role,
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

/// Tarjeta de la pantalla "What are you looking for?".
#[derive(Clone, Copy, Debug)]
pub struct InterestCard {
    pub interest: Interest,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}
