use crate::answers::{AnswerSet, Selection};
use crate::data::read_lifestyle_questions;
use crate::model::{AppState, Interest, LocationStatus, Question, Role};
use crate::slider::{RADIUS_DEFAULT, RADIUS_MAX, RADIUS_MIN, position_to_value};
use eframe::egui;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{InterestCard, RoleCard, StepInfo};

/// Estado propio de la pantalla "What are you looking for?".
#[derive(Clone, Copy, Debug, Default)]
pub struct InterestsState {
    pub housing: bool,
    pub roommate: bool,
}

/// Estado propio de la pantalla de ubicación. El receptor queda armado
/// mientras un hilo resuelve la ubicación aproximada.
pub struct LocationState {
    pub query: String,
    pub radius: u32, // km, siempre dentro de [RADIUS_MIN, RADIUS_MAX]
    pub status: LocationStatus,
    pub error: String,
    pub rx: Option<Receiver<Result<String, String>>>,
}

impl Default for LocationState {
    fn default() -> Self {
        Self {
            query: String::new(),
            radius: RADIUS_DEFAULT,
            status: LocationStatus::Idle,
            error: String::new(),
            rx: None,
        }
    }
}

/// Campos del formulario de perfil.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub full_name: String,
    pub age: String,
    pub occupation: String,
}

/// Campos del formulario de registro. Sin backend todavía: nada de esto
/// se envía a ninguna parte.
#[derive(Clone, Debug, Default)]
pub struct RegisterState {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Estado propio del cuestionario de estilo de vida.
#[derive(Clone, Debug, Default)]
pub struct LifestyleState {
    pub answers: AnswerSet,
}

/// Estado propio de la pantalla de revisión: el parámetro `answers`
/// serializado que llegó desde el cuestionario.
#[derive(Clone, Debug, Default)]
pub struct ReviewState {
    pub answers_param: String,
}

pub struct OnboardingApp {
    /// Catálogo de preguntas de estilo de vida, en orden canónico
    pub questions: Vec<Question>,
    pub state: AppState,
    /// Historial de pantallas para volver atrás
    pub nav_stack: Vec<AppState>,
    /// Rol elegido en la pantalla de entrada
    pub role: Option<Role>,
    pub interests: InterestsState,
    pub location: LocationState,
    pub profile: ProfileState,
    pub register: RegisterState,
    pub lifestyle: LifestyleState,
    pub review: ReviewState,
    /// Aviso puntual que se muestra en la portada
    pub message: String,
    /// Diálogo de confirmación de "Start over" visible
    pub confirm_restart: bool,
}

impl OnboardingApp {
    pub fn new() -> Self {
        Self {
            questions: read_lifestyle_questions(),
            state: AppState::default(),
            nav_stack: Vec::new(),
            role: None,
            interests: InterestsState::default(),
            location: LocationState::default(),
            profile: ProfileState::default(),
            register: RegisterState::default(),
            lifestyle: LifestyleState::default(),
            review: ReviewState::default(),
            message: String::new(),
            confirm_restart: false,
        }
    }
}
