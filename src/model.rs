use serde::{Deserialize, Serialize};

/// Una pregunta del cuestionario de estilo de vida. El catálogo embebido
/// siempre trae exactamente dos opciones por pregunta.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub key: String,   // identificador estable ("sleep", "work", ...)
    pub title: String, // título visible
    pub options: Vec<Choice>,
}

/// Una opción de respuesta. `icon` es un nombre simbólico;
/// la UI decide qué glifo dibujar para cada nombre.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Choice {
    pub id: String,
    pub label: String,
    pub icon: String,
}

impl Question {
    /// Busca una opción por id dentro de esta pregunta.
    pub fn option(&self, id: &str) -> Option<&Choice> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// Rol elegido en la pantalla de selección de rol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Housing,
    Owner,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Housing => "Looking for Housing",
            Role::Owner => "Property Owner",
        }
    }
}

/// Las dos tarjetas de la pantalla "What are you looking for?".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interest {
    Housing,
    Roommate,
}

/// Estado de la petición de ubicación aproximada.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LocationStatus {
    #[default]
    Idle,
    Loading,
    Error,
    Success,
}

/// Pantalla activa. El orden de los pasos es
/// Interests → Location → Profile → Lifestyle → Review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Safety,
    RoleSelect,
    Register,
    Interests,
    Location,
    Profile,
    Lifestyle,
    Review,
}

// ¡Implementa Default!
impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}
