pub mod answers;
pub mod app;
pub mod data;
#[cfg(not(target_arch = "wasm32"))]
pub mod geo;
pub mod model;
pub mod slider;
pub mod ui;
pub mod view_models;

pub use app::OnboardingApp;
