// src/data.rs

use crate::model::Question;
use serde_yaml;

/// Carga el catálogo de preguntas de estilo de vida desde el YAML embebido
pub fn read_lifestyle_questions() -> Vec<Question> {
    let file_content = include_str!("data/lifestyle_questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el catálogo de preguntas YAML")
}
