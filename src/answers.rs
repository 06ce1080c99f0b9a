// src/answers.rs
//
// Modelo de respuestas del cuestionario. No conoce la UI: solo el
// catálogo de preguntas y el mapa clave -> id de opción elegida.

use crate::model::Question;
use serde::Serialize;
use std::collections::BTreeMap;

/// Etiqueta que se muestra cuando una pregunta no tiene respuesta válida.
pub const NOT_SELECTED_LABEL: &str = "Not selected";
/// Icono de relleno para respuestas sin resolver.
pub const NOT_SELECTED_ICON: &str = "help-circle";

/// Mapa pregunta -> opción elegida. Admite claves que no están en el
/// catálogo e ids que no pertenecen a la pregunta: esas entradas se
/// tratan como "sin responder" al resolver, nunca son un error.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnswerSet {
    map: BTreeMap<String, String>,
}

/// Una fila ya resuelta para la pantalla de revisión.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub key: String,
    pub title: String,
    pub label: String,
    pub icon: String,
}

impl Selection {
    pub fn is_answered(&self) -> bool {
        self.label != NOT_SELECTED_LABEL
    }
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o reemplaza la respuesta de una pregunta. No valida nada:
    /// la clave y el id se guardan tal cual llegan.
    pub fn set_answer(&mut self, question_key: &str, option_id: &str) {
        self.map
            .insert(question_key.to_owned(), option_id.to_owned());
    }

    pub fn answer_for(&self, question_key: &str) -> Option<&str> {
        self.map.get(question_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Completo si y solo si cada pregunta del catálogo tiene una entrada
    /// no vacía. Las claves sobrantes no cuentan. Se recalcula siempre,
    /// nunca se cachea.
    pub fn is_complete(&self, catalog: &[Question]) -> bool {
        catalog
            .iter()
            .all(|q| self.map.get(&q.key).is_some_and(|id| !id.is_empty()))
    }

    /// Proyección para la pantalla de revisión: una fila por pregunta del
    /// catálogo, en el orden del catálogo. Una entrada cuyo id no existe
    /// en su pregunta sale igual que una pregunta sin responder.
    pub fn resolve_selections(&self, catalog: &[Question]) -> Vec<Selection> {
        catalog
            .iter()
            .map(|q| {
                let option = self
                    .map
                    .get(&q.key)
                    .and_then(|id| q.option(id));
                match option {
                    Some(o) => Selection {
                        key: q.key.clone(),
                        title: q.title.clone(),
                        label: o.label.clone(),
                        icon: o.icon.clone(),
                    },
                    None => Selection {
                        key: q.key.clone(),
                        title: q.title.clone(),
                        label: NOT_SELECTED_LABEL.to_owned(),
                        icon: NOT_SELECTED_ICON.to_owned(),
                    },
                }
            })
            .collect()
    }

    /// Codifica el mapa como objeto JSON para el parámetro `answers` que
    /// viaja hacia la pantalla de revisión.
    pub fn to_payload(&self) -> String {
        serde_json::to_string(self).expect("No se pudo serializar las respuestas")
    }

    /// Inversa de [`AnswerSet::to_payload`], tolerante a basura: si el texto
    /// no es JSON, o no es un objeto, devuelve el mapa vacío. De un objeto
    /// se conservan solo las entradas con valor de tipo string.
    pub fn from_payload(text: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };
        let object = match value.as_object() {
            Some(o) => o,
            None => return Self::default(),
        };
        let map = object
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_owned())))
            .collect();
        Self { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_lifestyle_questions;

    fn catalog() -> Vec<Question> {
        read_lifestyle_questions()
    }

    #[test]
    fn set_answer_inserts_and_replaces() {
        let mut answers = AnswerSet::new();
        answers.set_answer("sleep", "early");
        assert_eq!(answers.answer_for("sleep"), Some("early"));

        answers.set_answer("sleep", "night");
        assert_eq!(answers.answer_for("sleep"), Some("night"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn is_complete_requires_every_catalog_key() {
        let catalog = catalog();
        let mut answers = AnswerSet::new();
        assert!(!answers.is_complete(&catalog));

        answers.set_answer("sleep", "early");
        answers.set_answer("cleanliness", "tidy");
        answers.set_answer("social", "party");
        answers.set_answer("guests", "often");
        assert!(!answers.is_complete(&catalog), "falta work");

        answers.set_answer("work", "home");
        assert!(answers.is_complete(&catalog));
    }

    #[test]
    fn is_complete_ignores_extra_keys_and_rejects_empty_values() {
        let catalog = catalog();
        let mut answers = AnswerSet::new();
        for q in &catalog {
            answers.set_answer(&q.key, &q.options[0].id);
        }
        answers.set_answer("pets", "dogs"); // clave desconocida
        assert!(answers.is_complete(&catalog));

        answers.set_answer("work", "");
        assert!(!answers.is_complete(&catalog), "entrada vacía no cuenta");
    }

    #[test]
    fn unknown_option_id_counts_for_completeness_but_resolves_as_missing() {
        let catalog = catalog();
        let mut answers = AnswerSet::new();
        answers.set_answer("sleep", "no-such-option");

        // set_answer es permisivo: la entrada existe y no está vacía...
        assert!(answers.answer_for("sleep").is_some());

        // ...pero al resolver sale como sin responder.
        let rows = answers.resolve_selections(&catalog);
        assert_eq!(rows[0].label, NOT_SELECTED_LABEL);
        assert_eq!(rows[0].icon, NOT_SELECTED_ICON);
        assert!(!rows[0].is_answered());
    }

    #[test]
    fn resolve_selections_follows_catalog_order() {
        let catalog = catalog();

        // Insertamos en orden inverso al catálogo
        let mut answers = AnswerSet::new();
        answers.set_answer("work", "office");
        answers.set_answer("guests", "rarely");
        answers.set_answer("social", "quiet");
        answers.set_answer("cleanliness", "relaxed");
        answers.set_answer("sleep", "night");

        let rows = answers.resolve_selections(&catalog);
        assert_eq!(rows.len(), catalog.len());
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["sleep", "cleanliness", "social", "guests", "work"]);
        assert_eq!(rows[0].label, "Night Owl");
        assert_eq!(rows[4].label, "Office/Hybrid");
    }

    #[test]
    fn resolve_selections_length_is_catalog_length_even_when_empty() {
        let catalog = catalog();
        let rows = AnswerSet::new().resolve_selections(&catalog);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| !r.is_answered()));
    }

    #[test]
    fn payload_round_trip_preserves_answers() {
        let mut answers = AnswerSet::new();
        answers.set_answer("sleep", "early");
        answers.set_answer("work", "office");
        answers.set_answer("pets", "dogs");

        let payload = answers.to_payload();
        assert_eq!(AnswerSet::from_payload(&payload), answers);
    }

    #[test]
    fn from_payload_tolerates_garbage() {
        assert!(AnswerSet::from_payload("not json").is_empty());
        assert!(AnswerSet::from_payload("42").is_empty());
        assert!(AnswerSet::from_payload("null").is_empty());
        assert!(AnswerSet::from_payload("[\"sleep\",\"early\"]").is_empty());
        assert!(AnswerSet::from_payload("").is_empty());
    }

    #[test]
    fn from_payload_keeps_only_string_values() {
        let answers = AnswerSet::from_payload(r#"{"sleep":"early","age":27,"ok":true}"#);
        assert_eq!(answers.answer_for("sleep"), Some("early"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn full_questionnaire_flow() {
        let catalog = catalog();
        let mut answers = AnswerSet::new();

        // Cuatro respuestas: aún incompleto
        answers.set_answer("sleep", "early");
        answers.set_answer("cleanliness", "tidy");
        answers.set_answer("social", "quiet");
        answers.set_answer("guests", "rarely");
        assert!(!answers.is_complete(&catalog));

        // La quinta lo completa
        answers.set_answer("work", "home");
        assert!(answers.is_complete(&catalog));

        // Viaje por el parámetro `answers` hasta revisión
        let restored = AnswerSet::from_payload(&answers.to_payload());
        let rows = restored.resolve_selections(&catalog);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(Selection::is_answered));
    }
}
