use super::*;

impl OnboardingApp {
    /// Al menos una tarjeta marcada en "What are you looking for?".
    pub fn has_interest_selection(&self) -> bool {
        self.interests.housing || self.interests.roommate
    }

    /// Señal que abre la revisión: cada pregunta del catálogo tiene una
    /// respuesta no vacía. Se deriva en cada consulta, nunca se cachea.
    pub fn lifestyle_complete(&self) -> bool {
        self.lifestyle.answers.is_complete(&self.questions)
    }

    /// La revisión solo confirma si cada fila resuelta trae una opción
    /// real. El parámetro pudo llegar recortado o corrupto, así que la
    /// comprobación va sobre las filas y no sobre el cuestionario.
    pub fn review_ready(&self) -> bool {
        let rows = self.review_rows();
        !rows.is_empty() && rows.iter().all(Selection::is_answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn una_tarjeta_basta_para_continuar() {
        let mut app = OnboardingApp::new();
        assert!(!app.has_interest_selection());

        app.toggle_interest(Interest::Roommate);
        assert!(app.has_interest_selection());

        app.toggle_interest(Interest::Housing);
        assert!(app.has_interest_selection());
    }

    #[test]
    fn completitud_se_deriva_del_catalogo() {
        let mut app = OnboardingApp::new();
        assert!(!app.lifestyle_complete());

        let pares: Vec<(String, String)> = app
            .questions
            .iter()
            .map(|q| (q.key.clone(), q.options[0].id.clone()))
            .collect();
        for (key, id) in &pares[..pares.len() - 1] {
            app.select_lifestyle_option(key, id);
        }
        assert!(!app.lifestyle_complete());

        let (key, id) = pares.last().unwrap();
        app.select_lifestyle_option(key, id);
        assert!(app.lifestyle_complete());
    }

    #[test]
    fn revision_lista_exige_todas_las_filas_con_opcion_real() {
        let mut app = OnboardingApp::new();
        for q in app.questions.clone() {
            app.lifestyle.answers.set_answer(&q.key, &q.options[1].id);
        }
        app.review.answers_param = app.lifestyle.answers.to_payload();
        assert!(app.review_ready());

        // Un id que el catálogo no conoce resuelve como "Not selected"
        app.lifestyle.answers.set_answer("sleep", "zzz");
        app.review.answers_param = app.lifestyle.answers.to_payload();
        assert!(!app.review_ready());
    }

    #[test]
    fn revision_vacia_nunca_esta_lista() {
        let app = OnboardingApp::new();
        assert!(!app.review_ready());
    }
}
