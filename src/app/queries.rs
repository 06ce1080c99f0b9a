use super::*;

impl OnboardingApp {
    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.key == key)
    }

    /// Paso del asistente al que pertenece cada pantalla, con el relleno
    /// de barra que enseña la cabecera. Las pantallas fuera del asistente
    /// no llevan paso.
    pub fn step_for(&self, state: AppState) -> Option<StepInfo> {
        let (number, percent) = match state {
            AppState::Interests => (1, 22.0),
            AppState::Location => (2, 44.0),
            AppState::Profile => (3, 66.0),
            AppState::Lifestyle => (4, 80.0),
            AppState::Review => (5, 100.0),
            _ => return None,
        };
        Some(StepInfo {
            number,
            total: 5,
            percent,
        })
    }

    pub fn current_step(&self) -> Option<StepInfo> {
        self.step_for(self.state)
    }

    /// ¿La pantalla actual es uno de los cinco pasos del asistente?
    pub fn in_wizard(&self) -> bool {
        self.current_step().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_paso_tiene_numero_y_relleno() {
        let app = OnboardingApp::new();
        let pasos = [
            (AppState::Interests, 1, 22.0),
            (AppState::Location, 2, 44.0),
            (AppState::Profile, 3, 66.0),
            (AppState::Lifestyle, 4, 80.0),
            (AppState::Review, 5, 100.0),
        ];
        for (state, number, percent) in pasos {
            let step = app.step_for(state).unwrap();
            assert_eq!(step.number, number);
            assert_eq!(step.percent, percent);
            assert_eq!(step.label(), format!("Step {number} of 5"));
        }

        assert!(app.step_for(AppState::Welcome).is_none());
        assert!(app.step_for(AppState::Register).is_none());
    }

    #[test]
    fn busqueda_de_pregunta_por_clave() {
        let app = OnboardingApp::new();
        assert_eq!(app.question("guests").unwrap().title, "Guests");
        assert!(app.question("pets").is_none());
    }
}
