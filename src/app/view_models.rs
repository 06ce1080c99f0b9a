use super::*;

impl OnboardingApp {
    /// Filas resueltas para la pantalla de revisión. Se reconstruyen en
    /// cada consulta a partir del parámetro serializado, con el mismo
    /// fail-soft que tendría un deep link corrupto.
    pub fn review_rows(&self) -> Vec<Selection> {
        AnswerSet::from_payload(&self.review.answers_param).resolve_selections(&self.questions)
    }

    pub fn role_cards(&self) -> [RoleCard; 2] {
        [
            RoleCard {
                role: Role::Housing,
                title: "Looking for Housing",
                desc: "Search for housing 🏠, find compatible roommates 👥, or both",
                icon: "home",
            },
            RoleCard {
                role: Role::Owner,
                title: "Property Owner",
                desc: "List properties 🔑, manage tenants, and track occupancy",
                icon: "key",
            },
        ]
    }

    pub fn interest_cards(&self) -> [InterestCard; 2] {
        [
            InterestCard {
                interest: Interest::Housing,
                title: "Looking for Housing",
                subtitle: "Find places that fit you",
                icon: "home",
            },
            InterestCard {
                interest: Interest::Roommate,
                title: "Looking for Roommate",
                subtitle: "Meet people to share with",
                icon: "users",
            },
        ]
    }

    /// ¿Está marcada la tarjeta correspondiente?
    pub fn interest_selected(&self, interest: Interest) -> bool {
        match interest {
            Interest::Housing => self.interests.housing,
            Interest::Roommate => self.interests.roommate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn las_filas_de_revision_siguen_el_orden_del_catalogo() {
        let mut app = OnboardingApp::new();
        // Responder en orden inverso al catálogo
        let claves: Vec<String> = app.questions.iter().map(|q| q.key.clone()).collect();
        for key in claves.iter().rev() {
            let id = app.question(key).unwrap().options[0].id.clone();
            app.lifestyle.answers.set_answer(key, &id);
        }
        app.review.answers_param = app.lifestyle.answers.to_payload();

        let rows = app.review_rows();
        let row_keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(row_keys, claves.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn parametro_vacio_da_cinco_centinelas() {
        let app = OnboardingApp::new();
        let rows = app.review_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| !r.is_answered()));
        assert!(rows.iter().all(|r| r.icon == "help-circle"));
    }
}
