use super::*;

impl OnboardingApp {
    /// Apila la pantalla actual y entra en `next` con su estado recién
    /// inicializado, igual que un `push` del router de la app móvil.
    pub fn push_route(&mut self, next: AppState) {
        self.nav_stack.push(self.state);
        self.enter_screen(next);
        self.state = next;
    }

    /// Sustituye la pantalla actual sin dejar entrada en el historial.
    pub fn replace_route(&mut self, next: AppState) {
        self.enter_screen(next);
        self.state = next;
    }

    /// Vuelve a la pantalla anterior conservando su estado tal y como
    /// quedó. Sin historial no hace nada.
    pub fn back_route(&mut self) {
        if let Some(prev) = self.nav_stack.pop() {
            self.state = prev;
            self.message.clear();
        }
    }

    // --- Handlers de cada pantalla ---

    pub fn continuar_desde_welcome(&mut self) {
        self.replace_route(AppState::Safety);
    }

    pub fn empezar_onboarding(&mut self) {
        self.push_route(AppState::RoleSelect);
    }

    pub fn elegir_rol(&mut self, role: Role) {
        self.role = Some(role);
        self.push_route(AppState::Register);
    }

    /// "Create Account" aún no registra nada: pasa directo al primer
    /// paso del asistente.
    pub fn enviar_registro(&mut self) {
        self.push_route(AppState::Interests);
    }

    /// El enlace "Sign In" apunta a una pantalla que todavía no existe.
    pub fn abrir_login(&mut self) {
        log::warn!("Inicio de sesión solicitado pero la pantalla no existe");
    }

    pub fn continuar_desde_interests(&mut self) {
        if !self.has_interest_selection() {
            return;
        }
        self.push_route(AppState::Location);
    }

    pub fn continuar_desde_location(&mut self) {
        self.push_route(AppState::Profile);
    }

    pub fn continuar_desde_profile(&mut self) {
        self.push_route(AppState::Lifestyle);
    }

    /// Serializa las respuestas y entra en revisión. Volver a continuar
    /// tras editar reemplaza el parámetro entero, nunca lo mezcla.
    pub fn continuar_desde_lifestyle(&mut self) {
        if !self.lifestyle_complete() {
            return;
        }
        self.review.answers_param = self.lifestyle.answers.to_payload();
        self.push_route(AppState::Review);
    }

    pub fn confirmar_perfil(&mut self) {
        if !self.review_ready() {
            return;
        }
        self.replace_route(AppState::Welcome);
        self.message = "Profile confirmed. Welcome to Roominder!".to_owned();
    }

    pub fn editar_respuestas(&mut self) {
        self.back_route();
    }

    /// Deja a punto el estado transitorio de la pantalla a la que se
    /// entra hacia delante. Volver atrás no pasa por aquí: la pantalla
    /// anterior se conserva tal cual quedó.
    fn enter_screen(&mut self, next: AppState) {
        match next {
            AppState::Register => self.register = RegisterState::default(),
            AppState::Interests => self.interests = InterestsState::default(),
            AppState::Location => self.location = LocationState::default(),
            AppState::Profile => self.profile = ProfileState::default(),
            AppState::Lifestyle => self.lifestyle = LifestyleState::default(),
            // El parámetro de revisión lo fija quien navega hasta ella
            AppState::Review => {}
            AppState::Welcome | AppState::Safety | AppState::RoleSelect => {}
        }
        self.message.clear();
    }
}
