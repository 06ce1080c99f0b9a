use super::*;

impl OnboardingApp {
    /// Marca o desmarca una tarjeta de "What are you looking for?".
    pub fn toggle_interest(&mut self, interest: Interest) {
        match interest {
            Interest::Housing => self.interests.housing = !self.interests.housing,
            Interest::Roommate => self.interests.roommate = !self.interests.roommate,
        }
    }

    /// Guarda la opción pulsada en el cuestionario. Permisivo a propósito:
    /// el modelo acepta cualquier par clave/opción y la validación llega
    /// después, al resolver contra el catálogo.
    pub fn select_lifestyle_option(&mut self, question_key: &str, option_id: &str) {
        self.lifestyle.answers.set_answer(question_key, option_id);
    }

    /// Recalcula el radio de búsqueda a partir de un arrastre sobre la
    /// pista del slider. Con una pista degenerada el radio no cambia.
    pub fn set_radius_from_pointer(&mut self, pointer_x: f32, track_width: f32) {
        self.location.radius = position_to_value(
            pointer_x,
            track_width,
            RADIUS_MIN,
            RADIUS_MAX,
            self.location.radius,
        );
    }

    /// Lanza la resolución de ubicación aproximada en un hilo aparte y
    /// deja el receptor armado para `poll_location_result`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn request_device_location(&mut self) {
        if self.location.status == LocationStatus::Loading {
            return;
        }
        self.location.error.clear();
        self.location.status = LocationStatus::Loading;

        let (tx, rx) = std::sync::mpsc::channel::<Result<String, String>>();
        self.location.rx = Some(rx);

        std::thread::spawn(move || {
            let result = match crate::geo::fetch_approximate_location() {
                Ok(label) => Ok(label),
                Err(e) => {
                    eprintln!("Error al resolver la ubicación: {e}");
                    Err("Unable to fetch location".to_owned())
                }
            };
            let _ = tx.send(result);
        });
    }

    /// En el navegador no hay hilo que hacer: el servicio de ubicación
    /// queda fuera de esta build y se avisa en el acto.
    #[cfg(target_arch = "wasm32")]
    pub fn request_device_location(&mut self) {
        self.location.status = LocationStatus::Error;
        self.location.error = "Location lookup is not available in the web build".to_owned();
    }

    /// Recoge el resultado del hilo de ubicación si ya terminó.
    pub fn poll_location_result(&mut self) {
        let maybe_result = self
            .location
            .rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(result) = maybe_result {
            match result {
                Ok(label) => {
                    self.location.query = label;
                    self.location.status = LocationStatus::Success;
                }
                Err(message) => {
                    self.location.status = LocationStatus::Error;
                    self.location.error = message;
                }
            }
            self.location.rx = None;
        }
    }
}
