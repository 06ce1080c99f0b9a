#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use eframe::egui;
    use roominder::OnboardingApp;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([430.0, 780.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Roominder",
        options,
        Box::new(|_cc| Ok(Box::new(OnboardingApp::new()))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;
    use roominder::OnboardingApp;

    // Redirige `log` a console.log del navegador
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");

        let canvas = document
            .get_element_by_id("roominder_canvas")
            .expect("No existe el elemento roominder_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("roominder_canvas no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(OnboardingApp::new()))),
            )
            .await
            .expect("No se pudo arrancar eframe");
    });
}
