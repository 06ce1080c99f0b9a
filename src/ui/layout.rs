use crate::OnboardingApp;
use egui::{CentralPanel, Color32, Context, Frame, ProgressBar, RichText, Ui, Visuals};

/// Violeta de marca de los botones de acción.
pub const ACCENT: Color32 = Color32::from_rgb(124, 58, 237);

pub fn top_panel(app: &mut OnboardingApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Start over").clicked() {
                app.confirm_restart = true;
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                // Ajusta anchura
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                // Ejecuta contenido
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Cabecera compartida de los pasos del asistente: botón de volver,
/// barra de progreso y la etiqueta "Step N of 5".
pub fn step_header(ui: &mut Ui, app: &mut OnboardingApp) {
    let step = match app.current_step() {
        Some(s) => s,
        None => return,
    };

    if ui.button("⬅ Back").clicked() {
        app.back_route();
    }
    ui.add_space(8.0);
    ui.add(
        ProgressBar::new(step.fraction())
            .desired_height(8.0)
            .fill(ACCENT),
    );
    ui.add_space(6.0);
    ui.label(RichText::new(step.label()).color(ACCENT).strong());
    ui.add_space(10.0);
}
