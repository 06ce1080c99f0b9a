// src/ui/helpers.rs
use crate::slider::{RADIUS_MAX, RADIUS_MIN, value_to_percent};
use crate::ui::layout::ACCENT;
use crate::view_models::InterestCard;
use egui::{Button, Color32, CornerRadius, RichText, Sense, Stroke, TextEdit, Ui, Vec2, vec2};

/// Glifo para cada nombre simbólico de icono del catálogo.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "sunrise" => "🌅",
        "moon" => "🌙",
        "check-circle" => "✅",
        "wind" => "🌬",
        "music" => "🎵",
        "coffee" => "☕",
        "users" => "👥",
        "shield" => "🛡",
        "home" => "🏠",
        "briefcase" => "💼",
        "key" => "🔑",
        "map-pin" => "📍",
        "navigation" => "🧭",
        "search" => "🔍",
        "user" => "👤",
        "gift" => "🎁",
        "mail" => "✉",
        "lock" => "🔒",
        "camera" => "📷",
        "help-circle" => "❓",
        _ => "❓",
    }
}

/// Botón-tarjeta de una opción del cuestionario. Devuelve true al pulsarlo.
pub fn option_card(ui: &mut Ui, icon: &str, label: &str, selected: bool, width: f32) -> bool {
    let text = format!("{}  {}", icon_glyph(icon), label);
    let mut button = Button::new(if selected {
        RichText::new(text).color(ACCENT).strong()
    } else {
        RichText::new(text)
    })
    .min_size(Vec2::new(width, 48.0));
    if selected {
        button = button.stroke(Stroke::new(2.0, ACCENT));
    }
    ui.add(button).clicked()
}

/// Tarjeta de interés con su marca de selección. Devuelve true al pulsarla.
pub fn interest_card_button(ui: &mut Ui, card: &InterestCard, active: bool, width: f32) -> bool {
    let mark = if active { "✅" } else { "○" };
    let text = format!(
        "{}  {}  {}\n{}",
        icon_glyph(card.icon),
        card.title,
        mark,
        card.subtitle
    );
    let mut button = Button::new(text).min_size(Vec2::new(width, 58.0));
    if active {
        button = button.stroke(Stroke::new(2.0, ACCENT));
    }
    ui.add(button).clicked()
}

/// Campo de texto con icono delante, al estilo de los formularios.
pub fn labeled_input(
    ui: &mut Ui,
    icon: &str,
    hint: &str,
    value: &mut String,
    password: bool,
    width: f32,
) {
    ui.horizontal(|ui| {
        ui.label(icon_glyph(icon));
        ui.add(
            TextEdit::singleline(value)
                .hint_text(hint)
                .password(password)
                .desired_width((width - 28.0).max(60.0)),
        );
    });
}

/// Pista del slider de radio dibujada a mano. El relleno sale de
/// `value_to_percent`; cualquier click o arrastre vuelve como la
/// posición del puntero relativa al borde izquierdo de la pista.
pub fn radius_slider(ui: &mut Ui, value: u32, width: f32) -> Option<f32> {
    let (rect, response) = ui.allocate_exact_size(vec2(width, 24.0), Sense::click_and_drag());

    let track = egui::Rect::from_min_size(
        egui::pos2(rect.left(), rect.center().y - 5.0),
        vec2(rect.width(), 10.0),
    );
    let percent = value_to_percent(value as f32, RADIUS_MIN, RADIUS_MAX);
    let fill_w = track.width() * percent / 100.0;

    let painter = ui.painter();
    painter.rect_filled(track, CornerRadius::same(5), ui.visuals().faint_bg_color);
    if fill_w > 0.0 {
        painter.rect_filled(
            egui::Rect::from_min_size(track.min, vec2(fill_w, track.height())),
            CornerRadius::same(5),
            ACCENT,
        );
    }

    // Tirador
    let handle = egui::pos2(track.left() + fill_w, track.center().y);
    painter.circle_filled(handle, 11.0, ACCENT);
    painter.circle_filled(handle, 8.0, Color32::WHITE);

    if response.dragged() || response.clicked() {
        response
            .interact_pointer_pos()
            .map(|pos| pos.x - track.left())
    } else {
        None
    }
}
