// src/slider.rs
//
// Conversión pura entre la posición del puntero sobre la pista del
// slider y el radio de búsqueda. Sin estado interno: el valor es
// función de (posición, ancho de pista).

/// Radio mínimo en km.
pub const RADIUS_MIN: u32 = 1;
/// Radio máximo en km.
pub const RADIUS_MAX: u32 = 50;
/// Radio inicial al entrar en la pantalla de ubicación.
pub const RADIUS_DEFAULT: u32 = 10;

/// Traduce una posición de puntero a un valor entero en `[min, max]`.
///
/// La razón `pointer_x / track_width` se recorta a `[0, 1]` y se escala
/// linealmente; el resultado se redondea al entero más cercano. Con una
/// pista degenerada (`track_width <= 0`) o una razón no finita devuelve
/// `current` sin tocar: el layout aún no está medido y no hay nada que
/// calcular.
pub fn position_to_value(pointer_x: f32, track_width: f32, min: u32, max: u32, current: u32) -> u32 {
    if track_width <= 0.0 {
        return current;
    }
    let ratio = pointer_x / track_width;
    if !ratio.is_finite() {
        return current;
    }
    let ratio = ratio.clamp(0.0, 1.0);
    let value = min as f32 + ratio * (max - min) as f32;
    value.round() as u32
}

/// Porcentaje de pista rellena para un valor dado. Acepta valores
/// fraccionarios y recorta fuera de rango; nunca divide por cero.
pub fn value_to_percent(value: f32, min: u32, max: u32) -> f32 {
    let (lo, hi) = (min as f32, max as f32);
    let span = hi - lo;
    if span <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value.clamp(lo, hi) - lo) / span * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_track_keeps_current_value() {
        assert_eq!(position_to_value(0.0, 0.0, RADIUS_MIN, RADIUS_MAX, 10), 10);
        assert_eq!(position_to_value(75.0, 0.0, RADIUS_MIN, RADIUS_MAX, 23), 23);
        assert_eq!(position_to_value(50.0, -4.0, RADIUS_MIN, RADIUS_MAX, 7), 7);
        assert_eq!(
            position_to_value(f32::NAN, 100.0, RADIUS_MIN, RADIUS_MAX, 31),
            31
        );
    }

    #[test]
    fn endpoints_and_midpoint_on_a_hundred_pixel_track() {
        assert_eq!(position_to_value(0.0, 100.0, RADIUS_MIN, RADIUS_MAX, 10), 1);
        assert_eq!(
            position_to_value(100.0, 100.0, RADIUS_MIN, RADIUS_MAX, 10),
            50
        );
        // 1 + 0.5 * 49 = 25.5 y se redondea hacia arriba
        assert_eq!(
            position_to_value(50.0, 100.0, RADIUS_MIN, RADIUS_MAX, 10),
            26
        );
    }

    #[test]
    fn pointer_outside_the_track_clamps_to_the_ends() {
        assert_eq!(
            position_to_value(-80.0, 100.0, RADIUS_MIN, RADIUS_MAX, 10),
            RADIUS_MIN
        );
        assert_eq!(
            position_to_value(900.0, 100.0, RADIUS_MIN, RADIUS_MAX, 10),
            RADIUS_MAX
        );
    }

    #[test]
    fn result_stays_inside_range_for_every_pixel() {
        for x in 0..=400 {
            let v = position_to_value(x as f32, 400.0, RADIUS_MIN, RADIUS_MAX, 10);
            assert!((RADIUS_MIN..=RADIUS_MAX).contains(&v), "x={x} -> {v}");
        }
    }

    #[test]
    fn percent_endpoints_and_midpoint() {
        assert_eq!(value_to_percent(1.0, RADIUS_MIN, RADIUS_MAX), 0.0);
        assert_eq!(value_to_percent(50.0, RADIUS_MIN, RADIUS_MAX), 100.0);
        assert!((value_to_percent(25.5, RADIUS_MIN, RADIUS_MAX) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn percent_clamps_out_of_range_values() {
        assert_eq!(value_to_percent(-3.0, RADIUS_MIN, RADIUS_MAX), 0.0);
        assert_eq!(value_to_percent(80.0, RADIUS_MIN, RADIUS_MAX), 100.0);
        assert_eq!(value_to_percent(f32::NAN, RADIUS_MIN, RADIUS_MAX), 0.0);
    }

    #[test]
    fn position_and_percent_round_trip_within_one_step() {
        // Un paso de valor equivale a 100/49 puntos de porcentaje; el
        // redondeo puede desviar como mucho medio paso.
        let step = 100.0 / 49.0;
        for x in 0..=100u32 {
            let v = position_to_value(x as f32, 100.0, RADIUS_MIN, RADIUS_MAX, 10);
            let p = value_to_percent(v as f32, RADIUS_MIN, RADIUS_MAX);
            assert!(
                (p - x as f32).abs() <= step,
                "x={x} -> v={v} -> p={p}"
            );
        }
    }
}
