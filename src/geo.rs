use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;

/// Resuelve una ubicación aproximada a partir de la IP pública.
/// Devuelve "lat, lon" con tres decimales, listo para el campo de búsqueda.
pub fn fetch_approximate_location() -> Result<String, Box<dyn std::error::Error>> {
    let client = Client::builder().timeout(Duration::from_secs(6)).build()?;

    let body = client
        .get("https://ipapi.co/json/")
        .header(USER_AGENT, "Roominder/0.1")
        .send()?
        .text()?;

    let value: serde_json::Value = serde_json::from_str(&body)?;
    let lat = value
        .get("latitude")
        .and_then(|v| v.as_f64())
        .ok_or("Respuesta sin latitud")?;
    let lon = value
        .get("longitude")
        .and_then(|v| v.as_f64())
        .ok_or("Respuesta sin longitud")?;

    Ok(format!("{lat:.3}, {lon:.3}"))
}
