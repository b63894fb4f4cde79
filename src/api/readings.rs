//! Reading endpoints: thin wrappers that call the facade and format the value.

use axum::{extract::State, response::IntoResponse, Json};

use super::response::{ResponseFormat, ValueReply};
use crate::service::AppState;

fn reply(st: &AppState, value: impl Into<String>) -> ValueReply {
    ValueReply::new(st.cfg.server.format, value)
}

pub async fn indoor_temp(State(st): State<AppState>) -> ValueReply {
    let value = format!("{:.1}", st.indoor_temp_c());
    reply(&st, value)
}

pub async fn outdoor_temp(State(st): State<AppState>) -> ValueReply {
    let weather = st.outdoor().await;
    reply(&st, weather.temperature_c.to_string())
}

pub async fn humidity(State(st): State<AppState>) -> ValueReply {
    let weather = st.outdoor().await;
    reply(&st, weather.humidity_percent.to_string())
}

pub async fn water(State(st): State<AppState>) -> ValueReply {
    let value = format!("{:.2}", st.water_today());
    reply(&st, value)
}

pub async fn energy(State(st): State<AppState>) -> ValueReply {
    let value = format!("{}", st.energy_today().round() as i64);
    reply(&st, value)
}

pub async fn datetime(State(st): State<AppState>) -> ValueReply {
    let value = st.local_datetime();
    reply(&st, value)
}

/// `GET /` - discovery payload for dashboard clients.
pub async fn index(State(st): State<AppState>) -> impl IntoResponse {
    let format = match st.cfg.server.format {
        ResponseFormat::Json => "Each endpoint returns JSON: {\"value\": \"<number>\"}",
        ResponseFormat::Plain => "Each endpoint returns the value as plain text",
    };
    Json(serde_json::json!({
        "available_endpoints": [
            "/temp",
            "/outdoor",
            "/humidity",
            "/water",
            "/energy",
            "/datetime"
        ],
        "format": format,
    }))
}
