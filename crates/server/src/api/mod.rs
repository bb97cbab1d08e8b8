mod fare;
mod stops;

pub use fare::*;
pub use stops::*;

use axum::http::StatusCode;
use std::collections::HashMap;
use yatri::network::Language;

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, StatusCode> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)
}

fn language(params: &HashMap<String, String>) -> Language {
    params
        .get("lang")
        .map(|code| Language::from_code(code))
        .unwrap_or_default()
}
