use crate::error::{Error, Result};

/// Beijing district codes from the geocoding service's administrative table.
const DISTRICTS: &[(&str, &str)] = &[
    ("dongcheng", "110101"),
    ("xicheng", "110102"),
    ("chaoyang", "110105"),
    ("fengtai", "110106"),
    ("haidian", "110108"),
    ("changping", "110114"),
];

/// Resolve user input to a numeric city code.
///
/// An all-digit string is passed through untouched; a known district name
/// (case-insensitive) maps to its code; anything else is rejected.
pub fn resolve_city_code(input: &str) -> Result<String> {
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return Ok(input.to_string());
    }

    let lower = input.to_lowercase();
    DISTRICTS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, code)| (*code).to_string())
        .ok_or_else(|| {
            Error::Config(format!("unknown district '{input}'; pass a numeric city code"))
        })
}
