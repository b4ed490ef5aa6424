use crate::flight_models::{Airport, AirportsData};

/// Finds an airport by code, ignoring case. The first entry wins when codes repeat.
pub fn find_by_code<'a>(data: &'a AirportsData, code: &str) -> Option<&'a Airport> {
    data.airports
        .iter()
        .find(|airport| airport.code.eq_ignore_ascii_case(code))
}

/// Display name for a code, or the code uppercased when it is unknown.
///
/// A known airport with a blank display name yields the blank name.
pub fn display_name(data: &AirportsData, code: &str) -> String {
    match find_by_code(data, code) {
        Some(airport) => airport.display_name.clone(),
        None => code.to_uppercase(),
    }
}

/// All codes in source order
pub fn all_codes(data: &AirportsData) -> Vec<String> {
    data.airports
        .iter()
        .map(|airport| airport.code.clone())
        .collect()
}

/// Picker label, e.g. "AMS - Amsterdam (Schiphol)"
pub fn option_label(data: &AirportsData, code: &str) -> String {
    format!("{} - {}", code, display_name(data, code))
}
