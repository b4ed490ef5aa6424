use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::airports::{all_codes, option_label};
use crate::dates::{
    from_input_format, in_range, max_selectable_date, min_selectable_date, to_input_format,
};
use crate::flight_models::{AirportsData, SearchQuery};

/// The only origin present in the flight data
pub const DEFAULT_ORIGIN: &str = "AMS";

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Origin,
    Destination,
    DepartureDate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Origin => write!(f, "origin"),
            Field::Destination => write!(f, "destination"),
            Field::DepartureDate => write!(f, "departureDate"),
        }
    }
}

/// One message per failing field, rebuilt on every submit
pub type ValidationErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Validating,
    EditingWithErrors,
    Submitted,
}

/// User-entered search fields plus the outcome of the last submit
#[derive(Debug, Clone)]
pub struct SearchForm {
    origin: String,
    destination: String,
    departure_date: String,  // Raw `YYYY-MM-DD` input
    errors: ValidationErrors,
    state: FormState,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            destination: String::new(),
            departure_date: String::new(),
            errors: ValidationErrors::new(),
            state: FormState::Editing,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure_date(&self) -> &str {
        &self.departure_date
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
        self.state = FormState::Editing;
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
        self.state = FormState::Editing;
    }

    pub fn set_departure_date(&mut self, departure_date: impl Into<String>) {
        self.departure_date = departure_date.into();
        self.state = FormState::Editing;
    }

    /// `min` bound for the date picker
    pub fn min_date(&self) -> String {
        to_input_format(min_selectable_date())
    }

    /// `max` bound for the date picker
    pub fn max_date(&self) -> String {
        to_input_format(max_selectable_date())
    }

    /// "CODE - Name" entries shared by the origin and destination pickers
    pub fn airport_options(&self, airports: &AirportsData) -> Vec<String> {
        all_codes(airports)
            .iter()
            .map(|code| option_label(airports, code))
            .collect()
    }

    /// Validates every field and emits a query when all of them pass.
    ///
    /// Errors are recomputed from scratch, so a field fixed since the last
    /// attempt loses its message.
    pub fn submit(&mut self, airports: &AirportsData) -> Result<SearchQuery, ValidationErrors> {
        self.state = FormState::Validating;
        let known_codes = all_codes(airports);
        let (errors, departure_date) = self.validate(&known_codes);
        self.errors = errors;

        match departure_date {
            Some(departure_date) if self.errors.is_empty() => {
                self.state = FormState::Submitted;
                let query = SearchQuery {
                    origin: self.origin.to_uppercase(),
                    destination: self.destination.to_uppercase(),
                    departure_date,
                };
                debug!("Search form submitted: {:?}", query);
                Ok(query)
            }
            _ => {
                self.state = FormState::EditingWithErrors;
                debug!("Search form rejected: {:?}", self.errors);
                Err(self.errors.clone())
            }
        }
    }

    fn validate(&self, known_codes: &[String]) -> (ValidationErrors, Option<chrono::DateTime<chrono::Utc>>) {
        let mut errors = ValidationErrors::new();
        let is_known = |code: &str| known_codes.iter().any(|known| *known == code.to_uppercase());

        if self.origin.is_empty() {
            errors.insert(Field::Origin, "Please select an origin airport".to_string());
        } else if !is_known(&self.origin) {
            errors.insert(Field::Origin, "Please select a valid origin airport".to_string());
        }

        if self.destination.is_empty() {
            errors.insert(Field::Destination, "Please select a destination airport".to_string());
        } else if !is_known(&self.destination) {
            errors.insert(Field::Destination, "Please select a valid destination airport".to_string());
        } else if self.destination.to_uppercase() == self.origin.to_uppercase() {
            errors.insert(Field::Destination, "Destination must be different from origin".to_string());
        }

        let mut departure_date = None;
        if self.departure_date.is_empty() {
            errors.insert(Field::DepartureDate, "Please select a departure date".to_string());
        } else {
            match from_input_format(&self.departure_date) {
                None => {
                    errors.insert(Field::DepartureDate, "Please select a valid departure date".to_string());
                }
                Some(date) if !in_range(date) => {
                    errors.insert(
                        Field::DepartureDate,
                        "Selected date is outside available range (Nov 10-30, 2022)".to_string(),
                    );
                }
                Some(date) => departure_date = Some(date),
            }
        }

        (errors, departure_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_models::Airport;

    fn airports() -> AirportsData {
        let airport = |code: &str, name: &str| Airport {
            code: code.to_string(),
            display_name: name.to_string(),
            description: format!("{}, somewhere", name),
        };
        AirportsData::new(vec![
            airport("AMS", "Amsterdam (Schiphol)"),
            airport("CDG", "Paris Charles de Gaulle"),
            airport("LHR", "London Heathrow"),
            airport("FNC", "Funchal"),
        ])
    }

    #[test]
    fn test_defaults() {
        let form = SearchForm::new();
        assert_eq!(form.origin(), "AMS");
        assert_eq!(form.destination(), "");
        assert_eq!(form.departure_date(), "");
        assert_eq!(form.state(), FormState::Editing);
        assert!(form.errors().is_empty());
        assert_eq!(form.min_date(), "2022-11-10");
        assert_eq!(form.max_date(), "2022-11-30");
    }

    #[test]
    fn test_airport_options() {
        let options = SearchForm::new().airport_options(&airports());
        assert_eq!(options[0], "AMS - Amsterdam (Schiphol)");
        assert_eq!(options[2], "LHR - London Heathrow");
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn test_empty_submit_collects_every_error() {
        let mut form = SearchForm::new();
        form.set_origin("");
        let errors = form.submit(&airports()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&Field::Origin], "Please select an origin airport");
        assert_eq!(errors[&Field::Destination], "Please select a destination airport");
        assert_eq!(errors[&Field::DepartureDate], "Please select a departure date");
        assert_eq!(form.state(), FormState::EditingWithErrors);
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        let mut form = SearchForm::new();
        form.set_origin("XXX");
        form.set_destination("YYY");
        form.set_departure_date("2022-11-15");
        let errors = form.submit(&airports()).unwrap_err();
        assert_eq!(errors[&Field::Origin], "Please select a valid origin airport");
        assert_eq!(errors[&Field::Destination], "Please select a valid destination airport");
        assert!(!errors.contains_key(&Field::DepartureDate));
    }

    #[test]
    fn test_destination_equal_to_origin() {
        let mut form = SearchForm::new();
        form.set_destination("ams");
        form.set_departure_date("2022-11-15");
        let errors = form.submit(&airports()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Destination], "Destination must be different from origin");
    }

    #[test]
    fn test_date_outside_range() {
        let mut form = SearchForm::new();
        form.set_destination("FNC");
        form.set_departure_date("2022-12-01");
        form.submit(&airports()).unwrap_err();
        assert!(form
            .error(Field::DepartureDate)
            .unwrap()
            .contains("outside available range"));
    }

    #[test]
    fn test_unparsable_date() {
        let mut form = SearchForm::new();
        form.set_destination("FNC");
        form.set_departure_date("15/11/2022");
        form.submit(&airports()).unwrap_err();
        assert_eq!(
            form.error(Field::DepartureDate),
            Some("Please select a valid departure date")
        );
    }

    #[test]
    fn test_valid_submit_emits_uppercased_query() {
        let mut form = SearchForm::new();
        form.set_origin("ams");
        form.set_destination("fnc");
        form.set_departure_date("2022-11-15");
        let query = form.submit(&airports()).unwrap();
        assert_eq!(query.origin, "AMS");
        assert_eq!(query.destination, "FNC");
        assert_eq!(query.departure_date, from_input_format("2022-11-15").unwrap());
        assert_eq!(form.state(), FormState::Submitted);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_corrected_fields_lose_their_errors() {
        let mut form = SearchForm::new();
        form.set_departure_date("2022-11-15");
        form.submit(&airports()).unwrap_err();
        assert!(form.error(Field::Destination).is_some());

        form.set_destination("LHR");
        form.set_departure_date("2022-12-05");
        form.submit(&airports()).unwrap_err();
        assert!(form.error(Field::Destination).is_none());
        assert!(form.error(Field::DepartureDate).is_some());

        form.set_departure_date("2022-11-30");
        assert!(form.submit(&airports()).is_ok());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_change_after_submit_returns_to_editing() {
        let mut form = SearchForm::new();
        form.set_destination("CDG");
        form.set_departure_date("2022-11-20");
        form.submit(&airports()).unwrap();
        form.set_destination("LHR");
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn test_non_default_origin_is_accepted() {
        let mut form = SearchForm::new();
        form.set_origin("CDG");
        form.set_destination("LHR");
        form.set_departure_date("2022-11-20");
        assert_eq!(form.submit(&airports()).unwrap().origin, "CDG");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Origin.to_string(), "origin");
        assert_eq!(Field::Destination.to_string(), "destination");
        assert_eq!(Field::DepartureDate.to_string(), "departureDate");
    }
}
