//! Flight search over two static datasets: airports, and flight offers
//! departing Amsterdam between 2022-11-10 and 2022-11-30.

pub mod airports;
pub mod config;
pub mod controller;
pub mod dates;
pub mod error;
pub mod flight_models;
pub mod logging;
pub mod results;
pub mod search;
pub mod search_form;

pub use config::Config;
pub use controller::{DataSource, FileDataSource, PageController, PageState};
pub use error::{ConfigError, LoadError, Resource, SearchError};
pub use flight_models::{Airport, AirportsData, FlightOffer, FlightsData, SearchQuery};
pub use search_form::{Field, FormState, SearchForm, ValidationErrors};
