use std::fs;
use std::thread;

use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use crate::config::{DataConfig, SearchConfig};
use crate::error::{LoadError, Resource, SearchError};
use crate::flight_models::{AirportsData, FlightOffer, FlightsData, SearchQuery};
use crate::results::render_results;
use crate::search::{search, sort_by_departure_time};
use crate::search_form::{Field, SearchForm, ValidationErrors};

/// Where the page gets its two datasets from
pub trait DataSource {
    /// Returns the raw JSON document for `resource`, or why it could not be fetched
    fn fetch(&self, resource: Resource) -> Result<String, String>;
}

/// Reads the datasets from the paths in `[data]`
#[derive(Debug, Clone)]
pub struct FileDataSource {
    config: DataConfig,
}

impl FileDataSource {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }
}

impl DataSource for FileDataSource {
    fn fetch(&self, resource: Resource) -> Result<String, String> {
        let path = match resource {
            Resource::Airports => &self.config.airports_path,
            Resource::Flights => &self.config.flights_path,
        };
        fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))
    }
}

/// Page lifecycle
#[derive(Debug, Clone)]
pub enum PageState {
    Loading,
    Failed(String),  // First failing load, shown with a retry action
    Ready {
        airports: AirportsData,
        flights: FlightsData,
    },
}

/// PageController loads the datasets and wires the search form to the search engine
pub struct PageController<S: DataSource> {
    source: S,
    search_config: SearchConfig,
    state: PageState,
    form: SearchForm,
    results: Vec<FlightOffer>,
    pending: Option<SearchQuery>,  // Search started but not yet finished
    has_searched: bool,
}

impl<S: DataSource> PageController<S> {
    /// Creates a controller in the loading state. Call `load` to fetch the data.
    pub fn new(source: S, search_config: SearchConfig) -> Self {
        Self {
            source,
            search_config,
            state: PageState::Loading,
            form: SearchForm::new(),
            results: Vec::new(),
            pending: None,
            has_searched: false,
        }
    }

    /// Fetches airports, then flights. The first failure stops the load and
    /// becomes the page's error message.
    pub fn load(&mut self) -> Result<(), LoadError> {
        self.state = PageState::Loading;
        match self.load_datasets() {
            Ok((airports, flights)) => {
                info!(
                    "Loaded {} airports and {} flight offers",
                    airports.airports.len(),
                    flights.offers().len()
                );
                if flights.result_set.count as usize != flights.offers().len() {
                    warn!(
                        "Flights resultSet.count is {} but {} offers are listed",
                        flights.result_set.count,
                        flights.offers().len()
                    );
                }
                self.state = PageState::Ready { airports, flights };
                Ok(())
            }
            Err(e) => {
                error!("Failed to load {} data: {:?}", e.resource(), e);
                self.state = PageState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn load_datasets(&self) -> Result<(AirportsData, FlightsData), LoadError> {
        let airports = self.fetch_document::<AirportsData>(Resource::Airports)?;
        let flights = self.fetch_document::<FlightsData>(Resource::Flights)?;
        Ok((airports, flights))
    }

    /// Fetches and decodes one document. A `null` document counts as empty.
    fn fetch_document<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, LoadError> {
        let text = self
            .source
            .fetch(resource)
            .map_err(|reason| LoadError::Fetch { resource, reason })?;
        let decoded: Option<T> = serde_json::from_str(&text)
            .map_err(|source| LoadError::Decode { resource, source })?;
        decoded.ok_or(LoadError::EmptyPayload { resource })
    }

    /// Full reload: forgets the form, the results and the datasets, then loads again
    pub fn reload(&mut self) -> Result<(), LoadError> {
        self.form = SearchForm::new();
        self.results.clear();
        self.pending = None;
        self.has_searched = false;
        self.load()
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, PageState::Ready { .. })
    }

    pub fn airports(&self) -> Option<&AirportsData> {
        match &self.state {
            PageState::Ready { airports, .. } => Some(airports),
            _ => None,
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    pub fn results(&self) -> &[FlightOffer] {
        &self.results
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Submits the form. A valid query runs the search; invalid input
    /// leaves the results untouched.
    pub fn submit(&mut self) -> Result<&[FlightOffer], ValidationErrors> {
        self.begin_submit()?;
        Ok(self.finish_search())
    }

    /// Validates the form and, when it passes, starts a search. The page
    /// renders the searching view until `finish_search` runs.
    pub fn begin_submit(&mut self) -> Result<(), ValidationErrors> {
        let query = match &self.state {
            PageState::Ready { airports, .. } => self.form.submit(airports)?,
            _ => self.form.submit(&AirportsData::default())?,
        };
        self.begin_search(query);
        Ok(())
    }

    /// Runs a validated query to completion
    pub fn handle_search(&mut self, query: &SearchQuery) -> &[FlightOffer] {
        self.begin_search(query.clone());
        self.finish_search()
    }

    /// Marks `query` as in flight. Does nothing if the datasets are not loaded.
    pub fn begin_search(&mut self, query: SearchQuery) -> bool {
        if !self.is_ready() {
            error!("{}", SearchError::DataNotLoaded);
            return false;
        }
        self.has_searched = true;
        self.pending = Some(query);
        true
    }

    /// Completes the in-flight search after the configured delay.
    ///
    /// Origins other than the supported one produce no results, and search
    /// failures are logged and shown as no results.
    pub fn finish_search(&mut self) -> &[FlightOffer] {
        let query = match self.pending.take() {
            Some(query) => query,
            None => return &self.results,
        };

        let delay = self.search_config.result_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        self.results = if !query.origin.eq_ignore_ascii_case(&self.search_config.supported_origin) {
            info!(
                "No data for origin {}, only {} is supported",
                query.origin, self.search_config.supported_origin
            );
            Vec::new()
        } else {
            match self.run_search(&query) {
                Ok(results) => results,
                Err(e) => {
                    error!("Error during flight search: {}", e);
                    Vec::new()
                }
            }
        };

        info!(
            "Search {} -> {} on {} found {} flights",
            query.origin,
            query.destination,
            query.departure_date.date_naive(),
            self.results.len()
        );
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    fn run_search(&self, query: &SearchQuery) -> Result<Vec<FlightOffer>, SearchError> {
        let flights = match &self.state {
            PageState::Ready { flights, .. } => flights,
            _ => return Err(SearchError::DataNotLoaded),
        };
        let matches = search(flights, &query.destination, query.departure_date);
        Ok(sort_by_departure_time(&matches))
    }

    /// Renders the whole page for the current state
    pub fn render(&self) -> String {
        match &self.state {
            PageState::Loading => {
                "Loading flight search...\nPlease wait while we prepare your flight search experience.\n"
                    .to_string()
            }
            PageState::Failed(message) => {
                format!("Unable to Load Flight Data\n{}\n[Retry]\n", message)
            }
            PageState::Ready { airports, .. } => {
                let mut out = String::new();
                out.push_str("Flight Search\n");
                out.push_str("Find your perfect flight with ease\n\n");
                out.push_str(&self.render_form(airports));
                if self.has_searched {
                    out.push('\n');
                    out.push_str(&render_results(&self.results, airports, self.is_searching()));
                }
                out.push_str(
                    "\nFlight data available for Amsterdam (AMS) departures from November 10-30, 2022.\n",
                );
                out
            }
        }
    }

    fn render_form(&self, airports: &AirportsData) -> String {
        let form = &self.form;
        let mut out = String::from("Find Your Flight\n");
        let field_line = |label: &str, value: &str, field: Field| {
            let mut line = format!("  {}: {}\n", label, if value.is_empty() { "-" } else { value });
            if let Some(message) = form.error(field) {
                line.push_str(&format!("    ! {}\n", message));
            }
            line
        };
        out.push_str(&field_line("Origin Airport", form.origin(), Field::Origin));
        out.push_str(&field_line("Destination Airport", form.destination(), Field::Destination));
        out.push_str(&field_line("Departure Date", form.departure_date(), Field::DepartureDate));
        out.push_str(&format!(
            "  Dates between {} and {}, {} airports available\n",
            form.min_date(),
            form.max_date(),
            airports.airports.len()
        ));
        out
    }
}
