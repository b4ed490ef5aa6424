use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An airport as listed in the airports document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    #[serde(rename = "ItemName")]
    pub code: String,
    #[serde(rename = "AirportName")]
    pub display_name: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// The airports document: `{ "Airports": [ ... ] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirportsData {
    #[serde(rename = "Airports")]
    pub airports: Vec<Airport>,
}

impl AirportsData {
    pub fn new(airports: Vec<Airport>) -> Self {
        Self { airports }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightAirport {
    pub location_code: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingAirline {
    pub company_short_name: String,
}

/// Schedule half of an offer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundFlight {
    pub id: String,
    pub departure_date_time: String,   // ISO 8601, usually without an offset
    pub arrival_date_time: String,
    pub marketing_airline: MarketingAirline,
    pub flight_number: u32,
    pub departure_airport: FlightAirport,
    pub arrival_airport: FlightAirport,
}

/// Price half of an offer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfoSum {
    pub total_price_all_passengers: f64,
    pub total_price_one_passenger: f64,
    pub base_fare: f64,
    pub tax_surcharge: f64,
    pub currency_code: String,
    pub product_class: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deeplink {
    pub href: String,
}

/// One bookable flight: schedule, price and booking link
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub outbound_flight: OutboundFlight,
    pub pricing_info_sum: PricingInfoSum,
    pub deeplink: Deeplink,
}

impl FlightOffer {
    pub fn id(&self) -> &str {
        &self.outbound_flight.id
    }

    pub fn origin_code(&self) -> &str {
        &self.outbound_flight.departure_airport.location_code
    }

    pub fn destination_code(&self) -> &str {
        &self.outbound_flight.arrival_airport.location_code
    }

    pub fn departure_date_time(&self) -> &str {
        &self.outbound_flight.departure_date_time
    }

    pub fn arrival_date_time(&self) -> &str {
        &self.outbound_flight.arrival_date_time
    }

    /// Departure as a UTC instant, `None` if the timestamp does not parse
    pub fn departure_instant(&self) -> Option<DateTime<Utc>> {
        crate::dates::parse_flight_instant(&self.outbound_flight.departure_date_time)
    }

    pub fn booking_link(&self) -> &str {
        &self.deeplink.href
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultSet {
    pub count: u32,
}

/// The flights document: `{ "resultSet": { "count" }, "flightOffer": [ ... ] }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightsData {
    pub result_set: ResultSet,
    pub flight_offer: Vec<FlightOffer>,
}

impl FlightsData {
    pub fn new(flight_offer: Vec<FlightOffer>) -> Self {
        Self {
            result_set: ResultSet { count: flight_offer.len() as u32 },
            flight_offer,
        }
    }

    pub fn offers(&self) -> &[FlightOffer] {
        &self.flight_offer
    }
}

/// A validated search, produced only by a successful form submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: String,            // Uppercased origin code
    pub destination: String,       // Uppercased destination code, differs from origin
    pub departure_date: DateTime<Utc>, // UTC midnight inside the availability window
}
