use std::fmt::Write;

use crate::airports::display_name;
use crate::dates::{format_date, format_time};
use crate::flight_models::{AirportsData, FlightOffer};

const SEPARATOR: &str = "----------------------------------";

/// What the results section is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Loading,
    Empty,
    Populated,
}

impl ResultsView {
    pub fn of(offers: &[FlightOffer], is_loading: bool) -> Self {
        if is_loading {
            ResultsView::Loading
        } else if offers.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Populated
        }
    }
}

/// Renders the results section as text
pub fn render_results(offers: &[FlightOffer], airports: &AirportsData, is_loading: bool) -> String {
    let mut out = String::new();
    match ResultsView::of(offers, is_loading) {
        ResultsView::Loading => {
            out.push_str("Searching for flights...\n");
        }
        ResultsView::Empty => {
            out.push_str("No flights found\n");
            out.push_str(
                "We couldn't find any flights matching your search criteria. \
                 Please try adjusting your destination or departure date.\n",
            );
            out.push_str("Available flights are limited to:\n");
            out.push_str("  - Origin: Amsterdam (AMS)\n");
            out.push_str("  - Dates: November 10-30, 2022\n");
        }
        ResultsView::Populated => {
            let plural = if offers.len() == 1 { "" } else { "s" };
            let _ = writeln!(out, "Available Flights");
            let _ = writeln!(out, "{} flight{} found", offers.len(), plural);
            for offer in offers {
                out.push_str(SEPARATOR);
                out.push('\n');
                out.push_str(&render_card(offer, airports));
            }
        }
    }
    out
}

/// `CODE (Name)`, or just `CODE` when no better name is known
fn airport_label(airports: &AirportsData, code: &str) -> String {
    let name = display_name(airports, code);
    if name != code {
        format!("{} ({})", code, name)
    } else {
        code.to_string()
    }
}

/// Formats an amount as euros with two decimals, e.g. "€58.70"
pub fn format_price(amount: f64) -> String {
    format!("€{:.2}", amount)
}

/// One flight card
pub fn render_card(offer: &FlightOffer, airports: &AirportsData) -> String {
    let flight = &offer.outbound_flight;
    let pricing = &offer.pricing_info_sum;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} → {}",
        airport_label(airports, offer.origin_code()),
        airport_label(airports, offer.destination_code())
    );
    let _ = writeln!(out, "{}", format_date(offer.departure_date_time()));
    let _ = writeln!(
        out,
        "{}  {}",
        format_price(pricing.total_price_all_passengers),
        pricing.product_class
    );
    let _ = writeln!(
        out,
        "{} Departure  |  {} {}  |  {} Arrival",
        format_time(offer.departure_date_time()),
        flight.marketing_airline.company_short_name,
        flight.flight_number,
        format_time(offer.arrival_date_time())
    );
    let _ = writeln!(
        out,
        "Base fare: {}  Taxes & fees: {}",
        format_price(pricing.base_fare),
        format_price(pricing.tax_surcharge)
    );
    let _ = writeln!(out, "Book Flight: {}", offer.booking_link());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_models::{
        Airport, Deeplink, FlightAirport, MarketingAirline, OutboundFlight, PricingInfoSum,
    };

    fn airports() -> AirportsData {
        let airport = |code: &str, name: &str| Airport {
            code: code.to_string(),
            display_name: name.to_string(),
            description: String::new(),
        };
        AirportsData::new(vec![
            airport("AMS", "Amsterdam (Schiphol)"),
            airport("FNC", "Funchal"),
            airport("CDG", "Paris Charles de Gaulle"),
        ])
    }

    fn offer(id: &str, destination: &str, departure: &str, arrival: &str, number: u32, total: f64) -> FlightOffer {
        FlightOffer {
            outbound_flight: OutboundFlight {
                id: id.to_string(),
                departure_date_time: departure.to_string(),
                arrival_date_time: arrival.to_string(),
                marketing_airline: MarketingAirline { company_short_name: "HV".to_string() },
                flight_number: number,
                departure_airport: FlightAirport { location_code: "AMS".to_string() },
                arrival_airport: FlightAirport { location_code: destination.to_string() },
            },
            pricing_info_sum: PricingInfoSum {
                total_price_all_passengers: total,
                total_price_one_passenger: total,
                base_fare: 29.51,
                tax_surcharge: 29.19,
                currency_code: "EUR".to_string(),
                product_class: "Basic".to_string(),
            },
            deeplink: Deeplink { href: format!("https://example.com/{}", id) },
        }
    }

    fn two_offers() -> Vec<FlightOffer> {
        vec![
            offer("a", "FNC", "2022-11-10T06:25:00", "2022-11-10T09:35:00", 6629, 58.7),
            offer("b", "CDG", "2022-11-10T14:30:00", "2022-11-10T16:45:00", 1234, 89.5),
        ]
    }

    #[test]
    fn test_loading_hides_results() {
        let text = render_results(&two_offers(), &airports(), true);
        assert!(text.contains("Searching for flights..."));
        assert!(!text.contains("Available Flights"));
        assert!(!text.contains("No flights found"));
    }

    #[test]
    fn test_empty_state_with_suggestions() {
        let text = render_results(&[], &airports(), false);
        assert!(text.contains("No flights found"));
        assert!(text.contains("Available flights are limited to:"));
        assert!(text.contains("Origin: Amsterdam (AMS)"));
        assert!(text.contains("Dates: November 10-30, 2022"));
    }

    #[test]
    fn test_populated_counts() {
        let offers = two_offers();
        let text = render_results(&offers, &airports(), false);
        assert!(text.contains("Available Flights"));
        assert!(text.contains("2 flights found"));

        let text = render_results(&offers[..1], &airports(), false);
        assert!(text.contains("1 flight found"));
    }

    #[test]
    fn test_card_contents() {
        let text = render_results(&two_offers(), &airports(), false);
        assert!(text.contains("AMS (Amsterdam (Schiphol)) → FNC (Funchal)"));
        assert!(text.contains("FNC (Funchal)"));
        assert!(text.contains("CDG (Paris Charles de Gaulle)"));
        assert!(text.contains("November 10, 2022"));
        assert!(text.contains("06:25 Departure"));
        assert!(text.contains("09:35 Arrival"));
        assert!(text.contains("14:30 Departure"));
        assert!(text.contains("16:45 Arrival"));
        assert!(text.contains("HV 6629"));
        assert!(text.contains("HV 1234"));
        assert!(text.contains("€58.70  Basic"));
        assert!(text.contains("€89.50"));
        assert!(text.contains("Base fare: €29.51"));
        assert!(text.contains("Taxes & fees: €29.19"));
        assert!(text.contains("Book Flight: https://example.com/a"));
    }

    #[test]
    fn test_unknown_airport_shows_code_only() {
        let offers = vec![offer("x", "XYZ", "2022-11-10T06:25:00", "2022-11-10T09:35:00", 1, 10.0)];
        let card = render_card(&offers[0], &airports());
        assert!(card.starts_with("AMS (Amsterdam (Schiphol)) → XYZ\n"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(58.7), "€58.70");
        assert_eq!(format_price(0.0), "€0.00");
    }
}
