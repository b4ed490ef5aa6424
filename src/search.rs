use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::dates::is_same_day;
use crate::flight_models::{FlightOffer, FlightsData};

/// Offers arriving at `destination_code`, ignoring case, in input order
pub fn filter_by_destination(offers: &[FlightOffer], destination_code: &str) -> Vec<FlightOffer> {
    offers
        .iter()
        .filter(|offer| offer.destination_code().eq_ignore_ascii_case(destination_code))
        .cloned()
        .collect()
}

/// Offers departing on the UTC calendar day of `date`, in input order.
///
/// An offer whose departure timestamp does not parse never matches.
pub fn filter_by_date(offers: &[FlightOffer], date: DateTime<Utc>) -> Vec<FlightOffer> {
    offers
        .iter()
        .filter(|offer| match offer.departure_instant() {
            Some(departure) => is_same_day(departure, date),
            None => {
                warn!(
                    "Unparsable departure time {:?} on offer {}",
                    offer.departure_date_time(),
                    offer.id()
                );
                false
            }
        })
        .cloned()
        .collect()
}

/// Destination filter, then date filter
pub fn search(flights: &FlightsData, destination_code: &str, date: DateTime<Utc>) -> Vec<FlightOffer> {
    let by_destination = filter_by_destination(flights.offers(), destination_code);
    debug!(
        "{} of {} offers go to {}",
        by_destination.len(),
        flights.offers().len(),
        destination_code
    );
    let by_date = filter_by_date(&by_destination, date);
    debug!("{} offers depart on {}", by_date.len(), date.date_naive());
    by_date
}

/// Earliest departure first, as a new list. Equal keys keep their input
/// order; offers with an unparsable departure go last.
pub fn sort_by_departure_time(offers: &[FlightOffer]) -> Vec<FlightOffer> {
    let mut sorted = offers.to_vec();
    sorted.sort_by_key(|offer| {
        let departure = offer.departure_instant();
        (departure.is_none(), departure)
    });
    sorted
}
