use std::error::Error;

use flight_search::config::SearchConfig;
use flight_search::search::{filter_by_destination, sort_by_departure_time};
use flight_search::{logging, Config, FileDataSource, PageController, PageState};

/// Walks the controller through a load and a few searches against the sample data
fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let _guard = logging::init(&config.log);
    config.log_source();

    let search_config = SearchConfig {
        result_delay_ms: 0,
        ..config.search.clone()
    };
    let mut controller = PageController::new(FileDataSource::new(config.data.clone()), search_config);
    controller.load()?;
    println!("{}", controller.render());

    // Valid search
    controller.form_mut().set_destination("FNC");
    controller.form_mut().set_departure_date("2022-11-10");
    match controller.submit() {
        Ok(results) => println!("AMS -> FNC on 2022-11-10: {} flights", results.len()),
        Err(errors) => println!("AMS -> FNC on 2022-11-10 rejected: {:?}", errors),
    }

    // Destination equal to origin
    controller.form_mut().set_destination("AMS");
    match controller.submit() {
        Ok(results) => println!("AMS -> AMS: {} flights", results.len()),
        Err(errors) => println!("AMS -> AMS rejected: {:?}", errors),
    }

    // Outside the availability window
    controller.form_mut().set_destination("FNC");
    controller.form_mut().set_departure_date("2022-12-01");
    match controller.submit() {
        Ok(results) => println!("AMS -> FNC on 2022-12-01: {} flights", results.len()),
        Err(errors) => println!("AMS -> FNC on 2022-12-01 rejected: {:?}", errors),
    }

    // Unsupported origin
    controller.form_mut().set_origin("CDG");
    controller.form_mut().set_departure_date("2022-11-10");
    match controller.submit() {
        Ok(results) => println!("CDG -> FNC on 2022-11-10: {} flights", results.len()),
        Err(errors) => println!("CDG -> FNC on 2022-11-10 rejected: {:?}", errors),
    }

    println!("{}", controller.render());

    // Every FNC departure in the data set, earliest first
    if let PageState::Ready { flights, .. } = controller.state() {
        let fnc = sort_by_departure_time(&filter_by_destination(flights.offers(), "fnc"));
        println!("All FNC departures:");
        for offer in &fnc {
            println!("  {} {}", offer.id(), offer.departure_date_time());
        }
    }

    Ok(())
}
