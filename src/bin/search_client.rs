use std::error::Error;
use std::io::{self, Write};

use flight_search::airports::all_codes;
use flight_search::{logging, Config, FileDataSource, PageController};

fn prompt(label: &str) -> io::Result<String> {
    let mut input = String::new();
    print!("{}", label);
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let _guard = logging::init(&config.log);
    config.log_source();

    let source = FileDataSource::new(config.data.clone());
    let mut controller = PageController::new(source, config.search.clone());
    println!("{}", controller.render());
    // A failed load is rendered; the user can retry from the loop below.
    let _ = controller.load();

    loop {
        println!("----------------------------------");
        println!("{}", controller.render());
        println!("Command List:");
        println!("  quit - exit the program");
        if controller.is_ready() {
            println!("  1 - set origin");
            println!("  2 - set destination");
            println!("  3 - set departure date (YYYY-MM-DD)");
            println!("  4 - search flights");
            println!("  5 - list airports");
        } else {
            println!("  retry - reload flight data");
        }

        let command = prompt("Enter command: ")?;
        match command.as_str() {
            "quit" => break,
            "retry" => {
                let _ = controller.reload();
            }
            "1" if controller.is_ready() => {
                let origin = prompt("Enter origin: ")?;
                controller.form_mut().set_origin(origin);
            }
            "2" if controller.is_ready() => {
                let destination = prompt("Enter destination: ")?;
                controller.form_mut().set_destination(destination);
            }
            "3" if controller.is_ready() => {
                let date = prompt(&format!(
                    "Enter departure date ({} to {}): ",
                    controller.form().min_date(),
                    controller.form().max_date()
                ))?;
                controller.form_mut().set_departure_date(date);
            }
            "4" if controller.is_ready() => {
                // Errors are shown next to their fields on the next render.
                if controller.begin_submit().is_ok() {
                    println!("{}", controller.render());
                    controller.finish_search();
                }
            }
            "5" if controller.is_ready() => {
                if let Some(airports) = controller.airports() {
                    for label in controller.form().airport_options(airports) {
                        println!("  {}", label);
                    }
                    println!("{} airports", all_codes(airports).len());
                }
            }
            other => println!("Unknown command: {}", other),
        }
    }

    Ok(())
}
