mod assign;
mod config;
mod display;
mod parser;
mod web;

use assign::plan;
use config::Settings;
use display::{print_assignment, write_report_to_file};
use parser::{load_participants, parse_call_count};

const USAGE: &str = "Usage:
  call-assignments <names-file> <calls-per-person> [output-file]
  call-assignments web [port]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    // Check if we should run in web mode
    if args.len() > 1 && args[1] == "web" {
        let settings = Settings::from_env(args.get(2).map(String::as_str));
        log::info!("Starting web server on {}:{}", settings.bind, settings.port);
        web::start_server(settings).await?;
        return Ok(());
    }

    // CLI mode
    if args.len() < 3 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let participants = load_participants(&args[1])?;
    log::info!("Loaded {} participants from {}", participants.len(), args[1]);

    let requested = match parse_call_count(&args[2]) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let result = plan(&participants, requested);
    print_assignment(&result);

    match result {
        Ok(assignment) => {
            if let Some(out) = args.get(3) {
                write_report_to_file(&assignment, out)?;
                println!("\nReport saved to: {}", out);
            }
            Ok(())
        }
        Err(_) => std::process::exit(1),
    }
}
