use clap::{Parser, Subcommand};
use std::env;
use std::io::IsTerminal;

use maintenanceCalendar::config::Settings;
use maintenanceCalendar::presentation::console::{self, RenderOptions};
use maintenanceCalendar::service::calendar_presenter::{CalendarPresenter, visit_calendar};
use maintenanceCalendar::service::schedule_service::{HttpScheduleSource, ScheduleSource};

#[derive(Parser)]
#[command(about = "Month-by-month view of a customer's maintenance schedule")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the schedule and print the calendar
    Show {
        /// Print the projected calendar as JSON
        #[arg(long)]
        json: bool,
        /// Disable colours
        #[arg(long)]
        plain: bool,
    },
    /// Fetch the schedule and print the parsed document, unused customer fields included
    Raw {},
}

pub async fn cli(settings: Settings) {
    // Fine to exit here on bad arguments
    let cli = Cli::parse();
    let source = HttpScheduleSource::new(settings.schedule_url.clone());
    let command = cli.command.unwrap_or(Commands::Show {
        json: false,
        plain: false,
    });
    match command {
        Commands::Show { json, plain } => {
            let presenter = CalendarPresenter::new(settings.timezone);
            let view = visit_calendar(&source, &presenter).await;
            if json {
                match serde_json::to_string_pretty(&view) {
                    Ok(body) => println!("{}", body),
                    Err(e) => tracing::error!("Failed to encode calendar: {}", e),
                }
            } else {
                let options = RenderOptions {
                    enable_color: use_color(plain),
                };
                print!("{}", console::render(&view, options));
            }
        }
        Commands::Raw {} => match source.fetch_schedule().await {
            Ok(document) => match serde_json::to_string_pretty(&document) {
                Ok(body) => println!("{}", body),
                Err(e) => tracing::error!("Failed to encode schedule: {}", e),
            },
            Err(e) => tracing::error!(url = source.url(), "Failed to load maintenance schedule: {}", e),
        },
    }
}

fn use_color(plain: bool) -> bool {
    !plain && env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
