use clap::Parser;
use npmsearch::ResponseOrdering;
use npmsearch::api::{NpmsClient, search_once};
use npmsearch::core::config::{self, CliOverrides};
use npmsearch::core::view::render_results;
use npmsearch::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "npmsearch", about = "Search npm packages as you type")]
struct Args {
    /// Suggestion endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// How overlapping lookups are resolved
    #[arg(long, value_enum)]
    response_ordering: Option<ResponseOrdering>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Look up QUERY once, print the results and exit
    #[arg(long, value_name = "QUERY")]
    print: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {e}");
        config::SearchConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            response_ordering: args.response_ordering,
            log_file: args.log_file,
        },
    );

    // File logger: stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("npmsearch starting up with config: {:?}", resolved);

    if let Some(query) = args.print {
        let client = NpmsClient::new(Some(resolved.endpoint.clone()));
        let state = search_once(&client, &query, resolved.response_ordering).await;
        let view = render_results(&state);
        for line in view.to_lines() {
            println!("{line}");
        }
        return if view.error.is_some() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::warn!("Terminal error: {}", e);
            eprintln!("npmsearch: {e}");
            ExitCode::FAILURE
        }
    }
}
