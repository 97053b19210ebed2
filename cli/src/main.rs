mod scrape;

use clap::Parser;
use dotenv::dotenv;
use env_logger::{Env, Target};

/// Collects python-backend vacancies in Moscow from hh.ru into a spreadsheet.
///
/// Needs a WebDriver server (chromedriver, selenium) reachable at
/// WEBDRIVER_URL, default http://localhost:4444.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();
    let _args = Cli::parse();
    if let Err(e) = scrape::run().await {
        log::error!("Scrape failed: {}", e);
        std::process::exit(1);
    }
}
