use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cli::client::{select_file, ApiClient};
use cli::report;

/// Compiled-in backend base URL, the same way the web client bakes in its
/// bundler-injected variable. Override per-run with --api-url.
const DEFAULT_API_URL: &str = match option_env!("RESUME_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

#[derive(Parser)]
#[command(name = "resume-cli")]
#[command(about = "Upload a resume PDF and get structured AI feedback")]
#[command(version)]
struct Cli {
    /// Path to the resume PDF to analyze
    file: Option<PathBuf>,

    /// Backend API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let file = match select_file(cli.file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // Advisory only, like the picker's accept filter — the server takes
    // whatever it gets.
    if !file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    {
        warn!("{} does not have a .pdf extension; sending it anyway", file.display());
    }

    println!("Analyzing your resume...");

    let api = ApiClient::new(cli.api_url);
    match api.analyze(&file).await {
        Ok(feedback) => print!("{}", report::render(&feedback)),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}
