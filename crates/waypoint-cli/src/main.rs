mod terminal;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use waypoint_client::{
    BufferedContent, ContentHandle, HttpPlanner, ItineraryPlanner, ItineraryRequestHandler,
    SimulatedPlanner, StaticForm, SubmitEvent, UiHandles,
};
use waypoint_core::{FormValues, ItineraryResponse};

use crate::terminal::TerminalRegion;

#[derive(Debug, Parser)]
#[command(name = "waypoint")]
#[command(about = "Plan a trip and render the itinerary as HTML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Submit a trip request and print the rendered itinerary.
    Plan {
        #[arg(long)]
        city: String,
        /// Number of days; validated before the request is sent.
        #[arg(long, allow_hyphen_values = true)]
        days: String,
        #[arg(long = "attractions-per-day", allow_hyphen_values = true)]
        attractions_per_day: String,
        /// Use the offline planner instead of the configured service.
        #[arg(long)]
        simulate: bool,
        /// Artificial latency for `--simulate`, in milliseconds.
        #[arg(long, default_value_t = 0, requires = "simulate")]
        latency_ms: u64,
        /// Write HTML here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render a saved itinerary JSON file.
    Render {
        file: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = waypoint_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan {
            city,
            days,
            attractions_per_day,
            simulate,
            latency_ms,
            output,
        } => {
            let values = FormValues {
                city,
                days,
                attractions_per_day,
            };
            if simulate {
                let planner = SimulatedPlanner::with_latency(Duration::from_millis(latency_ms));
                run_plan(planner, values, output.as_deref()).await
            } else {
                let planner = HttpPlanner::from_config(&config)?;
                tracing::info!(endpoint = %planner.endpoint(), "using planner service");
                run_plan(planner, values, output.as_deref()).await
            }
        }
        Commands::Render { file, output } => {
            let html = render_file(&file)?;
            write_html(&html, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run one submission cycle and emit whatever ended up in the content region.
async fn run_plan<P: ItineraryPlanner>(
    planner: P,
    values: FormValues,
    output: Option<&Path>,
) -> anyhow::Result<ExitCode> {
    let content = Arc::new(BufferedContent::default());
    let ui = UiHandles {
        form: Arc::new(StaticForm::new(values)),
        loading: Arc::new(TerminalRegion::new("loading indicator")),
        results: Arc::new(TerminalRegion::new("results")),
        content: Arc::clone(&content) as Arc<dyn ContentHandle>,
    };
    let handler = ItineraryRequestHandler::new(planner, ui);

    let outcome = handler.on_submit(&mut SubmitEvent::new()).await;
    write_html(&content.html(), output)?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn render_file(path: &Path) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    anyhow::ensure!(
        value.is_object(),
        "{} must contain a JSON object",
        path.display()
    );
    let itinerary: ItineraryResponse = serde_json::from_value(value)
        .with_context(|| format!("{} is not an itinerary", path.display()))?;
    Ok(waypoint_render::render_itinerary(&itinerary).to_html())
}

fn write_html(html: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{html}");
            Ok(())
        }
    }
}
