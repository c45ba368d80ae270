use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use callsight::{
    analyze, extract_call_metrics, AnthropicClient, AnthropicConfig, MetricsConfig, VapiClient,
    VapiConfig,
};

#[derive(Parser)]
#[command(name = "callsight")]
#[command(author, version, about = "Sales call analysis pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a call and produce the combined coaching report
    Analyze {
        /// Call identifier on the telephony platform
        #[arg(long)]
        call_id: String,

        /// Training scenario the call was run against
        #[arg(long, default_value = "")]
        scenario: String,

        /// Read the transcript from a file instead of fetching it
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// Write the report JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute heuristic metrics for a transcript without calling the model
    Metrics {
        /// Transcript text file
        #[arg(short, long)]
        transcript: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            call_id,
            scenario,
            transcript,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            run_analysis(call_id, scenario, transcript, output).await
        }
        Commands::Metrics {
            transcript,
            verbose,
        } => {
            setup_logging(verbose);
            report_metrics(transcript)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn run_analysis(
    call_id: String,
    scenario: String,
    transcript_path: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let transcript = match &transcript_path {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read transcript file: {:?}", path))?,
        ),
        None => None,
    };

    let client = AnthropicClient::new(AnthropicConfig::from_env()?);
    let transcripts = VapiClient::new(VapiConfig::from_env());

    let result = analyze(&client, &transcripts, &call_id, &scenario, transcript).await?;

    info!(
        "Call {}: {} objections raised, meeting_booked={}, sale_closed={}",
        result.call_id,
        result.metrics.objections_raised,
        result.metrics.meeting_booked,
        result.metrics.sale_closed
    );

    match &output {
        Some(path) => {
            result.write_json(path)?;
            info!("Report written to {:?}", path);
        }
        None => {
            let json =
                serde_json::to_string_pretty(&result).context("Failed to render report JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn report_metrics(path: PathBuf) -> Result<()> {
    let transcript = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read transcript file: {:?}", path))?;

    let metrics = extract_call_metrics(&transcript, &MetricsConfig::default());

    println!("Call Metrics");
    println!("============");
    println!("Words: {}", metrics.word_count);
    println!("Estimated talk time: {}s", metrics.talk_time);
    println!("Interruption markers: {}", metrics.interruptions);
    println!();

    println!("Objections");
    println!("----------");
    println!("Raised: {}", metrics.objections_raised);
    println!("Resolved (estimated): {}", metrics.objections_resolved);
    println!();

    println!("Outcomes");
    println!("--------");
    println!("Meeting attempts: {}", metrics.meeting_attempts);
    println!("Meeting booked: {}", metrics.meeting_booked);
    println!("Closing attempts: {}", metrics.closing_attempts);
    println!("Sale closed: {}", metrics.sale_closed);
    println!();

    println!("Energy level: {}/100", metrics.energy_level);

    Ok(())
}
