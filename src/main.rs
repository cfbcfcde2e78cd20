use anyhow::{anyhow, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hackgallery::data::load_submissions;
use hackgallery::gallery::render;
use hackgallery::models::GalleryReport;
use hackgallery::taxonomy::Topic;
use hackgallery::{Config, GalleryConfig, GalleryPipeline, GitLabClient};

#[derive(Parser, Debug)]
#[command(name = "hackgallery")]
#[command(version = "0.1.0")]
#[command(about = "Browse hackathon submissions with topic and repo health info")]
struct Args {
    /// Path to the submissions CSV export (defaults to DATA_PATH)
    #[arg(short, long)]
    data: Option<String>,

    /// Case-insensitive search query over the card text fields
    #[arg(short, long, default_value = "")]
    search: String,

    /// Restrict the gallery to one topic (e.g. games, finance, ai-ml)
    #[arg(short, long)]
    topic: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Skip the repository document checks (no API calls)
    #[arg(long)]
    skip_docs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("hackgallery=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    let topic_filter = args
        .topic
        .as_deref()
        .map(|name| {
            Topic::parse(name).ok_or_else(|| {
                let labels: Vec<_> = Topic::ALL.iter().map(|t| t.label()).collect();
                anyhow!("unknown topic '{}', expected one of: {}", name, labels.join(", "))
            })
        })
        .transpose()?;

    let data_path = args.data.clone().unwrap_or_else(|| config.data_path.clone());
    let submissions = load_submissions(&data_path)
        .with_context(|| format!("failed to load submissions from {}", data_path))?;
    tracing::info!("Loaded {} submissions from {}", submissions.len(), data_path);

    let gitlab = GitLabClient::new(&config.gitlab_token, &config.gitlab_base_url)?;
    let pipeline = GalleryPipeline::new(
        gitlab,
        GalleryConfig {
            check_docs: !args.skip_docs,
        },
    );

    let report = pipeline
        .build(submissions, &args.search, topic_filter)
        .await;

    output_report(&report, &args)?;

    Ok(())
}

fn output_report(report: &GalleryReport, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => render::format_markdown(report),
        _ => render::format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
