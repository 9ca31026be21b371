use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use study_dash::config::{
    DEFAULT_ENDPOINT, DEFAULT_FLASHCARD_COUNT, DEFAULT_MODEL, DEFAULT_QUIZ_COUNT, DEFAULT_USER,
    MAX_QUIZ_COUNT,
};
use study_dash::{logging, Dashboard, DashboardConfig, InferenceConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Note files to save into the session at startup
    notes: Vec<PathBuf>,

    /// Chat-completion endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Model identifier sent with every request
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Bearer credential for the endpoint
    #[arg(long, env = "STUDY_DASH_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Name shown in the dashboard
    #[arg(short, long, default_value = DEFAULT_USER)]
    user: String,

    /// Questions per quiz when none is given
    #[arg(long, default_value_t = DEFAULT_QUIZ_COUNT)]
    quiz_count: usize,

    /// File to append logs to. Nothing is logged without one
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "study_dash=debug"
    #[arg(long, env = "STUDY_DASH_LOG", default_value = logging::DEFAULT_FILTER)]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !(1..=MAX_QUIZ_COUNT).contains(&args.quiz_count) {
        bail!("--quiz-count must be between 1 and {}", MAX_QUIZ_COUNT);
    }

    logging::init(args.log_file.as_deref(), &args.log_level)
        .context("failed to open the log file")?;

    let config = DashboardConfig {
        user: args.user,
        quiz_count: args.quiz_count,
        flashcard_count: DEFAULT_FLASHCARD_COUNT,
    };
    let inference = InferenceConfig {
        endpoint: args.endpoint,
        model: args.model,
        api_key: args.api_key.filter(|key| !key.trim().is_empty()),
    };

    let mut dashboard = Dashboard::new(config, inference);
    dashboard
        .preload(&args.notes)
        .await
        .context("failed to load notes")?;
    dashboard.run().await.context("dashboard failed")?;
    Ok(())
}
