use anyhow::Context;
use clap::Parser;
use extractor::{DEFAULT_PREVIEW_LIMIT, DirectorySink, ImageExtractor};
use notebook::NotebookReader;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "extract-images")]
#[command(about = "Extract embedded images from a Jupyter notebook", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, env = "NOTEBOOK_PATH", default_value = "Projet_Machine_Learning.ipynb")]
    notebook: PathBuf,

    #[arg(long, env = "NOTEBOOK_FIGURES_DIR", default_value = "figures/notebook")]
    output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
    preview_limit: usize,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "extract_images={},extractor={},notebook={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let document = NotebookReader::read(&cli.notebook)
        .with_context(|| format!("Cannot read notebook {}", cli.notebook.display()))?;

    let mut extractor = ImageExtractor::new(DirectorySink::new(&cli.output));
    let report = extractor
        .extract(&document)
        .context("Image extraction aborted")?;

    println!("{}", report.summary(cli.preview_limit));

    Ok(())
}
