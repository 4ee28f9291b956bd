//! Convert a SynTagRus treebank into governor/dependent lemma pair tables
//!
//! Run with no arguments to process `./syntagrus/SynTagRus2016` and write
//! `syntagrus_lemma_<count>.csv` checkpoints to the current directory.

use anyhow::{Context, ensure};
use clap::Parser;
use deppairs::config::{
    DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_CORPUS_ROOT, DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX,
};
use deppairs::{Config, Corpus, FailureKind};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "deppairs")]
#[command(about = "Extract governor/dependent lemma pairs from an XML dependency treebank", long_about = None)]
struct Cli {
    /// Corpus root, walked recursively
    #[arg(default_value = DEFAULT_CORPUS_ROOT)]
    corpus_dir: PathBuf,

    /// Directory for checkpoint files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Checkpoint file name prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Successful documents per checkpoint
    #[arg(long, default_value_t = DEFAULT_CHECKPOINT_INTERVAL)]
    interval: usize,

    /// Only process files whose name ends with this suffix
    #[arg(long)]
    extension: Option<String>,

    /// Also write the rows left after the last full batch
    #[arg(long)]
    flush_remainder: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.corpus_dir)
            .with_output_dir(cli.output_dir)
            .with_prefix(cli.prefix)
            .with_checkpoint_interval(cli.interval)
            .with_extension(cli.extension)
            .with_flush_remainder(cli.flush_remainder)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Cli::parse());
    ensure!(
        config.corpus_root.is_dir(),
        "corpus directory {} does not exist",
        config.corpus_root.display()
    );
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut corpus = Corpus::new(config);
    let summary = corpus.walk().context("Failed to write checkpoint")?;

    for kind in FailureKind::ALL {
        let count = summary.failures_of(kind);
        if count > 0 {
            log::info!("{}: {} files", kind.label(), count);
        }
    }
    if !corpus.table().is_empty() {
        log::info!(
            "{} rows not checkpointed (use --flush-remainder to keep them)",
            corpus.table().len()
        );
    }

    println!(
        "Failed: {}, succeeded: {}, pairs: {}, checkpoints: {}",
        summary.failed,
        summary.succeeded,
        summary.pairs,
        summary.checkpoints.len()
    );

    Ok(())
}
