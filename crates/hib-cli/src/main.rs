use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hib_core::{
    Corpus, Dnic, IndicatorKind, IndicatorSummary, Quartile, Summary, ThresholdSet,
    evaluate_corpus,
};

#[derive(Parser)]
#[command(name = "hib", about = "Delayed-recognition indicators for citation histories")]
struct Cli {
    /// Threshold file (TOML); falls back to $HIB_CONFIG, then built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every paper in a corpus, printing JSON reports
    Score {
        /// Corpus JSON file
        corpus: PathBuf,

        /// Indicator to run (repeatable); all when omitted
        #[arg(long = "indicator", short = 'i')]
        indicators: Vec<IndicatorKind>,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print per-indicator totals for a corpus
    Summary {
        /// Corpus JSON file
        corpus: PathBuf,

        /// Indicator to run (repeatable); all when omitted
        #[arg(long = "indicator", short = 'i')]
        indicators: Vec<IndicatorKind>,
    },

    /// Build a corpus baseline table
    Baseline {
        #[command(subcommand)]
        table: BaselineCommand,
    },

    /// Print the effective thresholds as TOML
    Thresholds,
}

#[derive(Subcommand)]
enum BaselineCommand {
    /// DNIC expected citation per subject and year
    Ekj {
        /// Corpus JSON file
        corpus: PathBuf,

        /// Only publication years instead of every observed year
        #[arg(long)]
        publication_years: bool,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Quartile c50 percentile per subject and publication year
    C50 {
        /// Corpus JSON file
        corpus: PathBuf,

        /// Percentile rate in [0, 1]
        #[arg(long)]
        rate: f64,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Score {
            corpus,
            indicators,
            output,
        } => cmd_score(&cli, corpus, indicators, output.as_deref()),
        Commands::Summary { corpus, indicators } => cmd_summary(&cli, corpus, indicators),
        Commands::Baseline { table } => cmd_baseline(table),
        Commands::Thresholds => cmd_thresholds(&cli),
    }
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config
        .clone()
        .or_else(|| std::env::var("HIB_CONFIG").ok().map(PathBuf::from))
}

fn load_thresholds(cli: &Cli) -> Result<ThresholdSet> {
    let thresholds = match config_path(cli) {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let thresholds: ThresholdSet = toml::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            tracing::info!("loaded thresholds from {}", path.display());
            thresholds
        }
        None => ThresholdSet::default(),
    };
    thresholds.validate().context("invalid thresholds")?;
    Ok(thresholds)
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let corpus = Corpus::from_json(&content)
        .with_context(|| format!("failed to parse corpus {}", path.display()))?;
    tracing::info!("loaded {} papers from {}", corpus.len(), path.display());
    Ok(corpus)
}

fn selected(indicators: &[IndicatorKind]) -> Vec<IndicatorKind> {
    if indicators.is_empty() {
        IndicatorKind::ALL.to_vec()
    } else {
        indicators.to_vec()
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{content}").context("failed to write stdout")?;
        }
    }
    Ok(())
}

fn cmd_score(
    cli: &Cli,
    corpus: &Path,
    indicators: &[IndicatorKind],
    output: Option<&Path>,
) -> Result<()> {
    let thresholds = load_thresholds(cli)?;
    let corpus = load_corpus(corpus)?;
    let reports = evaluate_corpus(&corpus, &thresholds, &selected(indicators))
        .context("failed to score corpus")?;
    let json = serde_json::to_string_pretty(&reports).context("failed to serialize reports")?;
    write_output(output, &json)
}

fn cmd_summary(cli: &Cli, corpus: &Path, indicators: &[IndicatorKind]) -> Result<()> {
    let thresholds = load_thresholds(cli)?;
    let corpus = load_corpus(corpus)?;
    let reports = evaluate_corpus(&corpus, &thresholds, &selected(indicators))
        .context("failed to score corpus")?;
    let summary = Summary::from_reports(&reports);

    println!("papers: {}", summary.papers);
    for (kind, entry) in &summary.indicators {
        match entry {
            IndicatorSummary::Score { mean, max } => {
                println!("{:<24}mean={mean:.4} max={max:.4}", kind.name());
            }
            IndicatorSummary::Classifier { flagged } => {
                println!("{:<24}flagged={flagged}/{}", kind.name(), summary.papers);
            }
        }
    }
    Ok(())
}

fn cmd_baseline(table: &BaselineCommand) -> Result<()> {
    match table {
        BaselineCommand::Ekj {
            corpus,
            publication_years,
            output,
        } => {
            let corpus = load_corpus(corpus)?;
            let ekj = if *publication_years {
                Dnic::get_ekj(&corpus.papers)
            } else {
                Dnic::get_ekj_for_years(&corpus.papers, corpus.observed_years())
            }
            .context("failed to build EKJ baseline")?;
            let json = serde_json::to_string_pretty(&ekj).context("failed to serialize table")?;
            write_output(output.as_deref(), &json)
        }
        BaselineCommand::C50 {
            corpus,
            rate,
            output,
        } => {
            let corpus = load_corpus(corpus)?;
            let c50 = Quartile::get_c50_list(&corpus.papers);
            let table = Quartile::get_c_dic(&c50, &corpus.papers, *rate)
                .context("failed to build c50 table")?;
            let json =
                serde_json::to_string_pretty(&table).context("failed to serialize table")?;
            write_output(output.as_deref(), &json)
        }
    }
}

fn cmd_thresholds(cli: &Cli) -> Result<()> {
    let thresholds = load_thresholds(cli)?;
    let toml = toml::to_string_pretty(&thresholds).context("failed to serialize thresholds")?;
    print!("{toml}");
    Ok(())
}
