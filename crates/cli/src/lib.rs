use anyhow::{Context as AnyhowContext, Result};
use booktag_labels::LabelConfig;
use booktag_quest_index::QuestIndexBuilder;
use booktag_records::{PatchWriter, RecordSource, RecordStore};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

mod annotate;
mod report;

pub use annotate::{annotate, AnnotationReport, AnnotationStats, RenamedBook};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "booktag")]
#[command(about = "Label book names with skill, map marker and quest tags", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Label every eligible book and write the name overrides
    Annotate(AnnotateArgs),

    /// Validate a settings document and print the effective settings
    Settings(SettingsArgs),

    /// Print the books referenced by quest aliases
    #[command(name = "quest-index")]
    QuestIndex(QuestIndexArgs),
}

#[derive(Args)]
struct AnnotateArgs {
    /// Load order document (JSON or TOML)
    #[arg(long)]
    load_order: PathBuf,

    /// Settings document (JSON or TOML); defaults apply when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Where to write the patch
    #[arg(long, default_value = "booktag-patch.json")]
    output: PathBuf,

    /// Name recorded in the patch document
    #[arg(long, default_value = "Booktag.esp")]
    plugin_name: String,

    /// Classify and report without writing the patch
    #[arg(long)]
    dry_run: bool,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SettingsArgs {
    /// Settings document (JSON or TOML); prints defaults when omitted
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Args)]
struct QuestIndexArgs {
    /// Load order document (JSON or TOML)
    #[arg(long)]
    load_order: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Annotate(args) => args.json,
        Commands::QuestIndex(args) => args.json,
        Commands::Settings(_) => true,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Annotate(args) => run_annotate(&args),
        Commands::Settings(args) => run_settings(&args),
        Commands::QuestIndex(args) => run_quest_index(&args),
    }
}

fn load_settings(path: Option<&Path>) -> Result<LabelConfig> {
    match path {
        Some(path) => LabelConfig::from_file(path)
            .with_context(|| format!("Failed to load settings {}", path.display())),
        None => {
            log::debug!("No settings document given, using defaults");
            Ok(LabelConfig::default())
        }
    }
}

fn load_store(path: &Path) -> Result<RecordStore> {
    RecordStore::load(path).with_context(|| format!("Failed to load records {}", path.display()))
}

fn run_annotate(args: &AnnotateArgs) -> Result<()> {
    // Settings first: a bad option must stop the run before anything else happens.
    let config = load_settings(args.settings.as_deref())?;
    let store = load_store(&args.load_order)?;

    let mut patch = PatchWriter::new(&args.plugin_name);
    let report = annotate(&store, &store, &mut patch, &config)?;

    let written = if args.dry_run {
        None
    } else {
        patch
            .save(&args.output)
            .with_context(|| format!("Failed to write patch {}", args.output.display()))?;
        Some(args.output.display().to_string())
    };

    if args.json {
        #[derive(Serialize)]
        struct AnnotateOutput<'a> {
            patch: Option<&'a str>,
            #[serde(flatten)]
            report: &'a AnnotationReport,
        }

        let output = AnnotateOutput {
            patch: written.as_deref(),
            report: &report,
        };
        print_stdout(&serde_json::to_string_pretty(&output)?)
    } else {
        print_stdout(&report::render_annotation_report(&report, written.as_deref()))
    }
}

fn run_settings(args: &SettingsArgs) -> Result<()> {
    let config = load_settings(args.settings.as_deref())?;
    print_stdout(&serde_json::to_string_pretty(&config)?)
}

fn run_quest_index(args: &QuestIndexArgs) -> Result<()> {
    let store = load_store(&args.load_order)?;
    let (index, stats) = QuestIndexBuilder::new(&store).build_with_stats(store.quests());

    if args.json {
        let books: Vec<&str> = index.sorted().into_iter().map(|key| key.as_str()).collect();
        let output = serde_json::json!({ "books": books, "stats": stats });
        print_stdout(&serde_json::to_string_pretty(&output)?)
    } else {
        print_stdout(report::render_quest_index(&index).trim_end())
    }
}
