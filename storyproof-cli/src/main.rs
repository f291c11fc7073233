use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "storyproof", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a storyboard JSON document.
    Validate(ValidateArgs),
    /// Convert narration text to SSML for the synthesis stage.
    Ssml(SsmlArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Storyboard JSON path.
    storyboard: PathBuf,

    /// Schema JSON path (defaults to the built-in storyboard schema).
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Canvas margin for spatial bounds checks.
    #[arg(long, default_value_t = storyproof::DEFAULT_MARGIN)]
    margin: f64,

    /// Emit the full report as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SsmlArgs {
    /// Narration text file.
    text: PathBuf,

    /// Glossary JSON with per-term pronunciation overrides.
    #[arg(long)]
    glossary: Option<PathBuf>,

    /// Prosody rate multiplier.
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Pause after sentence punctuation, in milliseconds.
    #[arg(long, default_value_t = 300)]
    sentence_pause_ms: u32,

    /// Pause after clause punctuation, in milliseconds.
    #[arg(long, default_value_t = 150)]
    clause_pause_ms: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Ssml(args) => cmd_ssml(args),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let storyboard = storyproof::read_json_file(&args.storyboard)
        .with_context(|| format!("load storyboard '{}'", args.storyboard.display()))?;

    let opts = storyproof::ValidateOptions {
        margin: args.margin,
        ..storyproof::ValidateOptions::default()
    };
    let report = match &args.schema {
        Some(path) => {
            let schema = storyproof::read_json_file(path)
                .with_context(|| format!("load schema '{}'", path.display()))?;
            storyproof::validate_tree_with(&storyboard, &schema, &opts)?
        }
        None => {
            let schema = storyproof::builtin_schema_tree()?;
            storyproof::validate_tree_with(&storyboard, &schema, &opts)?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.passed() {
        let total = report.summary.total_duration_s;
        println!("PASS");
        println!("  scenes:         {}", report.summary.scene_count);
        println!(
            "  total duration: {total}s ({}m{}s)",
            (total / 60.0) as u64,
            (total % 60.0).round() as u64
        );
        println!("  elements:       {}", report.summary.element_count);
    } else {
        println!("FAIL: {} problem(s)", report.diagnostics.len());
        for (i, diag) in report.diagnostics.iter().enumerate() {
            println!("  {}. {diag}", i + 1);
        }
    }

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_ssml(args: SsmlArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.text)
        .with_context(|| format!("read narration '{}'", args.text.display()))?;

    let glossary = match &args.glossary {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("read glossary '{}'", path.display()))?;
            Some(
                serde_json::from_str::<storyproof::Glossary>(&content)
                    .with_context(|| format!("parse glossary '{}'", path.display()))?,
            )
        }
        None => None,
    };

    let opts = storyproof::SsmlOptions {
        speed: args.speed,
        pause_after_sentence_ms: args.sentence_pause_ms,
        pause_after_clause_ms: args.clause_pause_ms,
    };
    println!(
        "{}",
        storyproof::prepare_ssml(text.trim_end(), glossary.as_ref(), &opts)
    );
    Ok(())
}
