use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use serde::Serialize;

use kinship::logging::{init_logging, LogConfig, LogFormat};
use kinship::{parse_path, AgeRef, Gender, Position, Resolution, Step, Term, Walk};

/// Name the relative reached by a path of family steps from yourself.
#[derive(Parser)]
#[command(
    name = "kinship",
    version,
    about = "Resolve the kinship term for a path of family-relation steps",
    long_about = "Resolve the kinship term for a path of family-relation steps.\n\n\
                  Steps: father, mother, husband, wife, son, daughter, brother, sister,\n\
                  sibling. Sibling steps accept an elder- or younger- prefix,\n\
                  e.g. `kinship --self male wife younger-brother`."
)]
struct Cli {
    /// Steps from yourself, in order (commas or spaces).
    #[arg(value_name = "STEP")]
    steps: Vec<String>,

    /// Your own gender.
    #[arg(long = "self", value_name = "GENDER", default_value = "unknown")]
    self_gender: String,

    /// How to print the result.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also print every position visited (text format only).
    #[arg(long)]
    trace: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    log_format: LogFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    self_gender: Gender,
    steps: &'a [Step],
    trace: &'a [Position],
    term: Term,
    label: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: io::stderr().is_terminal(),
        ..LogConfig::default()
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let walk = match build_walk(&cli) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(2);
        }
    };

    let resolution = walk.resolve();
    match print_resolution(&cli, &walk, &resolution) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_walk(cli: &Cli) -> anyhow::Result<Walk> {
    let self_gender: Gender = cli.self_gender.parse().context("invalid --self")?;
    let mut walk = Walk::new(self_gender);
    for arg in &cli.steps {
        for step in parse_path(arg).with_context(|| format!("invalid path `{arg}`"))? {
            walk.push(step);
        }
    }
    Ok(walk)
}

fn print_resolution(cli: &Cli, walk: &Walk, resolution: &Resolution) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let report = Report {
                self_gender: walk.self_gender(),
                steps: walk.steps(),
                trace: &resolution.trace,
                term: resolution.term,
                label: resolution.term.to_string(),
            };
            let text = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{text}");
        }
        OutputFormat::Text => {
            if cli.trace {
                print_trace(walk.steps(), &resolution.trace);
            }
            match resolution.term.anchor() {
                Some(anchor) if anchor != AgeRef::Self_ => {
                    println!("{} (relative to {})", resolution.term, anchor.as_str())
                }
                _ => println!("{}", resolution.term),
            }
        }
    }
    Ok(())
}

fn print_trace(steps: &[Step], trace: &[Position]) {
    for (i, p) in trace.iter().enumerate() {
        let via = match i.checked_sub(1).and_then(|j| steps.get(j)) {
            Some(step) => step.to_string(),
            None => "self".to_string(),
        };
        println!(
            "{i:>3}  {via:<16} column={:?} row={:>2} gender={:<7} anchor={:<7} direct={}",
            p.column,
            p.row,
            p.gender.as_str(),
            p.age_ref.as_str(),
            p.no_sibling_in_generation
        );
    }
}
