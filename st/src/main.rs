use clap::Parser;
use clap::error::ErrorKind;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, debug, info, warn};

use studytrack::ProgressStore;
use studytrack::cli::{Cli, Command};
use studytrack::config::Config;
use studytrack::report;

const BIN: &str = "st";

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) {
    // CLI --log-level > config file > WARN
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => s.parse::<LevelFilter>().unwrap_or_else(|_| {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
            LevelFilter::Warn
        }),
        None => LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();
    debug!("setup_logging: level={}", level);
}

fn run(cli: Cli) -> Result<()> {
    let (config, skipped) = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref());
    for warning in &skipped {
        warn!("{}", warning);
    }

    let state_file = cli.file.clone().unwrap_or_else(|| config.state_file.clone());
    let store = ProgressStore::open(&state_file);
    info!("studytrack starting with {}", state_file.display());

    match cli.command() {
        Command::Status => {
            let state = store.load().context("Failed to load progress")?;
            print!("{}", report::render_status(&state, &config.curriculum_name));
        }
        Command::Complete { kind, name } => {
            let added = store
                .mark_complete(*kind, name)
                .context(format!("Failed to mark {} '{}' as complete", kind, name))?;
            if added {
                println!("{} Marked {} '{}' as complete", "✅".green(), kind, name);
            } else {
                println!("{} {} '{}' was already complete", "✅".green(), kind, name.yellow());
            }
        }
        Command::Set { week, day } => {
            let (week, day) = store.set_position(week, day).context("Failed to set position")?;
            println!("📍 Set current position to Week {}, Day {}", week, day);
        }
        Command::Note { text } => {
            let note = store.add_note(&text.join(" ")).context("Failed to add note")?;
            println!("📝 Added note: {}", note.text);
        }
        Command::Resume => {
            let state = store.load().context("Failed to load progress")?;
            print!("{}", report::render_resume_guide(&state, &config.curriculum_root, BIN));
        }
    }

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return;
            }
            _ => {
                print!("{}", report::usage(BIN));
                return;
            }
        },
    };

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
