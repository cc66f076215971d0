use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tally::banner::{BannerInfo, print_banner, print_session_summary};
use tally::commands::{CommandRegistry, CommandResult, SessionInfo, StateChange};
use tally::config::{Config, STEPS_KEY};
use tally::consts::default_db_path;
use tally::engine::calculator::Calculator;
use tally::session::Session;
use tally::tape::Tape;
use tally::tape::sqlite::SqliteTape;

#[derive(Parser)]
#[command(name = "tally", version, about = "A pocket calculator for the terminal.")]
struct Cli {
    /// SQLite database for the tape and settings (use :memory: for ephemeral)
    #[arg(short, long)]
    db: Option<String>,

    /// Don't record computations on the tape
    #[arg(long, default_value_t = false)]
    no_tape: bool,

    /// Print the display after every key
    #[arg(short, long, default_value_t = false)]
    steps: bool,

    /// Log every key at debug level
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Press a line of keys, print the display, and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let db = match cli.db {
        Some(db) => db,
        None => prepare_default_db()?,
    };
    let config = Config::open(&db)?;

    let tape: Option<Box<dyn Tape>> = if cli.no_tape {
        None
    } else {
        Some(Box::new(SqliteTape::new(&db)?))
    };
    let tape_label = match (&tape, db.as_str()) {
        (None, _) => "off".to_string(),
        (Some(_), ":memory:") => "ephemeral".to_string(),
        (Some(_), path) => path.to_string(),
    };

    let mut session = Session::new(Box::new(Calculator::new()), tape);
    let mut steps = cli.steps || config.get_bool(STEPS_KEY)?.unwrap_or(false);

    // Single line mode
    if let Some(keys) = cli.run {
        match session.feed(&keys, |_, _| {}).await {
            Ok(display) => println!("{display}"),
            Err(e) => anyhow::bail!(e),
        }
        return Ok(());
    }

    print_banner(&BannerInfo {
        tape: &tape_label,
        steps,
    });
    info!(db = %db, "session started");

    let commands = CommandRegistry::new();

    // REPL: async stdin, so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\ntally> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let info = SessionInfo {
            engine: session.engine(),
            tape: session.tape(),
            config: Some(&config),
            steps,
        };
        match commands.dispatch(line, &info).await {
            CommandResult::Handled => continue,
            CommandResult::StateChanged(StateChange::Steps(value)) => {
                steps = value;
                continue;
            }
            CommandResult::Quit => break,
            CommandResult::NotACommand => {}
        }

        let show_steps = steps;
        let result = session
            .feed(line, |input, display| {
                if show_steps {
                    println!("  {input:?}  →  {display}");
                }
            })
            .await;
        match result {
            Ok(display) => println!("\n= {display}"),
            Err(e) => eprintln!("  ✗ {e}"),
        }
    }

    info!(computations = session.computations(), "session ended");
    print_session_summary(session.computations());
    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or everything from this
/// crate with `--verbose`. Logs go to stderr so the display stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "tally=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

/// Resolve `~/.tally/tally.db`, creating the directory if needed.
fn prepare_default_db() -> anyhow::Result<String> {
    let path: PathBuf = default_db_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    path.to_str()
        .map(str::to_string)
        .context("database path is not valid UTF-8")
}
