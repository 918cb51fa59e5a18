use std::io::Read;
use std::process;

use box_game::{parse_token, parse_tokens, GameError, GameSession, SessionConfig};
use clap::Parser;
use tracing::{error, Level};

/// Play the box game over a list of token weights.
///
/// Tokens come from the command line, or from stdin (whitespace or comma
/// separated) when none are given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Token weights, consumed one per turn.
    #[arg(value_parser = parse_token)]
    tokens: Vec<f64>,

    /// Print the full outcome as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print one line per turn.
    #[arg(long, default_value_t = false)]
    history: bool,

    /// Log every turn.
    #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

fn read_stdin_tokens() -> Result<Vec<f64>, GameError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    parse_tokens(&input)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let tokens = if cli.tokens.is_empty() {
        read_stdin_tokens().unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        })
    } else {
        cli.tokens.clone()
    };

    // The score line is printed below; skip the session's own log of it.
    let config = SessionConfig::new()
        .with_history(cli.json || cli.history)
        .with_status_report(false);
    let mut session = GameSession::new(config);
    session.run(tokens);
    let outcome = session.finish();

    if cli.history {
        for record in &outcome.history {
            println!("{record}");
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
    } else {
        let (a, b) = outcome.score_pair();
        println!("Scores: player A {a}, player B {b} ({})", outcome.result);
    }
}
