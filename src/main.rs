use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use universle::io_utils::{dataset_cli_error, simple_cli_error, universle_cli_error, CliError};
use universle::{
    bearing, distance_miles, find_exact, suggest, Dataset, GameConfig, GameStatus, GuessRecord,
    Session, DEFAULT_MAX_ATTEMPTS, SUGGESTION_CAP,
};

/// Suggestions printed when a guess does not name a known institution.
const MISS_SUGGESTIONS: usize = 5;

#[derive(Parser)]
#[command(name = "universle")]
#[command(about = "Guess the university from distance and direction clues", long_about = None)]
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
    /// Play a game, reading one guess per line from stdin
    Play(PlayArgs),
    /// Distance and direction from one institution to another
    Distance(DistanceArgs),
    /// List institutions matching a partial name
    List(ListArgs),
}

#[derive(Args)]
struct DataArgs {
    /// Dataset file (.json or .csv); the built-in demo list is used if omitted
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Args)]
struct PlayArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Seed for target and hint selection
    #[arg(long)]
    seed: Option<u64>,

    /// Number of guesses allowed
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Print the finished session as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DistanceArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Institution to measure from
    from: String,

    /// Institution to measure toward
    to: String,
}

#[derive(Args)]
struct ListArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Partial name to filter by
    #[arg(long, default_value = "")]
    query: String,

    /// Maximum number of names to print
    #[arg(long, default_value_t = SUGGESTION_CAP)]
    limit: usize,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Distance(args) => distance(args),
        Commands::List(args) => list(args),
    }
}

fn load(data: &DataArgs) -> Result<Dataset, CliError> {
    let path = data.data.as_deref();
    Dataset::load_or_fallback(path)
        .map_err(|e| dataset_cli_error(path.unwrap_or(Path::new("<builtin>")), e))
}

fn print_guess(out: &mut impl Write, guess: &GuessRecord) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} miles {}",
        guess.candidate.name,
        guess.miles.round(),
        guess.direction
    )?;
    if let Some(hint) = &guess.hint {
        writeln!(out, "Hint: {}: {}", hint.key, hint.value)?;
    }
    Ok(())
}

fn play(args: PlayArgs) -> Result<(), CliError> {
    let dataset = load(&args.data)?;
    let config = GameConfig {
        max_attempts: args.attempts,
        seed: args.seed,
    };
    let mut session =
        Session::new(&config).map_err(|e| universle_cli_error("Invalid game settings", e))?;
    let mut rng = config.rng();
    session
        .initialize(dataset.institutions(), &mut rng)
        .map_err(|e| universle_cli_error("Cannot start game", e))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let write_err = |e: io::Error| simple_cli_error(&format!("Error writing output: {e}"));

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| simple_cli_error(&format!("Error reading input: {e}")))?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let Some(candidate) = find_exact(dataset.institutions(), query) else {
            writeln!(out, "Unknown institution: {query}").map_err(write_err)?;
            for s in suggest(dataset.institutions(), query, MISS_SUGGESTIONS) {
                writeln!(out, "  did you mean: {}", s.name).map_err(write_err)?;
            }
            continue;
        };
        if let Some(guess) = session.submit_guess(candidate, &mut rng) {
            print_guess(&mut out, guess).map_err(write_err)?;
        }
        let left = session.attempts_left();
        if session.is_over() {
            break;
        }
        writeln!(
            out,
            "{} attempt{} left",
            left,
            if left == 1 { "" } else { "s" }
        )
        .map_err(write_err)?;
    }

    let answer = session.target().map(|t| t.name.as_str()).unwrap_or("?");
    let verdict = match session.status() {
        GameStatus::Won => "Correct!",
        GameStatus::Lost => "Out of attempts.",
        GameStatus::Active => "Game abandoned.",
    };
    writeln!(out, "{verdict} The answer was {answer}.").map_err(write_err)?;

    if args.json {
        let report = serde_json::json!({
            "status": session.status(),
            "attempts_left": session.attempts_left(),
            "session": &session,
        });
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| simple_cli_error(&format!("Error encoding session: {e}")))?;
        writeln!(out, "{text}").map_err(write_err)?;
    }
    Ok(())
}

fn distance(args: DistanceArgs) -> Result<(), CliError> {
    let dataset = load(&args.data)?;
    let lookup = |name: &str| {
        find_exact(dataset.institutions(), name)
            .ok_or_else(|| simple_cli_error(&format!("Unknown institution: {name}")))
    };
    let from = lookup(&args.from)?;
    let to = lookup(&args.to)?;
    println!(
        "{} miles {}",
        distance_miles(from.location, to.location).round(),
        bearing(from.location, to.location)
    );
    Ok(())
}

fn list(args: ListArgs) -> Result<(), CliError> {
    let dataset = load(&args.data)?;
    for inst in suggest(dataset.institutions(), &args.query, args.limit) {
        match (&inst.city, &inst.state) {
            (Some(city), Some(state)) => println!("{} ({city}, {state})", inst.name),
            (None, Some(state)) => println!("{} ({state})", inst.name),
            _ => println!("{}", inst.name),
        }
    }
    Ok(())
}
