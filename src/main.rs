//! fifty-fifty: 50/50 raffle command line interface
//!
//! Keeps a participant roster in a JSON file and draws contribution-weighted
//! winners from it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fifty_fifty::report::{render_result, render_roster, HOW_IT_WORKS};
use fifty_fifty::{
    import_file, import_reader, parse_amount, parse_line, JsonFileStore, Participant,
    ParticipantField, RaffleStore, Roster, SelectionModel,
};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// 50/50 Raffle
///
/// Collects contributions, imports free-text entry lists, and draws a winner
/// who takes half the pool. The other half goes to charity.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Roster file holding participants and the draw counter
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "FIFTY_FIFTY_STORE",
        default_value = "raffle.json"
    )]
    store: PathBuf,

    /// Enable verbose logging (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Dry run - apply the command but don't save the roster
    #[arg(long, global = true, default_value_t = false)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add one participant from separate fields
    Add {
        /// Participant name
        name: String,

        /// Contribution, e.g. 25 or 12.50
        amount: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Add one participant from a free-text line, e.g. "Jane Smith jane@x.org $20"
    Parse {
        line: String,
    },

    /// Bulk import one participant per line from a file (or stdin)
    Import {
        /// Input file; omit or pass "-" to read stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show the roster
    List,

    /// Change one field of a participant
    Edit {
        /// Position as shown by `list`
        index: usize,

        /// name, email, phone or amount
        field: ParticipantField,

        value: String,
    },

    /// Delete a participant
    Remove {
        /// Position as shown by `list`
        index: usize,
    },

    /// Draw a winner
    Draw {
        /// Selection model: proportional (per cent) or tickets (per whole unit)
        #[arg(long, default_value_t = SelectionModel::Proportional)]
        model: SelectionModel,

        /// Seed the random generator for a reproducible draw
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Remove all participants and reset the draw counter
    Clear,

    /// Explain the raffle rules
    HowItWorks,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity level
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("fifty-fifty v{}", env!("CARGO_PKG_VERSION"));
    debug!("Store: {:?}", args.store);

    let store = JsonFileStore::new(&args.store);
    let mut roster = Roster::from_state(
        store
            .load()
            .with_context(|| format!("Failed to load roster from {:?}", args.store))?,
    );

    let persist = run(args.command, &mut roster)?;

    if args.dry_run && persist != Persist::Nothing {
        info!("Dry run complete - roster not saved");
        return Ok(());
    }

    match persist {
        Persist::Save => store
            .save(roster.state())
            .with_context(|| format!("Failed to save roster to {:?}", args.store))?,
        Persist::Clear => store
            .clear()
            .with_context(|| format!("Failed to clear {:?}", args.store))?,
        Persist::Nothing => {}
    }

    Ok(())
}

/// What to do with the store once a command has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persist {
    Save,
    Clear,
    Nothing,
}

/// Execute one subcommand against the loaded roster
fn run(command: Command, roster: &mut Roster) -> Result<Persist> {
    match command {
        Command::Add {
            name,
            amount,
            email,
            phone,
        } => {
            let amount = parse_amount(&amount).context("Invalid amount")?;
            let participant =
                Participant::new(name, email, phone, amount).context("Invalid participant")?;
            println!("Added {}", participant.name);
            roster.add(participant);
            Ok(Persist::Save)
        }

        Command::Parse { line } => {
            let participant = match parse_line(&line) {
                Ok(p) => p,
                Err(e) => {
                    error!("Could not parse {:?}: {}", line, e);
                    anyhow::bail!("Could not parse entry: {}", e);
                }
            };
            println!(
                "Added {} (${})",
                participant.name,
                fifty_fifty::format_money(participant.amount)
            );
            roster.add(participant);
            Ok(Persist::Save)
        }

        Command::Import { input } => {
            let outcome = match input {
                Some(path) if path.as_os_str() != "-" => {
                    if !path.exists() {
                        error!("Input file not found: {:?}", path);
                        anyhow::bail!("Input file not found: {:?}", path);
                    }
                    import_file(&path)
                }
                _ => import_reader(std::io::stdin().lock()),
            };

            // A failed batch leaves the roster untouched
            let outcome = outcome.context("Import aborted, no entries added")?;
            let imported = outcome.stats.imported;
            roster.extend(outcome.participants);
            println!("Imported {} participants", imported);
            if imported > 0 {
                Ok(Persist::Save)
            } else {
                Ok(Persist::Nothing)
            }
        }

        Command::List => {
            print!("{}", render_roster(roster.participants(), roster.draw_count()));
            Ok(Persist::Nothing)
        }

        Command::Edit {
            index,
            field,
            value,
        } => {
            let position = to_position(index)?;
            roster
                .edit(position, field, &value)
                .with_context(|| format!("Failed to edit entry {}", index))?;
            println!("Updated {} of entry {}", field, index);
            Ok(Persist::Save)
        }

        Command::Remove { index } => {
            let position = to_position(index)?;
            let removed = roster
                .remove(position)
                .with_context(|| format!("Failed to remove entry {}", index))?;
            println!("Removed {}", removed.name);
            Ok(Persist::Save)
        }

        Command::Draw { model, seed, json } => {
            let mut rng = match seed {
                Some(seed) => {
                    debug!("Seeded draw: {}", seed);
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };

            let result = roster
                .run_draw(model, &mut rng)
                .context("Draw failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render_result(&result, roster.draw_count()));
            }
            Ok(Persist::Save)
        }

        Command::Clear => {
            roster.clear();
            println!("Cleared all participants");
            Ok(Persist::Clear)
        }

        Command::HowItWorks => {
            print!("{}", HOW_IT_WORKS);
            Ok(Persist::Nothing)
        }
    }
}

/// CLI positions are 1-based
fn to_position(index: usize) -> Result<usize> {
    match index.checked_sub(1) {
        Some(position) => Ok(position),
        None => anyhow::bail!("Entry numbers start at 1"),
    }
}
