//! Kriegsspiel - Umpire Console
//!
//! Line-oriented front end for the umpire engine: load a force list, paint
//! terrain, hand out orders and resolve turns.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kriegsspiel::battle::{TerrainKind, Umpire, ViewMode};
use kriegsspiel::core::error::Result;
use kriegsspiel::core::{EngineConfig, Side, UnitId};

/// Umpire console for a two-sided hex wargame
#[derive(Parser, Debug)]
#[command(name = "kriegsspiel")]
#[command(about = "Resolve hex wargame turns from free-text orders")]
struct Args {
    /// Force list to load at startup (JSON array of units)
    #[arg(long)]
    units: Option<PathBuf>,

    /// Engine config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side whose spotting is computed when resolving without an argument
    #[arg(long, default_value = "Blue")]
    side: Side,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kriegsspiel=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let mut umpire = Umpire::new(config);

    if let Some(path) = &args.units {
        let json = fs::read_to_string(path)?;
        let count = umpire.import_units(&json)?;
        println!("Loaded {} units from {}", count, path.display());
    }

    println!("\n=== KRIEGSSPIEL UMPIRE ===");
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if let Err(e) = run_command(&mut umpire, input, args.side) {
            println!("Error: {}", e);
        }
    }

    println!("\nFinal state: {} units, {} log entries.", umpire.units().len(), umpire.log().len());
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  import <file>            - Replace the force list from a JSON file");
    println!("  place <hex> <side>       - Place a new unit");
    println!("  terrain <hex> <kind>     - Assign plain/hill/forest/river/town");
    println!("  orders <side> <text>     - Give the same order to every unit of a side");
    println!("  order <unit id> = <text> - Give an order to one unit");
    println!("  resolve [side]           - Resolve the turn, spotting for a side");
    println!("  view [umpire|blue|red]   - List visible units");
    println!("  board                    - List terrain assignments");
    println!("  log                      - Show the turn log, newest first");
    println!("  export                   - Print the roster as JSON");
    println!("  help                     - Show this list");
    println!("  quit / q                 - Exit");
    println!();
}

fn run_command(umpire: &mut Umpire, input: &str, default_side: Side) -> Result<()> {
    let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
    let rest = rest.trim();

    match command {
        "help" => print_help(),
        "import" => {
            let json = fs::read_to_string(rest)?;
            let count = umpire.import_units(&json)?;
            println!("Loaded {} units.", count);
        }
        "place" => {
            let Some((hex, side)) = rest.split_once(' ') else {
                println!("Usage: place <hex> <side>");
                return Ok(());
            };
            let Some(side) = parse_side(side.trim()) else {
                return Ok(());
            };
            let id = umpire.place_unit(hex, side)?;
            println!("Placed {} at {}", id, hex);
        }
        "terrain" => {
            let Some((hex, kind)) = rest.split_once(' ') else {
                println!("Usage: terrain <hex> <kind>");
                return Ok(());
            };
            match kind.trim().parse::<TerrainKind>() {
                Ok(kind) => {
                    umpire.assign_terrain(hex, kind)?;
                    println!("{} is now {}", hex, kind);
                }
                Err(e) => println!("{}", e),
            }
        }
        "orders" => {
            let Some((side, text)) = rest.split_once(' ') else {
                println!("Usage: orders <side> <text>");
                return Ok(());
            };
            let Some(side) = parse_side(side) else {
                return Ok(());
            };
            let count = umpire.submit_orders(side, text.trim());
            println!("Orders given to {} {} units.", count, side);
        }
        "order" => {
            let Some((id, text)) = rest.split_once('=') else {
                println!("Usage: order <unit id> = <text>");
                return Ok(());
            };
            umpire.assign_order(&UnitId::new(id.trim()), text.trim())?;
            println!("Order recorded.");
        }
        "resolve" => {
            let side = if rest.is_empty() {
                default_side
            } else {
                match parse_side(rest) {
                    Some(side) => side,
                    None => return Ok(()),
                }
            };
            let result = umpire.resolve_turn(side);
            for line in &result.log_entries {
                println!("  {}", line);
            }
        }
        "view" => {
            let mode = match rest.to_ascii_lowercase().as_str() {
                "" | "umpire" => ViewMode::Umpire,
                other => match parse_side(other) {
                    Some(side) => ViewMode::Player(side),
                    None => return Ok(()),
                },
            };
            let units = umpire.view(mode);
            if units.is_empty() {
                println!("No units visible");
            }
            for unit in units {
                println!(
                    "  {:<20} {:<4} {:<5} str {:<5} morale {:<3} {:?}{}  orders: {}",
                    unit.id,
                    unit.side,
                    unit.position,
                    unit.strength,
                    unit.morale,
                    unit.cohesion,
                    if unit.spotted { " (spotted)" } else { "" },
                    unit.orders.as_deref().unwrap_or("None"),
                );
            }
        }
        "board" => {
            for (label, kind) in umpire.board().assigned() {
                println!("  {:<5} {}", label, kind);
            }
        }
        "log" => {
            if umpire.log().is_empty() {
                println!("No events yet");
            }
            for entry in umpire.log().newest_first() {
                println!("  {}", entry);
            }
        }
        "export" => println!("{}", umpire.export_units()?),
        _ => println!("Unknown command. Type 'help' for the list."),
    }

    Ok(())
}

fn parse_side(text: &str) -> Option<Side> {
    match text.parse::<Side>() {
        Ok(side) => Some(side),
        Err(e) => {
            println!("{}", e);
            None
        }
    }
}
