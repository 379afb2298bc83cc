mod cache;
mod decorate;
mod models;
mod selectors;
mod state;
mod utils;

use selectors::Selectors;
use tracing_subscriber::EnvFilter;

fn print_usage(bin: &str) {
    eprintln!("Usage:");
    eprintln!("  {} <state.json> [--export <out.json>]", bin);
    eprintln!();
    eprintln!("  <state.json>     → application state snapshot to derive views from");
    eprintln!("  --export         → also write the decorated trades to <out.json>");
    eprintln!();
    eprintln!("  Example:");
    eprintln!("    cargo run --release -- state.json --export trades.json");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw_args: Vec<String> = std::env::args().collect();

    // Parse the snapshot path and the optional --export flag
    let mut snapshot_path: Option<String> = None;
    let mut export_path: Option<String> = None;
    let mut i = 1;
    while i < raw_args.len() {
        if raw_args[i] == "--export" {
            i += 1;
            if i >= raw_args.len() {
                eprintln!("--export requires a value");
                std::process::exit(1);
            }
            export_path = Some(raw_args[i].clone());
        } else if snapshot_path.is_none() {
            snapshot_path = Some(raw_args[i].clone());
        } else {
            print_usage(&raw_args[0]);
            std::process::exit(1);
        }
        i += 1;
    }

    let Some(snapshot_path) = snapshot_path else {
        print_usage(&raw_args[0]);
        std::process::exit(1);
    };

    let snapshot = cache::load_state(&snapshot_path)?;
    let mut selectors = Selectors::new();

    println!("account:              {}", selectors.account(&snapshot));
    println!("token loaded:         {}", selectors.token_loaded(&snapshot));
    println!("exchange loaded:      {}", selectors.exchange_loaded(&snapshot));
    println!("contracts loaded:     {}", selectors.contracts_loaded(&snapshot));
    println!(
        "filled orders loaded: {}",
        selectors.filled_orders_loaded(&snapshot)
    );
    println!();

    let trades = selectors.filled_orders(&snapshot);
    if trades.is_empty() {
        println!("No trades.");
    } else {
        println!("{:<20} {:>14} {:>12}  trend", "time", "amount", "price");
        for trade in &trades {
            println!(
                "{:<20} {:>14.4} {:>12.5}  {}",
                trade.decorated.formatted_timestamp,
                trade.decorated.token_amount,
                trade.token_price(),
                trade.token_price_class.css_class(),
            );
        }
        println!();
        println!("{} trade(s).", trades.len());
    }

    if let Some(path) = export_path {
        cache::save_to_file(&trades, &path)?;
        eprintln!("Exported {} trade(s) to {}", trades.len(), path);
    }

    Ok(())
}
