use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::json;

use baseball_records::{
    args::{Args, Command},
    logging,
    records::{Outcome, RecordError, RecordStore, Statistics},
    storage::{FilePersistence, default_data_dir},
    variant::Variant,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let _guard = logging::init(&data_dir)?;

    let provider = FilePersistence::new(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    let mut store = RecordStore::load(provider);

    match args.command {
        Command::Submit { variant, attempts } => submit(&mut store, variant, attempts, args.json),
        Command::Leaderboard { variant } => {
            let board = store.leaderboard(&variant);
            if args.json {
                return print_json(&board);
            }
            println!("{} ({})", variant.label(), variant);
            if board.is_empty() {
                println!("  no records yet");
            }
            for entry in board {
                println!("{:>3}. {:>3} attempts  {}", entry.rank, entry.attempts, entry.date);
            }
            Ok(())
        }
        Command::Stats { variant: Some(variant) } => {
            let stats = store.statistics(&variant);
            if args.json {
                return print_json(&stats);
            }
            print_statistics(&variant, &stats);
            Ok(())
        }
        Command::Stats { variant: None } => {
            let all = store.all_statistics();
            if args.json {
                return print_json(&all);
            }
            println!("games: {}  overall average: {:.1}", all.total_games, all.overall_average);
            for (variant, entry) in &all.per_variant_stats {
                print_statistics(variant, &entry.stats);
            }
            Ok(())
        }
        Command::Recent { limit } => {
            let recent = store.recent_records(limit);
            if args.json {
                return print_json(&recent);
            }
            for entry in recent {
                println!(
                    "{}  {:<20} {:>3} attempts",
                    entry.record.display_date(),
                    entry.variant_name,
                    entry.record.attempts
                );
            }
            Ok(())
        }
        Command::Monthly => {
            let monthly = store.monthly_stats();
            if args.json {
                return print_json(&monthly);
            }
            for (month, count) in monthly {
                println!("{month}  {count}");
            }
            Ok(())
        }
    }
}

fn submit(
    store: &mut RecordStore<FilePersistence>,
    variant: Variant,
    attempts: u32,
    as_json: bool,
) -> Result<()> {
    let outcome = match store.submit_result(variant.clone(), attempts) {
        Ok(outcome) => outcome,
        Err(e @ RecordError::Unsaved { .. }) => {
            return Err(e).context("the record could not be saved, it will be lost on exit");
        }
        Err(e) => return Err(e.into()),
    };

    if as_json {
        return print_json(&json!({
            "isNewRecord": outcome.is_new_record(),
            "rank": outcome.rank(),
        }));
    }

    match outcome {
        Outcome::NewRecord { rank } => {
            println!("New record! {} attempts is #{} on {}", attempts, rank, variant.label())
        }
        Outcome::NotQualified => println!("{} attempts did not make the top 10", attempts),
    }
    Ok(())
}

fn print_statistics(variant: &Variant, stats: &Statistics) {
    println!(
        "{:<20} records: {:>2}  best: {:>3}  average: {:>5.1}  last place set: {}",
        variant.label(),
        stats.total_records,
        stats.best_record,
        stats.average_attempts,
        stats.recent_record
    );
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
