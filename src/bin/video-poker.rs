use clap::{Parser, Subcommand};
use std::error::Error;
use std::process::ExitCode;
use video_poker::category::Category;
use video_poker::classifier::classify;
use video_poker::deck::Deck;
use video_poker::hand::Hand;
use video_poker::probability::{probabilities, probability};

#[derive(Parser)]
#[command(author, version, about = "Classify video-poker hands", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Classify one hand, e.g. `classify As Ks Qs Js Ts`", alias = "c")]
    Classify {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    #[command(about = "Print the probability of every hand category", alias = "t")]
    Table,
    #[command(
        about = "Deal random hands and compare observed frequencies to the table",
        alias = "s"
    )]
    Simulate {
        #[arg(long, default_value_t = 100_000)]
        hands: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn run_classify(cards: &[String]) -> Result<(), Box<dyn Error>> {
    let hand: Hand = cards.join(" ").parse()?;
    let category = classify(&hand);
    println!("{hand}: {category} ({}%)", probability(category));
    Ok(())
}

fn run_table() {
    for (category, p) in probabilities() {
        println!("{:<18}{:>12.6}%", category.name(), p);
    }
}

fn run_simulate(hands: u64, seed: u64) -> Result<(), Box<dyn Error>> {
    log::info!("dealing {hands} hands from seed {seed}");
    let mut tally = [0u64; Category::ALL.len()];
    for i in 0..hands {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed.wrapping_add(i));
        let hand: Hand = deck.deal_hand().ok_or("deck ran out of cards")?;
        tally[classify(&hand).ordinal() as usize] += 1;
    }
    println!("{:<18}{:>10}{:>12}{:>12}", "category", "count", "observed", "expected");
    for (category, expected) in probabilities() {
        let count = tally[category.ordinal() as usize];
        let observed = if hands == 0 { 0.0 } else { 100.0 * count as f64 / hands as f64 };
        println!("{:<18}{:>10}{:>11.4}%{:>11.4}%", category.name(), count, observed, expected);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let res = match cli.command {
        Command::Classify { cards } => run_classify(&cards),
        Command::Table => {
            run_table();
            Ok(())
        }
        Command::Simulate { hands, seed } => run_simulate(hands, seed),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
