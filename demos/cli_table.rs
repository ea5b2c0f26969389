//! CLI table demo: deals against the wall clock, one card at a time.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjtable::{
    CardDealt, Clock, GameState, Hand, RoundResult, Seat, SystemClock, Table, TableObserver,
    TableOptions,
};
use tracing_subscriber::EnvFilter;

/// Prints every card as it leaves the shoe.
struct Printer;

impl TableObserver for Printer {
    fn on_card_dealt(&mut self, dealt: &CardDealt) {
        let who = match dealt.seat {
            Seat::Player => "You draw",
            Seat::Dealer => "Dealer draws",
        };
        println!(
            "  {who} {:>2}  (slot {} of {}, score {})",
            dealt.card.label(),
            dealt.card_index + 1,
            dealt.total_cards,
            dealt.score
        );
    }

    fn on_round_over(&mut self, result: &RoundResult) {
        println!("\n{}\n", result.message());
    }

    fn on_shoe_reshuffled(&mut self, remaining: usize) {
        println!("  Shoe reshuffled ({remaining} cards).");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Blackjack table demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::with_observer(TableOptions::default(), seed, SystemClock::new(), Printer);

    if let Err(err) = table.start_round() {
        println!("Start error: {err}");
        return;
    }

    loop {
        run_until_idle(&mut table);

        match table.state() {
            GameState::PlayerTurn => {
                print_table(&table);
                let action = prompt_line("[h]it / [s]tand: ");
                let result = match action.as_str() {
                    "h" | "hit" => table.hit(),
                    "s" | "stand" => table.stand(),
                    "q" | "quit" => return,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };

                if let Err(err) = result {
                    println!("Ignored: {err}");
                }
            }
            GameState::GameOver => {
                print_table(&table);
                let input = prompt_line("Enter for the next round, 'q' to quit: ");
                if input == "q" || input == "quit" {
                    println!("Goodbye.");
                    return;
                }
                if let Err(err) = table.reset() {
                    println!("Reset error: {err}");
                }
            }
            GameState::Initial | GameState::Dealing | GameState::DealerTurn => {}
        }
    }
}

/// Sleeps until each pending event is due and dispatches it, stopping early
/// once the player may act.
fn run_until_idle<O: TableObserver>(table: &mut Table<SystemClock, O>) {
    while let Some(due) = table.next_due() {
        let now = table.clock().now();
        if due > now {
            thread::sleep(Duration::from_millis(due - now));
        }
        table.advance();

        if table.input_enabled() {
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table<O: TableObserver>(table: &Table<SystemClock, O>) {
    let remaining = table.shoe().remaining();
    println!("\nShoe: {remaining} cards remaining");
    println!("Dealer: {}", format_hand(table.dealer()));
    println!("You:    {}", format_hand(table.player()));
    println!();
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }

    let cards = hand
        .cards()
        .iter()
        .map(|card| card.label())
        .collect::<Vec<_>>()
        .join(" ");
    let soft = if hand.is_soft() && !hand.is_bust() {
        " soft"
    } else {
        ""
    };
    format!("{cards} | score {}{soft}", hand.score())
}
