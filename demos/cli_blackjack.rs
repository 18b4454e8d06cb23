//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_round::{
    ActionSource, ActionSourceError, Card, ConsoleActions, InvalidActionError, Outcome,
    Participant, PlayError, Rank, Role, Round, RoundOptions, RoundResult, Suit, TurnView,
};

/// Prints the table before every prompt, then reads the answer from stdin.
struct TableActions {
    console: ConsoleActions<io::StdinLock<'static>, io::Stdout>,
}

impl ActionSource for TableActions {
    fn next_action(&mut self, view: &TurnView<'_>) -> Result<String, ActionSourceError> {
        println!();
        println!(
            "Dealer: {} (showing {})",
            format_cards(view.dealer_cards, true),
            view.dealer_score
        );
        println!(
            "{}: {} (value {})",
            role_label(view.role),
            format_cards(view.cards, false),
            view.score
        );
        self.console.next_action(view)
    }

    fn invalid(&mut self, err: &InvalidActionError) {
        self.console.invalid(err);
    }
}

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let Some(players) = prompt_players() else {
        return;
    };

    let options = RoundOptions::default().with_players(players);

    loop {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let mut round = match Round::new(options, seed) {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        // The stdin lock is released before the next prompt below.
        let outcome = round.play(&mut TableActions {
            console: ConsoleActions::stdio(),
        });

        match outcome {
            Ok(result) => {
                print_table_final(&round);
                print_results(&result);
            }
            Err(PlayError::Source(_)) => {
                println!("\nInput closed. Goodbye.");
                return;
            }
            Err(err) => {
                println!("Round aborted: {err}");
            }
        }

        match prompt_line("\nPlay another round? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
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

fn prompt_players() -> Option<u8> {
    loop {
        let input = prompt_line("Number of players (1-7): ");
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value @ 1..=7) => return Some(value),
            _ => println!("Please enter a number from 1 to 7."),
        }
    }
}

fn print_table_final(round: &Round) {
    println!("\nDeck: {} cards remaining", round.cards_remaining());
    println!(
        "Dealer: {} (value {})",
        format_cards(round.dealer().cards(), false),
        round.dealer().score()
    );
    for player in round.players() {
        print_participant(player);
    }
}

fn print_participant(participant: &Participant) {
    println!(
        "{}: {} | value {} | {:?}",
        role_label(participant.role()),
        format_cards(participant.cards(), false),
        participant.score(),
        participant.status()
    );
}

fn print_results(result: &RoundResult) {
    println!();
    for player in &result.players {
        let text = match player.outcome {
            Outcome::Win => colorize("wins", "32"),
            Outcome::Lose => colorize("loses", "31"),
            Outcome::Draw => colorize("draws", "33"),
        };
        println!("Player {} {text} with {}", player.player, player.score);
    }
}

fn role_label(role: Role) -> String {
    match role {
        Role::Player(number) => format!("Player {number}"),
        Role::Dealer => "Dealer".to_string(),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card], hole_hidden: bool) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts: Vec<String> = cards.iter().map(format_card).collect();
    if hole_hidden {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("\u{2665}", "31"),
        Suit::Diamonds => ("\u{2666}", "31"),
        Suit::Clubs => ("\u{2663}", "32"),
        Suit::Spades => ("\u{2660}", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.value().to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
