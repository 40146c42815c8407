//! Simple interactive CLI mode
//!
//! Text-based play loop without TUI. The round timer is advanced by converting the wall time
//! spent at each prompt into one-second ticks.

use crate::game::{
    Advance, GameError, GuessOutcome, Mode, Resolution, Session, SessionConfig, UpgradeKind,
};
use crate::output::{print_banner, print_round, print_summary, print_uses, print_word_header};
use crate::profile::Profile;
use crate::wordlists::WordCorpus;
use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    Use(UpgradeKind),
    Reroll,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line: slash commands for upgrades and control, anything else is a guess
#[must_use]
pub fn parse_command(input: &str) -> LineCommand {
    let input = input.trim();
    let Some(command) = input.strip_prefix('/') else {
        return LineCommand::Guess(input.to_lowercase());
    };
    match command.to_ascii_lowercase().as_str() {
        "super" | "s" => LineCommand::Use(UpgradeKind::SuperHint),
        "pos" | "positive" | "p" => LineCommand::Use(UpgradeKind::PositiveHint),
        "neg" | "negative" | "n" => LineCommand::Use(UpgradeKind::NegativeHint),
        "bonus" | "b" => LineCommand::Use(UpgradeKind::BonusGuess),
        "reroll" | "r" => LineCommand::Reroll,
        "help" | "h" | "?" => LineCommand::Help,
        "quit" | "q" | "exit" => LineCommand::Quit,
        other => LineCommand::Unknown(other.to_string()),
    }
}

/// Whole seconds elapsed since `clock`; the clock advances by exactly that much
fn take_seconds(clock: &mut Instant) -> u64 {
    let seconds = clock.elapsed().as_secs();
    *clock += Duration::from_secs(seconds);
    seconds
}

/// Feed the wall time spent at the prompt to the round timer
fn catch_up(
    session: &mut Session<'_>,
    profile: &mut Profile,
    clock: &mut Instant,
) -> Result<Option<Resolution>, GameError> {
    for _ in 0..take_seconds(clock) {
        if let Some(resolution) = session.tick(profile)? {
            return Ok(Some(resolution));
        }
    }
    Ok(None)
}

enum Flow {
    Continue,
    Done,
}

fn print_help() {
    println!("\nType a word to guess it. Commands:");
    println!("  /super   Super Hint: reveal a letter in place");
    println!("  /pos     Positive Hint: reveal a letter in the word");
    println!("  /neg     Negative Hint: reveal a letter NOT in the word");
    println!("  /bonus   Bonus Guess: one more guess for this word");
    println!("  /reroll  Word Reroll: swap this word for a new one");
    println!("  /quit    Leave the session (no gold is paid)\n");
}

fn show_word(session: &Session<'_>) {
    print_word_header(session);
    print_round(session.round());
    print_uses(session);
}

/// Show a rejected action; store failures are fatal
fn report_error(error: GameError) -> Result<()> {
    if matches!(error, GameError::Store(_)) {
        return Err(error.into());
    }
    if error.is_silent() {
        println!("{}", error.to_string().bright_black());
    } else {
        println!("{} {}", "❌".red(), error.to_string().red());
    }
    Ok(())
}

fn after_resolution(
    session: &mut Session<'_>,
    profile: &mut Profile,
    resolution: Resolution,
) -> Result<Flow> {
    let round = session.round();
    match resolution {
        Resolution::Solved => {
            print_round(round);
            println!(
                "\n{} Solved {} in {} {}!",
                "🎉".bright_green(),
                round.target().text().to_uppercase().bright_green().bold(),
                round.guess_count(),
                if round.guess_count() == 1 { "guess" } else { "guesses" }
            );
        }
        Resolution::Failed => {
            print_round(round);
            println!(
                "\n{} The word was {}",
                "❌".red(),
                round.target().text().to_uppercase().bright_red().bold()
            );
        }
        Resolution::ExtraLifeUsed { lives_left } => {
            println!(
                "\n{} Extra life used! {lives_left} left. Try the same word again.",
                "❤".bright_red()
            );
            show_word(session);
            return Ok(Flow::Continue);
        }
        Resolution::GameOver(summary) => {
            print_summary(&summary);
            return Ok(Flow::Done);
        }
    }

    get_user_input("Press Enter to continue")?;
    match session.next_word(profile)? {
        Advance::NextWord => {
            show_word(session);
            Ok(Flow::Continue)
        }
        Advance::Finished(summary) => {
            print_summary(&summary);
            Ok(Flow::Done)
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or if progress cannot be saved.
pub fn run_simple(
    mode: Mode,
    config: SessionConfig,
    corpus: &WordCorpus,
    profile: &mut Profile,
) -> Result<()> {
    let title = match mode {
        Mode::Run => "wordrun - Run Mode",
        Mode::Endless => "wordrun - Endless Mode",
    };
    print_banner(title);
    println!(
        "Gold: {}   Type /help for commands.",
        profile.player().gold.to_string().bright_yellow().bold()
    );

    let mut session = Session::start(mode, config, corpus, profile, StdRng::from_os_rng())?;
    show_word(&session);
    let mut clock = Instant::now();

    loop {
        let Some(input) = get_user_input("Guess")? else {
            session.quit(profile)?;
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        if let Some(resolution) = catch_up(&mut session, profile, &mut clock)? {
            println!("\n{} Time's up!", "⏰".bright_red());
            match after_resolution(&mut session, profile, resolution)? {
                Flow::Continue => {
                    clock = Instant::now();
                    continue;
                }
                Flow::Done => return Ok(()),
            }
        }

        match parse_command(&input) {
            LineCommand::Guess(word) if word.is_empty() => {}
            LineCommand::Guess(word) => match session.submit_guess(profile, &word) {
                Ok(GuessOutcome::Continue) => print_round(session.round()),
                Ok(GuessOutcome::Resolved(resolution)) => {
                    if let Flow::Done = after_resolution(&mut session, profile, resolution)? {
                        return Ok(());
                    }
                    clock = Instant::now();
                }
                Err(e) => report_error(e)?,
            },
            LineCommand::Use(kind) => match session.use_upgrade(profile, kind) {
                Ok(hint) => {
                    println!("{} {hint}", "💡".bright_yellow());
                    print_uses(&session);
                }
                Err(e) => report_error(e)?,
            },
            LineCommand::Reroll => match session.reroll(profile) {
                Ok(()) => {
                    println!("{} New word!", "🎲".bright_cyan());
                    show_word(&session);
                    clock = Instant::now();
                }
                Err(e) => report_error(e)?,
            },
            LineCommand::Help => print_help(),
            LineCommand::Quit => {
                session.quit(profile)?;
                println!("\n👋 Thanks for playing! No gold is paid for an unfinished session.\n");
                return Ok(());
            }
            LineCommand::Unknown(command) => {
                println!("Unknown command /{command}. Type /help for commands.");
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
