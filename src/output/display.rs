//! Display functions for command results

use super::formatters::{colored_guess, colored_keyboard, create_progress_bar};
use crate::commands::{ShopOffer, StatsReport};
use crate::game::{Mode, Round, Session, Summary, UpgradeKind};
use colored::Colorize;

/// Print a boxed banner
pub fn print_banner(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{title:^62}║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

/// Header line for the word in play
pub fn print_word_header(session: &Session<'_>) {
    let round = session.round();
    let position = session.word_count().map_or_else(
        || format!("Word {}", session.word_number()),
        |count| format!("Word {}/{count}", session.word_number()),
    );
    println!("\n{}", "─".repeat(60).cyan());
    print!("{}", position.bright_cyan().bold());
    print!("  ({} letters)", round.target().len());
    if round.is_boss() {
        print!("  {}", "BOSS WORD".bright_red().bold());
    }
    if session.mode() == Mode::Endless {
        print!("  Lives: {}", session.extra_lives().to_string().bright_yellow());
    }
    println!();
    println!("{}", "─".repeat(60).cyan());
}

/// Board, keyboard and round status
pub fn print_round(round: &Round) {
    println!();
    for (guess, feedback) in round.guesses().iter().zip(round.feedback()) {
        println!("   {}", colored_guess(guess, &feedback));
    }
    for _ in 0..round.guesses_left() {
        println!("   {}", " _ ".repeat(round.target().len()).bright_black());
    }

    println!();
    for row in colored_keyboard(&round.keyboard()) {
        println!("   {row}");
    }

    println!();
    println!(
        "   Guesses left: {}",
        round.guesses_left().to_string().bright_yellow().bold()
    );
    if let Some(remaining) = round.timer().remaining() {
        let limit = crate::game::ROUND_SECONDS as usize;
        println!(
            "   Time:         [{}] {remaining}s",
            create_progress_bar(remaining as usize, limit, 20).green()
        );
    }
    for hint in round.hints() {
        println!("   {} {hint}", "💡".bright_yellow());
    }
}

/// Remaining uses of every activatable upgrade
pub fn print_uses(session: &Session<'_>) {
    let uses: Vec<String> = [
        (UpgradeKind::SuperHint, "/super"),
        (UpgradeKind::PositiveHint, "/pos"),
        (UpgradeKind::NegativeHint, "/neg"),
        (UpgradeKind::BonusGuess, "/bonus"),
        (UpgradeKind::WordReroll, "/reroll"),
    ]
    .into_iter()
    .filter(|&(kind, _)| session.uses().remaining(kind) > 0)
    .map(|(kind, command)| format!("{command} ×{}", session.uses().remaining(kind)))
    .collect();

    if !uses.is_empty() {
        println!("   Upgrades:     {}", uses.join("  ").bright_white());
    }
}

/// Session summary, printed when a run or endless session ends
pub fn print_summary(summary: &Summary) {
    let title = match summary.mode {
        Mode::Run => "R U N   C O M P L E T E",
        Mode::Endless => "G A M E   O V E R",
    };
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", format!("{title:^60}").bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    if let Some(word) = &summary.failed_word {
        println!(
            "\n  The word was {}",
            word.text().to_uppercase().bright_red().bold()
        );
    }

    println!("\n  Words:");
    for (i, record) in summary.words.iter().enumerate() {
        let mark = if record.solved {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        let boss = if record.boss {
            " (boss)".bright_red().to_string()
        } else {
            String::new()
        };
        println!(
            "    {}. {} {mark}{boss}",
            (i + 1).to_string().bright_black(),
            record.target.text().to_uppercase().bright_white().bold(),
        );
    }

    println!(
        "\n  Words solved:  {}",
        format!("{}/{}", summary.words_solved, summary.words_total).bright_cyan()
    );
    if summary.bosses_killed > 0 {
        println!("  Bosses beaten: {}", summary.bosses_killed);
    }
    println!(
        "  Gold earned:   {}",
        format!("+{}", summary.gold_earned).bright_yellow().bold()
    );
    if summary.new_best {
        println!("\n  {}", "🏆 New Best!".bright_yellow().bold());
    }
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print a statistics report
pub fn print_stats_report(report: &StatsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STATISTICS:".bright_cyan().bold(),
        report.view.title().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for section in &report.sections {
        println!("\n📊 {}", section.heading.bright_cyan().bold());
        for (label, value) in &section.rows {
            println!("   {:<26}{}", format!("{label}:"), value.bright_yellow());
        }
    }
    println!();
}

/// Print the shop listing
pub fn print_shop(offers: &[ShopOffer], gold: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {}   Gold: {}",
        "UPGRADE SHOP".bright_cyan().bold(),
        gold.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, offer) in offers.iter().enumerate() {
        let info = offer.kind.info();
        let price = if offer.is_maxed() {
            "MAXED".bright_black().to_string()
        } else if offer.affordable {
            format!("{} gold", info.cost).green().to_string()
        } else {
            format!("{} gold", info.cost).red().to_string()
        };
        println!(
            "\n  {} {}  [{}/{}]  {price}",
            format!("{i}.").bright_black(),
            info.name.bright_white().bold(),
            offer.level,
            info.max_level
        );
        println!("     {}", info.long_description);
    }
    println!("\nBuy with: wordrun buy <number or name>\n");
}

/// Print the result of a purchase
pub fn print_purchase(offer: &ShopOffer, gold: u32) {
    println!(
        "{} {} is now level {}/{}. {} gold left.",
        "✅".green(),
        offer.kind.to_string().bright_white().bold(),
        offer.level,
        offer.kind.max_level(),
        gold.to_string().bright_yellow()
    );
}

/// Print owned upgrades
pub fn print_inventory(owned: &[(UpgradeKind, u32)], gold: u32) {
    println!("\n{}", "INVENTORY".bright_cyan().bold());
    println!("Gold: {}\n", gold.to_string().bright_yellow().bold());
    if owned.is_empty() {
        println!("  No upgrades yet. Visit the shop!");
    }
    for (kind, level) in owned {
        println!(
            "  • {}  {}/{}",
            kind.to_string().bright_white(),
            level,
            kind.max_level()
        );
        println!("    {}", kind.info().description.bright_black());
    }
    println!();
}
