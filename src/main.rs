//! wordrun - CLI
//!
//! Roguelike Wordle with a TUI and a line-mode interface: fixed-length runs, endless mode,
//! and a gold-funded upgrade shop.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordrun::{
    commands::{build_report, buy, parse_view, run_simple, shop_offers},
    game::{Difficulty, Mode, Modifiers, SessionConfig, UpgradeKind},
    output::{print_inventory, print_purchase, print_shop, print_stats_report},
    profile::{FileStore, Profile},
    wordlists::WordCorpus,
};

#[derive(Parser)]
#[command(
    name = "wordrun",
    about = "Roguelike Wordle: runs, endless mode and an upgrade shop",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding saved stats, upgrades and gold
    #[arg(long, global = true, env = "WORDRUN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Load the four word lists from this directory instead of the built-in ones
    #[arg(long, global = true)]
    words_dir: Option<PathBuf>,

    /// Draw regular words from the full list (+1 gold per word)
    #[arg(long, global = true)]
    hard: bool,

    #[command(flatten)]
    modifiers: ModifierArgs,
}

/// Session modifiers
#[derive(Args, Clone, Copy)]
struct ModifierArgs {
    /// One more word per run
    #[arg(long, global = true)]
    extra_word: bool,

    /// One fewer guess per word
    #[arg(long, global = true)]
    fewer_guesses: bool,

    /// Add seven-letter boss words (+10 gold each)
    #[arg(long, global = true)]
    boss: bool,

    /// 60 second limit per word
    #[arg(long, global = true)]
    timer: bool,
}

impl From<ModifierArgs> for Modifiers {
    fn from(args: ModifierArgs) -> Self {
        Self {
            extra_word: args.extra_word,
            fewer_guesses: args.fewer_guesses,
            boss: args.boss,
            timer: args.timer,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start in endless mode
        #[arg(long)]
        endless: bool,
    },

    /// Simple CLI mode (line-based play without TUI)
    Simple {
        /// Play endless mode instead of a run
        #[arg(long)]
        endless: bool,
    },

    /// List upgrades, prices and your gold
    Shop,

    /// Buy one level of an upgrade
    Buy {
        /// Upgrade number (0-6) or name: guess, super, positive, negative, bonus, life, reroll
        upgrade: String,
    },

    /// Show owned upgrades
    Inventory,

    /// Show statistics
    Stats {
        /// normal, endless or total
        #[arg(default_value = "total")]
        view: String,
    },

    /// Erase all statistics, upgrades and gold
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { endless: false });

    // Log lines would tear the TUI's alternate screen
    let default_filter = if matches!(command, Commands::Play { .. }) {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(FileStore::default_dir);
    let mut profile = load_profile(&data_dir)?;
    let config = SessionConfig::new(
        cli.modifiers.into(),
        if cli.hard {
            Difficulty::Hard
        } else {
            Difficulty::Easy
        },
    );

    match command {
        Commands::Play { endless } => {
            let corpus = load_corpus(cli.words_dir.as_deref())?;
            run_play_command(&corpus, profile, config, endless)
        }
        Commands::Simple { endless } => {
            let corpus = load_corpus(cli.words_dir.as_deref())?;
            let mode = if endless { Mode::Endless } else { Mode::Run };
            run_simple(mode, config, &corpus, &mut profile)
        }
        Commands::Shop => {
            print_shop(&shop_offers(&profile), profile.player().gold);
            Ok(())
        }
        Commands::Buy { upgrade } => run_buy_command(&mut profile, &upgrade),
        Commands::Inventory => {
            print_inventory(&profile.inventory(), profile.player().gold);
            Ok(())
        }
        Commands::Stats { view } => {
            let Some(view) = parse_view(&view) else {
                bail!("unknown stats view '{view}', expected normal, endless or total");
            };
            print_stats_report(&build_report(profile.stats(), view));
            Ok(())
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("reset erases all progress; run again with --yes to confirm");
            }
            profile.reset().context("failed to save the reset profile")?;
            println!("All statistics, upgrades and gold have been reset.");
            Ok(())
        }
    }
}

fn load_profile(data_dir: &Path) -> Result<Profile> {
    log::debug!("profile directory: {}", data_dir.display());
    Profile::load(Box::new(FileStore::new(data_dir)))
        .with_context(|| format!("failed to load profile from {}", data_dir.display()))
}

fn load_corpus(words_dir: Option<&Path>) -> Result<WordCorpus> {
    match words_dir {
        Some(dir) => WordCorpus::from_dir(dir)
            .with_context(|| format!("failed to load word lists from {}", dir.display())),
        None => WordCorpus::embedded().context("built-in word lists are unusable"),
    }
}

fn run_buy_command(profile: &mut Profile, upgrade: &str) -> Result<()> {
    let Some(kind) = UpgradeKind::from_name(upgrade) else {
        bail!("unknown upgrade '{upgrade}'; see `wordrun shop` for the list");
    };
    let offer = buy(profile, kind)?;
    print_purchase(&offer, profile.player().gold);
    Ok(())
}

fn run_play_command(
    corpus: &WordCorpus,
    profile: Profile,
    config: SessionConfig,
    endless: bool,
) -> Result<()> {
    use wordrun::interactive::{App, run_tui};

    let mut app = App::new(corpus, profile);
    app.modifiers = config.modifiers;
    app.difficulty = config.difficulty;
    if endless {
        app.start(Mode::Endless);
    }
    run_tui(app)
}
