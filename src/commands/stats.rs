//! Statistics report

use crate::game::UpgradeKind;
use crate::output::formatters::format_average;
use crate::profile::{StatBlock, Stats, StatsView};

/// One titled group of label/value rows
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub heading: &'static str,
    pub rows: Vec<(&'static str, String)>,
}

/// Everything the stats screen shows for one view
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub view: StatsView,
    pub sections: Vec<ReportSection>,
}

impl StatsReport {
    /// Look up a row value by label
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|section| &section.rows)
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value.as_str())
    }
}

/// Hint kinds in the order the report lists them
const HINT_ROWS: [(&str, UpgradeKind); 6] = [
    ("Super hints", UpgradeKind::SuperHint),
    ("Positive hints", UpgradeKind::PositiveHint),
    ("Negative hints", UpgradeKind::NegativeHint),
    ("Bonus guesses", UpgradeKind::BonusGuess),
    ("Word rerolls", UpgradeKind::WordReroll),
    ("Extra lives", UpgradeKind::ExtraLife),
];

fn least_guesses(block: &StatBlock) -> String {
    if block.best_run_guesses == 0 {
        "—".to_string()
    } else {
        block.best_run_guesses.to_string()
    }
}

fn best_run_rows(block: &StatBlock, view: StatsView) -> Vec<(&'static str, String)> {
    let run_bests = || {
        vec![
            ("Most words in a run", block.best_run_words.to_string()),
            ("Most bosses in a run", block.best_run_boss.to_string()),
            ("Least guesses in a run", least_guesses(block)),
        ]
    };
    match view {
        StatsView::Normal => run_bests(),
        StatsView::Endless => vec![("Most words in endless", block.endless_best_words.to_string())],
        StatsView::Total => {
            let mut rows = run_bests();
            rows.push(("Most words in endless", block.endless_best_words.to_string()));
            rows
        }
    }
}

/// Build the report for one view of the stats
#[must_use]
pub fn build_report(stats: &Stats, view: StatsView) -> StatsReport {
    let block = stats.view(view);

    let mut general = vec![("Gold earned", block.total_gold_earned.to_string())];
    if view != StatsView::Endless {
        general.push(("Runs played", block.runs_played.to_string()));
        general.push(("Runs completed", block.runs_completed.to_string()));
    }

    let words = vec![
        ("Words solved", block.total_words_solved.to_string()),
        ("Words attempted", block.total_words_attempted.to_string()),
        ("Bosses solved", block.total_bosses_solved.to_string()),
        ("Bosses attempted", block.total_bosses_attempted.to_string()),
        ("Total guesses", block.total_guesses.to_string()),
    ];

    let mut hints: Vec<(&'static str, String)> = HINT_ROWS
        .iter()
        .map(|&(label, kind)| (label, block.hints_used(kind).to_string()))
        .collect();
    hints.push(("Hints per solved word", format_average(block.hints_per_solved())));
    hints.push(("Guesses per solved word", format_average(block.guesses_per_solved())));

    StatsReport {
        view,
        sections: vec![
            ReportSection {
                heading: "General",
                rows: general,
            },
            ReportSection {
                heading: "Best run",
                rows: best_run_rows(block, view),
            },
            ReportSection {
                heading: "Words",
                rows: words,
            },
            ReportSection {
                heading: "Upgrades used",
                rows: hints,
            },
        ],
    }
}

/// Parse a view name as given on the command line
#[must_use]
pub fn parse_view(name: &str) -> Option<StatsView> {
    match name.trim().to_ascii_lowercase().as_str() {
        "normal" | "run" => Some(StatsView::Normal),
        "endless" => Some(StatsView::Endless),
        "total" | "all" => Some(StatsView::Total),
        _ => None,
    }
}
