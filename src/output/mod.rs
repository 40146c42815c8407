//! Terminal output formatting
//!
//! Display utilities for line-mode play, reports and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_inventory, print_purchase, print_round, print_shop, print_stats_report,
    print_summary, print_uses, print_word_header,
};
