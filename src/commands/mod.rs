//! Command implementations

pub mod play;
pub mod shop;
pub mod stats;

pub use play::{LineCommand, parse_command, run_simple};
pub use shop::{ShopOffer, buy, shop_offers};
pub use stats::{ReportSection, StatsReport, build_report, parse_view};
