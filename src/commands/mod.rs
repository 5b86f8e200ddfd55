//! Command implementations for the FPL analyzer CLI

pub mod analyze;
pub mod common;
pub mod player;

pub use analyze::{handle_analyze, AnalyzeParams};
pub use common::{resolve_base_url, resolve_team_input};
pub use player::{handle_player, PlayerParams};
