//! FPL Team Analyzer Client Library
//!
//! Client for a Fantasy Premier League analysis server: submits a team ID,
//! renders the returned analysis as HTML, and fetches per-player detail for
//! a modal with a recent-form chart.
//!
//! ## Features
//!
//! - **Team Analysis**: `POST /analyze` with strict client-side team ID validation
//! - **Result Panels**: team status, captain picks, transfer suggestions, current squad
//! - **Player Detail**: `GET /player/{id}` rendered with a five-gameweek line chart
//! - **Safe Rendering**: structured element tree with escaping of all server strings
//! - **View Controller**: explicit region state (loading, error banner, results, modal)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_analyzer::{ApiClient, ViewController};
//!
//! # async fn example() -> fpl_analyzer::Result<()> {
//! let client = ApiClient::with_base_url("http://127.0.0.1:5000")?;
//! let mut controller = ViewController::new(client);
//!
//! controller.submit("12345").await?;
//! println!("{}", controller.results().html());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FPL_ANALYZER_URL=http://127.0.0.1:5000
//! export FPL_TEAM_ID=12345
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod controller;
pub mod error;
pub mod logging;
pub mod view;

// Re-export commonly used types
pub use api::{AnalysisResponse, ApiClient, ApiConfig, Player, TransferSuggestion};
pub use cli::types::{PlayerId, TeamId};
pub use controller::{ViewController, ViewState};
pub use error::{AnalyzerError, Result};

pub const TEAM_ID_ENV_VAR: &str = "FPL_TEAM_ID";
pub const BASE_URL_ENV_VAR: &str = "FPL_ANALYZER_URL";
