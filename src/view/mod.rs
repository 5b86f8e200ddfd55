//! Structured HTML rendering for analysis results and the player modal.

pub mod chart;
pub mod format;
pub mod modal;
pub mod node;
pub mod page;
pub mod panels;

pub use chart::LineChart;
pub use node::{el, fragment, text, Element, Node};
pub use panels::render_results;

/// Element ids shared with the surrounding page markup.
pub mod ids {
    pub const ANALYSIS_FORM: &str = "analysis-form";
    pub const RESULTS: &str = "results";
    pub const LOADING: &str = "loading";
    pub const ERROR_MESSAGE: &str = "error-message";
    pub const TEAM_ID: &str = "team-id";
    pub const PLAYER_MODAL: &str = "playerModal";
    pub const MODAL_CONTENT: &str = "modalContent";
    pub const ANALYZE_BUTTON: &str = "analyze-button";

    pub const ALL: [&str; 8] = [
        ANALYSIS_FORM,
        RESULTS,
        LOADING,
        ERROR_MESSAGE,
        TEAM_ID,
        PLAYER_MODAL,
        MODAL_CONTENT,
        ANALYZE_BUTTON,
    ];
}
