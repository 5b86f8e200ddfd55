//! Analysis server API: wire types and the HTTP client.

pub mod http;
pub mod types;

pub use http::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use types::{
    AnalysisResponse, AnalyzeRequest, Considerations, Player, RecentPerformance, TeamStatus,
    TransferSuggestion,
};
