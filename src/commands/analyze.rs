//! `analyze` command: submit a team and render the results.

use std::path::PathBuf;

use tracing::info;

use super::common::{build_controller, resolve_team_input, write_output};
use crate::Result;

/// Parameters for the analyze command
#[derive(Debug, Default)]
pub struct AnalyzeParams {
    pub team_id: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub as_json: bool,
    pub page: bool,
    pub out: Option<PathBuf>,
}

/// Handle the analyze command.
///
/// With `page`, the full document is written even when the analysis fails,
/// showing the error banner; the error is still returned.
pub async fn handle_analyze(params: AnalyzeParams) -> Result<()> {
    let raw_team_id = resolve_team_input(params.team_id)?;
    let mut controller = build_controller(params.base_url, params.timeout_secs)?;

    let outcome = controller.submit(&raw_team_id).await;

    if params.page {
        write_output(params.out.as_deref(), &controller.render_page())?;
        return outcome.map(|_| ());
    }

    let data = outcome?;
    let rendered = if params.as_json {
        serde_json::to_string_pretty(&data)?
    } else {
        controller.results().html()
    };
    write_output(params.out.as_deref(), &rendered)?;

    if let Some(path) = &params.out {
        info!(path = %path.display(), "analysis written");
    }
    Ok(())
}
