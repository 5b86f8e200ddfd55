//! Common helpers shared across commands: configuration resolution and
//! output writing.

use std::{
    fs,
    io::{self, Write},
    path::Path,
    time::Duration,
};

use crate::{
    api::http::{ApiClient, ApiConfig, DEFAULT_BASE_URL},
    controller::ViewController,
    error::AnalyzerError,
    Result, BASE_URL_ENV_VAR, TEAM_ID_ENV_VAR,
};

/// Resolve the raw team id input from option or environment variable.
///
/// The value is returned unvalidated; the controller validates it so that
/// bad input takes the same banner path as in the page.
pub fn resolve_team_input(team_id: Option<String>) -> Result<String> {
    team_id
        .or_else(|| std::env::var(TEAM_ID_ENV_VAR).ok())
        .ok_or_else(|| AnalyzerError::MissingTeamId {
            env_var: TEAM_ID_ENV_VAR.to_string(),
        })
}

/// Resolve the server base URL: option, then environment, then default.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Build the controller for a command invocation.
pub fn build_controller(base_url: Option<String>, timeout_secs: Option<u64>) -> Result<ViewController> {
    let config = ApiConfig::new(&resolve_base_url(base_url))?
        .with_timeout(timeout_secs.map(Duration::from_secs));
    Ok(ViewController::new(ApiClient::new(config)?))
}

/// Write to `out` when given, otherwise to stdout.
pub fn write_output(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
