//! `player` command: fetch one player's detail and render the modal.

use std::path::PathBuf;

use super::common::{build_controller, write_output};
use crate::{cli::types::PlayerId, Result};

/// Parameters for the player command
#[derive(Debug)]
pub struct PlayerParams {
    pub player_id: PlayerId,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub as_json: bool,
    pub out: Option<PathBuf>,
}

/// Handle the player command
pub async fn handle_player(params: PlayerParams) -> Result<()> {
    let mut controller = build_controller(params.base_url, params.timeout_secs)?;
    let player = controller.open_player(params.player_id).await?;

    let rendered = if params.as_json {
        serde_json::to_string_pretty(&player)?
    } else {
        controller.modal_content().html()
    };
    write_output(params.out.as_deref(), &rendered)
}
