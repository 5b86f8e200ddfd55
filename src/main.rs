//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_analyzer::{
    cli::{Commands, FplAnalyzer},
    commands::{handle_analyze, handle_player, AnalyzeParams, PlayerParams},
    logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FplAnalyzer::parse();
    logging::init(app.verbose, app.log_json);

    match app.command {
        Commands::Analyze {
            team_id,
            server,
            output,
            page,
        } => handle_analyze(AnalyzeParams {
            team_id,
            base_url: server.base_url,
            timeout_secs: server.timeout_secs,
            as_json: output.json,
            page,
            out: output.out,
        })
        .await
        .context("team analysis failed")?,

        Commands::Player {
            player_id,
            server,
            output,
        } => handle_player(PlayerParams {
            player_id,
            base_url: server.base_url,
            timeout_secs: server.timeout_secs,
            as_json: output.json,
            out: output.out,
        })
        .await
        .with_context(|| format!("could not load player {player_id}"))?,
    }

    Ok(())
}
