//! Result panels for an analysis payload.

use super::format::{count, decimal, grouped, money, plain, signed, text_or};
use super::node::{el, fragment, Element, Node};
use crate::api::types::{AnalysisResponse, Considerations, Player, TeamStatus, TransferSuggestion};

pub const CAPTAIN_LABEL: &str = "👑 Captain";
pub const VICE_CAPTAIN_LABEL: &str = "🥈 Vice Captain";
pub const INACTIVE_PLAYERS_NOTE: &str = "You have inactive players that might need attention";
pub const OUT_OF_FORM_NOTE: &str = "Some players in your squad are out of form";

/// Render the full results region: team status, captain picks, transfer
/// suggestions and current squad, then considerations when flagged.
pub fn render_results(data: &AnalysisResponse) -> Node {
    let mut nodes: Vec<Node> = vec![
        team_status(&data.team_status).into(),
        captain_picks(&data.captain_picks).into(),
        transfer_suggestions(&data.transfer_suggestions).into(),
        current_squad(&data.current_squad).into(),
    ];
    if let Some(panel) = considerations(&data.considerations) {
        nodes.push(panel.into());
    }
    if let Some(ts) = data.predictions_updated.as_deref() {
        nodes.push(
            el("p")
                .class("predictions-updated")
                .text(format!("Predictions updated: {ts}"))
                .into(),
        );
    }
    fragment(nodes)
}

fn panel(title: &str) -> Element {
    el("section")
        .class("panel")
        .child(el("h3").class("panel-title").text(title))
}

fn stat_item(label: &str, value: String) -> Element {
    el("div")
        .class("stat-item")
        .child(el("p").class("stat-label").text(label))
        .child(el("p").class("stat-value").text(value))
}

/// Card wrapper; cards with a player id become click targets for the
/// detail modal.
fn player_card(player: &Player) -> Element {
    let card = el("div").class("player-card");
    match player.player_id {
        Some(id) => card.attr("data-player-id", id.to_string()),
        None => card,
    }
}

fn name_of(player: &Player) -> &str {
    text_or(player.name.as_deref(), "Unknown")
}

pub fn team_status(status: &TeamStatus) -> Element {
    panel("Team Status")
        .class("team-status")
        .child(
            el("div")
                .class("stat-grid")
                .child(stat_item(
                    "Team Name",
                    text_or(status.name.as_deref(), "N/A").to_string(),
                ))
                .child(stat_item("Overall Points", count(status.overall_points)))
                .child(stat_item("Overall Rank", grouped(status.overall_rank)))
                .child(stat_item("Bank Balance", money(status.bank_balance))),
        )
}

pub fn current_squad(squad: &[Player]) -> Element {
    let cards = squad.iter().map(|player| {
        player_card(player)
            .child(
                el("div")
                    .child(el("p").class("player-name").text(name_of(player)))
                    .child(el("p").class("player-meta").text(format!(
                        "{} - {}",
                        text_or(player.team.as_deref(), "N/A"),
                        text_or(player.position.as_deref(), "N/A")
                    ))),
            )
            .child(
                el("div")
                    .class("player-numbers")
                    .child(el("p").class("player-price").text(money(player.price)))
                    .child(el("p").text(format!("Form: {}", decimal(player.form))))
                    .opt_child(player.predicted_points.map(|p| {
                        el("p").text(format!("Predicted: {}", decimal(Some(p))))
                    })),
            )
    });

    panel("Current Squad")
        .class("current-squad")
        .child(el("div").class("squad-list").children(cards))
}

/// Badge for a pick by position in the server's ordering.
pub fn captain_badge(index: usize) -> Option<Element> {
    match index {
        0 => Some(el("span").class("captain-badge").text(CAPTAIN_LABEL)),
        1 => Some(el("span").class("vice-captain-badge").text(VICE_CAPTAIN_LABEL)),
        _ => None,
    }
}

fn fixture_line(pick: &Player) -> Option<Element> {
    if pick.is_home.is_none() && pick.opponent.is_none() {
        return None;
    }
    let venue = if pick.is_home.unwrap_or(false) { "HOME" } else { "AWAY" };
    Some(el("p").class("pick-fixture").text(format!(
        "{venue} vs {}",
        text_or(pick.opponent.as_deref(), "N/A")
    )))
}

pub fn captain_picks(picks: &[Player]) -> Element {
    let cards = picks.iter().enumerate().map(|(index, pick)| {
        let heading = el("p")
            .class("player-name")
            .text(format!(
                "{} ({})",
                name_of(pick),
                text_or(pick.position.as_deref(), "N/A")
            ))
            .opt_child(captain_badge(index));

        let mut stats = format!(
            "Predicted Points: {} | Form: {}",
            decimal(pick.predicted_points),
            decimal(pick.form)
        );
        if let Some(c) = pick.confidence {
            stats.push_str(&format!(" | Confidence: {}", decimal(Some(c))));
        }

        player_card(pick)
            .class("captain-pick")
            .child(heading)
            .opt_child(fixture_line(pick))
            .child(el("p").class("pick-stats").text(stats))
    });

    panel("Captain Picks").class("captain-picks").children(cards)
}

fn transfer_side(label: &str, side_class: &str, player: &Player) -> Element {
    player_card(player)
        .class(side_class)
        .child(
            el("p")
                .class("player-name")
                .text(format!("{label}: {}", name_of(player))),
        )
        .child(el("p").text(format!("Team: {}", text_or(player.team.as_deref(), "N/A"))))
        .child(el("p").text(format!("Form: {}", decimal(player.form))))
        .child(el("p").text(format!("Price: {}", money(player.price))))
}

fn delta_class(v: Option<f64>) -> &'static str {
    match v.filter(|v| v.is_finite()) {
        Some(v) if v > 0.0 => "delta-positive",
        Some(v) if v < 0.0 => "delta-negative",
        _ => "delta-neutral",
    }
}

fn differential_note(incoming: &Player) -> Option<Element> {
    incoming.is_differential().then(|| {
        el("p").class("differential-note").text(format!(
            "Differential Pick ({}% ownership)",
            plain(incoming.selected_by)
        ))
    })
}

pub fn transfer_suggestions(transfers: &[TransferSuggestion]) -> Element {
    let items = transfers.iter().map(|t| {
        el("div")
            .class("transfer")
            .child(
                el("div")
                    .class("transfer-pair")
                    .child(transfer_side("OUT", "transfer-out", &t.out))
                    .child(el("span").class("transfer-arrow").text("→"))
                    .child(transfer_side("IN", "transfer-in", &t.incoming)),
            )
            .child(
                el("div")
                    .class("transfer-summary")
                    .child(el("p").text(format!("Price Change: {}", money(t.price_change))))
                    .child(el("p").text(format!(
                        "Remaining Budget: {}",
                        money(t.remaining_budget)
                    )))
                    .child(
                        el("p")
                            .class("point-gain")
                            .class(delta_class(t.improvement))
                            .text(format!("Expected Point Gain: {}", signed(t.improvement))),
                    )
                    .opt_child(differential_note(&t.incoming)),
            )
    });

    let section = panel("Transfer Suggestions").class("transfer-suggestions");
    if transfers.is_empty() {
        section.child(el("p").class("empty-note").text("No transfer suggestions this week"))
    } else {
        section.children(items)
    }
}

/// Warning panel, present only when at least one flag is set.
pub fn considerations(flags: &Considerations) -> Option<Element> {
    if !flags.any() {
        return None;
    }
    let mut notes = Vec::new();
    if flags.inactive_players {
        notes.push(el("p").class("consideration").text(format!("• {INACTIVE_PLAYERS_NOTE}")));
    }
    if flags.out_of_form_players {
        notes.push(el("p").class("consideration").text(format!("• {OUT_OF_FORM_NOTE}")));
    }

    Some(
        el("div")
            .class("considerations")
            .child(el("span").class("considerations-icon").text("⚠️"))
            .child(
                el("div")
                    .child(el("h3").class("considerations-title").text("Considerations"))
                    .child(el("div").class("considerations-list").children(notes)),
            ),
    )
}
