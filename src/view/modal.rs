//! Player detail modal content.

use super::chart::LineChart;
use super::format::{decimal, money, plain, text_or};
use super::node::{el, Element};
use crate::api::types::Player;

/// `data-action` value on the close control.
pub const CLOSE_ACTION: &str = "close-modal";

fn stat(label: &str, value: String) -> Element {
    el("div")
        .class("modal-stat")
        .child(el("p").class("stat-label").text(label))
        .child(el("p").class("stat-value").text(value))
}

/// Stat grid and recent-form chart for one player.
pub fn player_detail(player: &Player) -> Element {
    let points = player
        .recent_performance
        .as_ref()
        .map(|r| r.points.as_slice())
        .unwrap_or_default();
    let chart = LineChart::from_recent(points);

    let header = el("div")
        .class("modal-header")
        .child(
            el("h2")
                .class("modal-title")
                .text(text_or(player.name.as_deref(), "Unknown")),
        )
        .child(el("p").class("player-meta").text(format!(
            "{} - {}",
            text_or(player.team.as_deref(), "N/A"),
            text_or(player.position.as_deref(), "N/A")
        )))
        .child(
            el("button")
                .class("modal-close")
                .attr("type", "button")
                .attr("data-action", CLOSE_ACTION)
                .attr("aria-label", "Close")
                .text("×"),
        );

    let stats = el("div")
        .class("modal-stats")
        .child(stat("Price", money(player.price)))
        .child(stat("Form", decimal(player.form)))
        .child(stat("Predicted Points", decimal(player.predicted_points)))
        .child(stat("Total Points", plain(player.total_points)))
        .child(stat("Points per Game", decimal(player.points_per_game)))
        .child(stat("Minutes per Game", decimal(player.minutes_per_game)))
        .child(stat("Games Played", plain(player.games_played)))
        .child(stat("Selected By", format!("{}%", plain(player.selected_by))));

    el("div")
        .class("player-detail")
        .child(header)
        .child(stats)
        .child(
            el("div")
                .class("modal-chart")
                .child(el("h3").text("Last 5 Gameweeks"))
                .child(chart.render()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::RecentPerformance;
    use scraper::{Html, Selector};

    #[test]
    fn test_player_detail_stats_and_chart() {
        let player = Player {
            name: Some("Saka".to_string()),
            team: Some("Arsenal".to_string()),
            position: Some("MID".to_string()),
            price: Some(10.1),
            total_points: Some(120.0),
            selected_by: Some(30.5),
            games_played: Some(22.0),
            recent_performance: Some(RecentPerformance {
                points: vec![10, 2, 8, 5, 1],
            }),
            ..Player::default()
        };

        let html = player_detail(&player).to_string();
        let doc = Html::parse_fragment(&html);
        let values = Selector::parse(".stat-value").unwrap();
        let values: Vec<String> = doc.select(&values).map(|e| e.text().collect()).collect();

        assert_eq!(
            values,
            vec!["£10.1m", "0.0", "0.0", "120", "0.0", "0.0", "22", "30.5%"]
        );
        assert!(html.contains("Arsenal - MID"));
        assert!(html.contains(r#"data-points="1,5,8,2,10""#));
        assert!(html.contains(r#"data-action="close-modal""#));
    }

    #[test]
    fn test_player_detail_without_history() {
        let html = player_detail(&Player::default()).to_string();
        assert!(html.contains("Unknown"));
        assert!(html.contains("No recent gameweek data"));
        assert!(html.contains("0%"));
    }
}
