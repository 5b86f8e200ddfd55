//! End-to-end tests of the view controller against a stubbed analysis server

use fpl_analyzer::{ApiClient, PlayerId, ViewController, ViewState};
use scraper::{Html, Selector};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Fixture: 2 captain picks, 1 differential transfer, both consideration flags
fn analysis_fixture() -> serde_json::Value {
    json!({
        "success": true,
        "team_status": {
            "name": "Gameweek Warriors",
            "overall_points": 512,
            "overall_rank": 1234567,
            "bank_balance": 0.8
        },
        "current_squad": [
            {"player_id": 42, "name": "Saka", "team": "Arsenal", "position": "MID",
             "price": 10.1, "form": 6.2, "predicted_points": 6.8},
            {"player_id": 17, "name": "Isak", "team": "Newcastle", "position": "FWD",
             "price": 8.6, "form": 7.0, "predicted_points": 7.4}
        ],
        "captain_picks": [
            {"player_id": 17, "name": "Isak", "position": "FWD", "predicted_points": 7.4,
             "form": 7.0},
            {"player_id": 42, "name": "Saka", "position": "MID", "predicted_points": 6.8,
             "form": 6.2}
        ],
        "transfer_suggestions": [
            {
                "out": {"player_id": 3, "name": "Struggler", "team": "Luton", "form": 1.2,
                        "price": 5.0},
                "in": {"player_id": 9, "name": "Mbeumo", "team": "Brentford", "form": 6.5,
                       "price": 5.5, "selected_by": 5},
                "improvement": 2.3,
                "price_change": 0.5,
                "remaining_budget": 0.3
            }
        ],
        "considerations": {"inactive_players": true, "out_of_form_players": true}
    })
}

fn texts(doc: &Html, selector: &str) -> Vec<String> {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).map(|e| e.text().collect()).collect()
}

#[tokio::test]
async fn test_submit_renders_badges_differential_and_considerations() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({"team_id": "12345"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(analysis_fixture()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = ViewController::new(ApiClient::with_base_url(&mock_server.uri()).unwrap());
    controller.submit("12345").await.unwrap();

    assert_eq!(controller.state(), &ViewState::Success);
    assert!(!controller.results().is_hidden());
    assert!(controller.error_message().is_hidden());
    assert!(controller.loading().is_hidden());

    let doc = Html::parse_fragment(&controller.results().html());

    let picks = Selector::parse(".captain-pick").unwrap();
    let captain = Selector::parse(".captain-badge").unwrap();
    let vice = Selector::parse(".vice-captain-badge").unwrap();
    let picks: Vec<_> = doc.select(&picks).collect();
    assert_eq!(picks.len(), 2);
    assert_eq!(picks[0].select(&captain).count(), 1);
    assert_eq!(picks[1].select(&vice).count(), 1);
    assert!(picks[0].text().collect::<String>().contains("Isak"));

    assert_eq!(
        texts(&doc, ".differential-note"),
        vec!["Differential Pick (5% ownership)"]
    );

    assert_eq!(texts(&doc, ".considerations").len(), 1);
    let notes = texts(&doc, ".consideration");
    assert_eq!(notes.len(), 2);
    assert!(notes[0].contains("inactive players"));
    assert!(notes[1].contains("out of form"));

    assert_eq!(
        texts(&doc, ".panel-title"),
        vec![
            "Team Status",
            "Captain Picks",
            "Transfer Suggestions",
            "Current Squad"
        ]
    );
    assert!(texts(&doc, ".stat-value").contains(&"1,234,567".to_string()));
}

#[tokio::test]
async fn test_failed_analysis_keeps_results_hidden() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "FPL API unavailable"
        })))
        .mount(&mock_server)
        .await;

    let mut controller = ViewController::new(ApiClient::with_base_url(&mock_server.uri()).unwrap());
    assert!(controller.submit("12345").await.is_err());

    assert_eq!(controller.error_text(), Some("FPL API unavailable"));
    assert!(controller.results().is_hidden());

    let page = Html::parse_document(&controller.render_page());
    assert_eq!(texts(&page, "#error-message p"), vec!["FPL API unavailable"]);
    let hidden_results = Selector::parse("#results.hidden").unwrap();
    assert_eq!(page.select(&hidden_results).count(), 1);
}

#[tokio::test]
async fn test_player_modal_chart_is_oldest_first() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "player_id": 42,
            "name": "Saka",
            "team": "Arsenal",
            "position": "MID",
            "price": 10.1,
            "form": 6.2,
            "total_points": 120,
            "points_per_game": 5.5,
            "minutes_per_game": 84.0,
            "games_played": 22,
            "selected_by": 30.5,
            "recent_performance": {"points": [10, 2, 8, 5, 1]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = ViewController::new(ApiClient::with_base_url(&mock_server.uri()).unwrap());
    controller.open_player(PlayerId::new(42)).await.unwrap();
    assert!(!controller.modal().is_hidden());

    let doc = Html::parse_fragment(&controller.modal_content().html());
    let points = Selector::parse(".chart-point").unwrap();
    let plotted: Vec<i64> = doc
        .select(&points)
        .map(|e| e.value().attr("data-value").unwrap().parse().unwrap())
        .collect();

    assert_eq!(plotted, vec![1, 5, 8, 2, 10]);
    assert_eq!(plotted.first(), Some(&1));
    assert_eq!(plotted.last(), Some(&10));
}

#[tokio::test]
async fn test_player_not_found_leaves_modal_hidden() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let mut controller = ViewController::new(ApiClient::with_base_url(&mock_server.uri()).unwrap());
    let result = controller.open_player(PlayerId::new(404)).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("404"));
    assert!(controller.modal().is_hidden());
    assert!(controller.error_message().is_hidden());

    let page = Html::parse_document(&controller.render_page());
    let hidden_modal = Selector::parse("#playerModal.hidden").unwrap();
    assert_eq!(page.select(&hidden_modal).count(), 1);
}
