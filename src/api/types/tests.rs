//! Unit tests for analysis payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    fn full_payload() -> serde_json::Value {
        json!({
            "success": true,
            "team_status": {
                "name": "Haaland Globetrotters",
                "overall_points": 1234,
                "overall_rank": 56789,
                "bank_balance": 1.5
            },
            "current_squad": [
                {
                    "player_id": 355,
                    "name": "Salah",
                    "team": "Liverpool",
                    "position": "MID",
                    "price": 13.1,
                    "form": 7.5,
                    "predicted_points": 8.2
                }
            ],
            "captain_picks": [
                {"player_id": 355, "name": "Salah", "position": "MID", "team": "Liverpool",
                 "predicted_points": 8.2, "confidence": 0.8}
            ],
            "transfer_suggestions": [
                {
                    "out": {"player_id": 1, "name": "A", "team": "X", "form": 1.0, "price": 5.0},
                    "in": {"player_id": 2, "name": "B", "team": "Y", "form": 6.0, "price": 5.5,
                           "selected_by": 4.2},
                    "improvement": 2.4,
                    "price_change": 0.5,
                    "remaining_budget": 1.0
                }
            ],
            "considerations": {"inactive_players": true, "out_of_form_players": false},
            "predictions_updated": "2024-09-14T10:00:00"
        })
    }

    #[test]
    fn test_analysis_response_deserialization() {
        let response: AnalysisResponse = serde_json::from_value(full_payload()).unwrap();

        assert!(response.success);
        assert_eq!(response.team_status.name.as_deref(), Some("Haaland Globetrotters"));
        assert_eq!(response.team_status.overall_rank, Some(56789));
        assert_eq!(response.team_status.bank_balance, Some(1.5));
        assert_eq!(response.current_squad.len(), 1);
        assert_eq!(response.current_squad[0].player_id, Some(PlayerId::new(355)));
        assert_eq!(response.captain_picks[0].confidence, Some(0.8));

        let transfer = &response.transfer_suggestions[0];
        assert_eq!(transfer.out.name.as_deref(), Some("A"));
        assert_eq!(transfer.incoming.name.as_deref(), Some("B"));
        assert_eq!(transfer.price_change, Some(0.5));
        assert_eq!(transfer.improvement, Some(2.4));
        assert!(response.considerations.inactive_players);
        assert!(!response.considerations.out_of_form_players);
        assert_eq!(
            response.predictions_updated.as_deref(),
            Some("2024-09-14T10:00:00")
        );
    }

    #[test]
    fn test_failure_payload_deserialization() {
        let response: AnalysisResponse =
            serde_json::from_value(json!({"success": false, "error": "Team ID is required"}))
                .unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Team ID is required"));
        assert!(response.current_squad.is_empty());
        assert!(!response.considerations.any());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let response: AnalysisResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!response.success);
        assert!(response.team_status.name.is_none());
        assert!(response.captain_picks.is_empty());
        assert!(response.transfer_suggestions.is_empty());
    }

    #[test]
    fn test_null_collections_are_tolerated() {
        let response: AnalysisResponse = serde_json::from_value(json!({
            "success": true,
            "team_status": null,
            "current_squad": null,
            "captain_picks": null,
            "transfer_suggestions": null,
            "considerations": null
        }))
        .unwrap();

        assert!(response.success);
        assert!(response.current_squad.is_empty());
        assert!(!response.considerations.any());
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let player: Player = serde_json::from_value(json!({
            "name": "Palmer",
            "form": "6.3",
            "selected_by": "45.1",
            "price": null,
            "total_points": ""
        }))
        .unwrap();

        assert_eq!(player.form, Some(6.3));
        assert_eq!(player.selected_by, Some(45.1));
        assert!(player.price.is_none());
        assert!(player.total_points.is_none());
    }

    #[test]
    fn test_string_player_ids_in_squad_are_accepted() {
        let response: AnalysisResponse = serde_json::from_value(json!({
            "success": true,
            "current_squad": [
                {"player_id": "355", "name": "Salah"},
                {"player_id": " 42 ", "name": "Saka"},
                {"player_id": null, "name": "Unknown"},
                {"player_id": "abc", "name": "Junk"}
            ]
        }))
        .unwrap();

        let ids: Vec<_> = response.current_squad.iter().map(|p| p.player_id).collect();
        assert_eq!(
            ids,
            vec![
                Some(PlayerId::new(355)),
                Some(PlayerId::new(42)),
                None,
                None
            ]
        );
    }

    #[test]
    fn test_recent_points_tolerate_nulls_and_strings() {
        let player: Player = serde_json::from_value(json!({
            "recent_performance": {"points": [10, null, "8", 5.0, "dnp"]}
        }))
        .unwrap();

        assert_eq!(player.recent_performance.unwrap().points, vec![10, 0, 8, 5, 0]);

        let empty: RecentPerformance = serde_json::from_value(json!({"points": null})).unwrap();
        assert!(empty.points.is_empty());
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        let result: Result<Player, _> = serde_json::from_value(json!({"form": "hot"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_team_status_integer_fields_truncate_floats() {
        let status: TeamStatus =
            serde_json::from_value(json!({"overall_points": 1234.0, "overall_rank": "99"}))
                .unwrap();
        assert_eq!(status.overall_points, Some(1234));
        assert_eq!(status.overall_rank, Some(99));
    }

    #[test]
    fn test_player_detail_with_recent_performance() {
        let player: Player = serde_json::from_value(json!({
            "player_id": 42,
            "name": "Saka",
            "total_points": 120,
            "points_per_game": 5.5,
            "minutes_per_game": 84.2,
            "games_played": 22,
            "selected_by": 30.5,
            "recent_performance": {"points": [10, 2, 8, 5, 1]}
        }))
        .unwrap();

        assert_eq!(player.player_id, Some(PlayerId::new(42)));
        assert_eq!(player.games_played, Some(22.0));
        assert_eq!(
            player.recent_performance.unwrap().points,
            vec![10, 2, 8, 5, 1]
        );
    }

    #[test]
    fn test_transfer_serializes_incoming_as_in() {
        let transfer = TransferSuggestion {
            incoming: Player {
                name: Some("B".to_string()),
                ..Player::default()
            },
            improvement: Some(1.5),
            ..TransferSuggestion::default()
        };

        let value = serde_json::to_value(&transfer).unwrap();
        assert_eq!(value["in"]["name"], "B");
        assert_eq!(value["improvement"], 1.5);
        assert!(value.get("price_change").is_none());
    }

    #[test]
    fn test_analyze_request_serialization() {
        let body = AnalyzeRequest {
            team_id: "12345".to_string(),
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"team_id": "12345"}));
    }

    #[test]
    fn test_differential_threshold_boundary() {
        let with = |pct: Option<f64>| Player {
            selected_by: pct,
            ..Player::default()
        };

        assert!(with(Some(9.99)).is_differential());
        assert!(with(Some(0.0)).is_differential());
        assert!(!with(Some(10.0)).is_differential());
        assert!(!with(Some(25.0)).is_differential());
        assert!(!with(None).is_differential());
    }

    #[test]
    fn test_considerations_any() {
        assert!(!Considerations::default().any());
        assert!(Considerations {
            inactive_players: false,
            out_of_form_players: true
        }
        .any());
    }
}
