use big_playoff_hub::data_fetcher::models::Team;
use big_playoff_hub::data_fetcher::processors::{rank_standings, rank_standings_payload};
use big_playoff_hub::error::AppError;
use big_playoff_hub::ui::{HubPage, StandingsRow};
use serde_json::json;

fn teams_from(value: serde_json::Value) -> Vec<Team> {
    serde_json::from_value(value).expect("valid team payload")
}

/// Source order is authoritative even when the records disagree with it
#[test]
fn test_rank_keeps_source_order_over_record() {
    let teams = teams_from(json!([
        {"id": 1, "name": "Worse Record", "wins": 5, "losses": 9, "ties": 0},
        {"id": 2, "name": "Better Record", "wins": 12, "losses": 2, "ties": 0},
        {"id": 3, "name": "Middle", "wins": 8, "losses": 6, "ties": 0}
    ]));

    let ranked = rank_standings(teams.clone());

    assert_eq!(ranked.len(), teams.len());
    for (index, ranked_team) in ranked.iter().enumerate() {
        assert_eq!(ranked_team.rank, index + 1);
        assert_eq!(ranked_team.team, teams[index]);
    }
}

#[test]
fn test_rank_empty_league() {
    assert!(rank_standings(Vec::new()).is_empty());
}

#[test]
fn test_top_players_are_first_three_as_given() {
    let teams = teams_from(json!([{
        "id": 1,
        "name": "Deep Bench",
        "top_three_players": [
            {"id": "a", "name": "Low Scorer", "position": "K", "total_points": 80.0},
            {"id": "b", "name": "High Scorer", "position": "QB", "total_points": 320.0},
            {"id": "c", "name": "Mid Scorer", "position": "RB", "total_points": 200.0},
            {"id": "d", "name": "Fourth", "position": "WR", "total_points": 400.0}
        ]
    }]));

    let ranked = rank_standings(teams);
    let names: Vec<&str> = ranked[0]
        .top_players()
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(names, vec!["Low Scorer", "High Scorer", "Mid Scorer"]);
}

#[test]
fn test_fewer_than_three_players() {
    let teams = teams_from(json!([{
        "id": 1,
        "name": "Thin Roster",
        "top_players": [{"id": 1, "name": "Only One", "position": "TE", "total_points": "99.5"}]
    }]));

    let ranked = rank_standings(teams);
    assert_eq!(ranked[0].top_players().len(), 1);
    assert_eq!(ranked[0].top_players()[0].total_points, 99.5);
}

#[test]
fn test_team_without_players_renders_zero_badges() {
    let teams = teams_from(json!([
        {"id": 1, "name": "Empty List", "top_players": []},
        {"id": 2, "name": "No Field"}
    ]));

    let ranked = rank_standings(teams);
    for ranked_team in &ranked {
        assert!(ranked_team.top_players().is_empty());
        assert!(StandingsRow::from(ranked_team).badges.is_empty());
    }

    let mut page = HubPage::new(301, "STANDINGS", "", false);
    page.add_standings(&ranked);
    let output = page.render_to_string();
    assert!(output.contains("Empty List"));
    assert!(!output.contains("pts"));
}

#[test]
fn test_missing_record_fields_render_blank() {
    let teams = teams_from(json!([{"id": 1, "name": "New Team", "wins": 3}]));
    let ranked = rank_standings(teams);

    assert_eq!(ranked[0].record(), "");
    assert_eq!(ranked[0].points_for_display(), "");
}

#[test]
fn test_malformed_payload_is_validation_error() {
    for payload in [
        json!({"id": 1, "name": "Not a list"}),
        json!([{"id": 1, "name": "Ok"}, "not a record"]),
        json!(null),
    ] {
        let result = rank_standings_payload(&payload);
        assert!(
            matches!(result, Err(AppError::Validation(_))),
            "payload {payload} should be rejected"
        );
    }
}

/// The backend's team serializer sends `owner` as the owner's user id
#[test]
fn test_backend_team_payload_with_owner_id_ranks() {
    let payload = json!([
        {"id": 10, "owner": 4, "league": 1, "sleeper_roster_id": "1", "team_name": "Top Dogs",
         "made_league_playoffs": true, "wins": 11, "losses": 3, "ties": 0, "points_for": "1801.45"},
        {"id": 11, "owner": 7, "league": 1, "sleeper_roster_id": "2", "team_name": "Underdogs",
         "made_league_playoffs": false, "wins": 3, "losses": 11, "ties": 0, "points_for": "1302.10"},
        {"id": 12, "owner": null, "league": 1, "sleeper_roster_id": "3", "team_name": "Orphans",
         "made_league_playoffs": false, "wins": 0, "losses": 0, "ties": 0, "points_for": "0.00"}
    ]);

    let ranked = rank_standings_payload(&payload).unwrap();

    let ranks: Vec<usize> = ranked.iter().map(|t| t.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert_eq!(ranked[0].team.name, "Top Dogs");
    assert_eq!(ranked[0].team.owner.as_deref(), Some("4"));
    assert_eq!(ranked[2].team.owner, None);
    assert_eq!(StandingsRow::from(&ranked[1]).owner, "7");
}
