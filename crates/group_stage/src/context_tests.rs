use super::*;
use crate::rng::simulation_rng;

const GROUPS: &str = r#"{
    "A": [
        { "Team": "Canada", "ISOCode": "CAN", "FIBARanking": 7 },
        { "Team": "Australia", "ISOCode": "AUS", "FIBARanking": 5 },
        { "Team": "Greece", "ISOCode": "GRE", "FIBARanking": 14 },
        { "Team": "Spain", "ISOCode": "ESP", "FIBARanking": 2 }
    ],
    "B": [
        { "Team": "Germany", "ISOCode": "GER", "FIBARanking": 3 },
        { "Team": "France", "ISOCode": "FRA", "FIBARanking": 9 },
        { "Team": "Brazil", "ISOCode": "BRA", "FIBARanking": 12 },
        { "Team": "Japan", "ISOCode": "JPN", "FIBARanking": 26 }
    ],
    "C": [
        { "Team": "South Sudan", "ISOCode": "SSD", "FIBARanking": 34 },
        { "Team": "Serbia", "ISOCode": "SRB", "FIBARanking": 4 },
        { "Team": "United States", "ISOCode": "USA", "FIBARanking": 1 },
        { "Team": "Puerto Rico", "ISOCode": "PRI", "FIBARanking": 16 }
    ]
}"#;

fn context() -> SimulationContext {
    let defs = GroupDefinitions::from_json_str(GROUPS).unwrap();
    SimulationContext::from_definitions(&defs, &SimulationConfig::default()).unwrap()
}

#[test]
fn test_teams_get_initial_ratings() {
    let ctx = context();

    assert_eq!(ctx.groups().len(), 3);
    assert_eq!(ctx.team("United States").unwrap().rating, 1800.0);
    let spain = ctx.team("Spain").unwrap();
    assert_eq!(spain.code, "ESP");
    assert!(spain.rating < 1800.0 && spain.rating > 1790.0);
    assert!(ctx.team("Italy").is_none());
}

#[test]
fn test_group_order_is_preserved() {
    let ctx = context();

    let group_a: Vec<&str> = ctx.groups()[0].teams.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(group_a, vec!["CAN", "AUS", "GRE", "ESP"]);
}

#[test]
fn test_invalid_rank_fails_fast() {
    let defs = GroupDefinitions::from_json_str(
        r#"{ "A": [ { "Team": "Nowhere", "ISOCode": "NOW", "FIBARanking": 200 } ] }"#,
    )
    .unwrap();

    let result = SimulationContext::from_definitions(&defs, &SimulationConfig::default());

    assert!(matches!(result, Err(SimError::InvalidRank { rank: 200, .. })));
}

#[test]
fn test_duplicate_team_rejected() {
    let defs = GroupDefinitions::from_json_str(
        r#"{
            "A": [ { "Team": "Spain", "ISOCode": "ESP", "FIBARanking": 2 } ],
            "B": [ { "Team": "Spain", "ISOCode": "ESP", "FIBARanking": 2 } ]
        }"#,
    )
    .unwrap();

    let result = SimulationContext::from_definitions(&defs, &SimulationConfig::default());

    assert!(matches!(result, Err(SimError::DuplicateTeam(name)) if name == "Spain"));
}

#[test]
fn test_duplicate_code_in_group_rejected() {
    let defs = GroupDefinitions::from_json_str(
        r#"{
            "A": [
                { "Team": "Spain", "ISOCode": "ESP", "FIBARanking": 2 },
                { "Team": "Estonia", "ISOCode": "ESP", "FIBARanking": 60 }
            ]
        }"#,
    )
    .unwrap();

    let result = SimulationContext::from_definitions(&defs, &SimulationConfig::default());

    assert!(matches!(
        result,
        Err(SimError::DuplicateCode { group, code }) if group == "A" && code == "ESP"
    ));
}

#[test]
fn test_invalid_config_rejected() {
    let defs = GroupDefinitions::from_json_str(GROUPS).unwrap();
    let config = SimulationConfig {
        worst_rank: 0,
        ..Default::default()
    };

    let result = SimulationContext::from_definitions(&defs, &config);

    assert!(matches!(result, Err(SimError::InvalidConfig(_))));
}

#[test]
fn test_full_group_phase() {
    let mut ctx = context();
    let mut rng = simulation_rng(Some(42));

    let results = ctx.simulate_group_phase(&mut rng);

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.matches.len() == 6));
    for group in ctx.groups() {
        assert!(group.teams.iter().all(|t| t.matches.len() == 3));
    }

    let standings = ctx.standings();
    assert!(standings.iter().all(|s| s.entries.len() == 4));

    let qualification = ctx.qualification();
    assert_eq!(qualification.advancing.len(), 8);
    assert_eq!(qualification.eliminated.len(), 1);
    assert_eq!(qualification.eliminated[0].rank, 9);
}

#[test]
fn test_leaderboard_sorted_by_rating() {
    let mut ctx = context();
    let mut rng = simulation_rng(Some(9));
    ctx.simulate_group_phase(&mut rng);

    let board = ctx.leaderboard();

    assert_eq!(board.len(), 12);
    assert!(board.windows(2).all(|w| w[0].rating >= w[1].rating));
    assert!(board.iter().all(|e| e.games == 3));
}

#[test]
fn test_same_seed_same_tournament() {
    let mut first = context();
    let mut second = context();

    let results_first = first.simulate_group_phase(&mut simulation_rng(Some(77)));
    let results_second = second.simulate_group_phase(&mut simulation_rng(Some(77)));

    for (a, b) in results_first.iter().zip(&results_second) {
        assert_eq!(a.matches, b.matches);
    }
    assert_eq!(first.standings(), second.standings());
    assert_eq!(first.qualification(), second.qualification());
}
