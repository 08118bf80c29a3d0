use super::*;
use crate::rng::{simulation_rng, ScriptedRng};

fn team(name: &str, code: &str, rating: f64) -> Team {
    Team::new(name, code, 1, rating)
}

fn no_forfeits() -> MatchSimulator {
    MatchSimulator::new(MatchConfig {
        forfeit_probability: 0.0,
        ..Default::default()
    })
}

#[test]
fn test_forfeit_by_a() {
    let mut a = team("Spain", "ESP", 1700.0);
    let mut b = team("Greece", "GRE", 1600.0);
    let mut rng = ScriptedRng::new(&[0.00001, 0.9], &[]);

    let score = MatchSimulator::default().simulate(&mut a, &mut b, &mut rng);

    assert_eq!(score, MatchScore { score_a: 0, score_b: 50, forfeit: Some(Side::A) });
    assert_eq!((a.points, a.wins, a.losses), (0, 0, 1));
    assert_eq!((b.points, b.wins, b.losses), (2, 1, 0));
    assert_eq!(a.rating, 1700.0);
    assert_eq!(b.rating, 1600.0);
    assert_eq!(a.matches[0], MatchRecord::new("GRE", 0, 50, Outcome::Loss, true));
    assert_eq!(b.matches[0], MatchRecord::new("ESP", 50, 0, Outcome::Win, true));
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_forfeit_by_b() {
    let mut a = team("Spain", "ESP", 1700.0);
    let mut b = team("Greece", "GRE", 1600.0);
    let mut rng = ScriptedRng::new(&[0.5, 0.00005], &[]);

    let score = MatchSimulator::default().simulate(&mut a, &mut b, &mut rng);

    assert_eq!(score.forfeit, Some(Side::B));
    assert_eq!(score.winner(), Side::A);
    assert_eq!((a.scored, a.conceded, a.difference), (50, 0, 50));
    assert_eq!((b.scored, b.conceded, b.difference), (0, 50, -50));
    assert_eq!(a.points, 2);
    assert_eq!(b.points, 0);
}

#[test]
fn test_forfeit_decides_winner_whatever_the_score() {
    let b_forfeits = MatchScore { score_a: 0, score_b: 0, forfeit: Some(Side::B) };
    assert_eq!(b_forfeits.winner(), Side::A);

    let a_forfeits = MatchScore { score_a: 0, score_b: 0, forfeit: Some(Side::A) };
    assert_eq!(a_forfeits.winner(), Side::B);
}

#[test]
fn test_double_forfeit_trigger_goes_against_a() {
    let mut a = team("Spain", "ESP", 1700.0);
    let mut b = team("Greece", "GRE", 1600.0);
    let mut rng = ScriptedRng::new(&[0.0, 0.0], &[]);

    let score = MatchSimulator::default().simulate(&mut a, &mut b, &mut rng);

    assert_eq!(score.forfeit, Some(Side::A));
    assert_eq!(b.wins, 1);
}

#[test]
fn test_even_match_scoring() {
    let mut a = team("Spain", "ESP", 1500.0);
    let mut b = team("Greece", "GRE", 1500.0);
    // Forfeit rolls, then one score draw per side; no boosts at p = 0.5
    let mut rng = ScriptedRng::new(&[0.5, 0.5, 0.5, 0.25], &[]);

    let score = MatchSimulator::default().simulate(&mut a, &mut b, &mut rng);

    assert_eq!(score, MatchScore { score_a: 80, score_b: 65, forfeit: None });
    assert_eq!((a.points, a.wins), (2, 1));
    assert_eq!((b.points, b.losses), (1, 1));
    assert_eq!(a.rating, 1516.0);
    assert_eq!(b.rating, 1484.0);
    assert_eq!(a.matches[0], MatchRecord::new("GRE", 80, 65, Outcome::Win, false));
    assert_eq!(b.matches[0], MatchRecord::new("ESP", 65, 80, Outcome::Loss, false));
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_favourite_draws_boost() {
    let mut a = team("United States", "USA", 1800.0);
    let mut b = team("South Sudan", "SSD", 1200.0);
    // Forfeit rolls, A's boost, A's score, B's score
    let mut rng = ScriptedRng::new(&[0.5, 0.5, 0.5, 0.0, 0.0], &[]);

    let score = MatchSimulator::default().simulate(&mut a, &mut b, &mut rng);

    assert_eq!(score.score_a, 74);
    // The underdog's raw score is below the floor
    assert_eq!(score.score_b, 50);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_tied_scores_go_to_overtime() {
    let mut a = team("Spain", "ESP", 1500.0);
    let mut b = team("Greece", "GRE", 1500.0);
    let mut rng = ScriptedRng::new(&[0.5, 0.5, 0.5, 0.5, 0.7], &[4]);

    let score = MatchSimulator::default().simulate(&mut a, &mut b, &mut rng);

    assert_eq!((score.score_a, score.score_b), (84, 80));
    assert_eq!(a.wins, 1);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_overtime_coin_flip_favours_b() {
    let mut a = team("Spain", "ESP", 1500.0);
    let mut b = team("Greece", "GRE", 1500.0);
    // Both scores floor at 50
    let mut rng = ScriptedRng::new(&[0.5, 0.5, 0.0, 0.0, 0.3], &[1]);

    let score = MatchSimulator::default().simulate(&mut a, &mut b, &mut rng);

    assert_eq!((score.score_a, score.score_b), (50, 51));
    assert_eq!(score.winner(), Side::B);
    assert_eq!(b.points, 2);
    assert_eq!(a.points, 1);
}

#[test]
fn test_exactly_one_winner_and_no_draws() {
    let sim = MatchSimulator::default();
    let mut rng = simulation_rng(Some(7));

    for trial in 0..2000 {
        let rating_a = 1200.0 + (trial % 13) as f64 * 50.0;
        let rating_b = 1800.0 - (trial % 7) as f64 * 80.0;
        let mut a = team("Alpha", "ALP", rating_a);
        let mut b = team("Bravo", "BRA", rating_b);

        let score = sim.simulate(&mut a, &mut b, &mut rng);

        assert_ne!(score.score_a, score.score_b);
        assert_eq!(a.wins + b.wins, 1);
        assert_eq!(a.losses + b.losses, 1);
        assert_ne!(a.matches[0].scored, a.matches[0].conceded);
        assert_eq!(a.scored, b.conceded);
        assert_eq!(b.scored, a.conceded);
        let expected_points = if score.forfeit.is_some() { 2 } else { 3 };
        assert_eq!(a.points + b.points, expected_points);
    }
}

#[test]
fn test_strong_team_rating_moves_with_result() {
    let sim = no_forfeits();
    let mut rng = simulation_rng(Some(2024));

    for _ in 0..200 {
        let mut strong = team("Strong", "STR", 1800.0);
        let mut weak = team("Weak", "WEA", 1200.0);

        let score = sim.simulate(&mut strong, &mut weak, &mut rng);

        assert!(score.forfeit.is_none());
        match score.winner() {
            Side::A => {
                assert!(strong.rating > 1800.0);
                assert!(weak.rating < 1200.0);
            }
            Side::B => {
                assert!(strong.rating < 1800.0);
                assert!(weak.rating > 1200.0);
            }
        }
    }
}

#[test]
fn test_rating_exchange_is_zero_sum() {
    let sim = no_forfeits();
    let mut rng = simulation_rng(Some(3));
    let mut a = team("Spain", "ESP", 1650.0);
    let mut b = team("Greece", "GRE", 1480.0);

    sim.simulate(&mut a, &mut b, &mut rng);

    assert!((a.rating + b.rating - 3130.0).abs() < 1e-9);
}
