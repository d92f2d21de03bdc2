//! Engine-versus-engine match tests.

use paper_soccer::core::GameRng;
use paper_soccer::games::paper_soccer::{
    play_match, ArenaConfig, GoalDistance, MatchEnd, MatchRecord, PaperSoccerState,
    RandomHeuristic, Side,
};
use paper_soccer::rules::SearchState;
use paper_soccer::search::{AlphaBeta, HeuristicBuilder};

fn random_match(width: u32, height: u32, seed: u64) -> (PaperSoccerState, MatchRecord) {
    let mut rng = GameRng::new(seed);
    let mut state = PaperSoccerState::new(width, height, 2).unwrap();
    let mut north = AlphaBeta::new(RandomHeuristic::new(rng.fork(), 2), Side::North);
    let mut south = AlphaBeta::new(RandomHeuristic::new(rng.fork(), 2), Side::South);

    let record = play_match(&mut state, &mut north, &mut south, &ArenaConfig::default()).unwrap();
    (state, record)
}

#[test]
fn test_random_match_finishes() {
    let (mut state, record) = random_match(4, 6, 7);

    assert!(record.winner.is_some());
    assert_ne!(record.end, MatchEnd::TurnLimit);
    assert_eq!(record.actions, state.history());
    assert_eq!(record.winner, state.winner());
    assert!(state.is_finished(Side::North).is_terminal());
}

#[test]
fn test_same_seed_same_match() {
    let (_, first) = random_match(6, 8, 42);
    let (_, second) = random_match(6, 8, 42);

    assert_eq!(first.actions, second.actions);
    assert_eq!(first.winner, second.winner);
    assert_eq!(first.end, second.end);
}

#[test]
fn test_match_end_matches_final_position() {
    for seed in 0..5 {
        let (state, record) = random_match(4, 4, seed);
        match record.end {
            MatchEnd::Goal => {
                assert!(state.is_in_goal());
                assert_eq!(record.winner, state.goal_scorer());
            }
            MatchEnd::Stalemate => {
                assert!(!state.is_in_goal());
                assert_eq!(record.winner, Some(state.side_to_move().opponent()));
            }
            MatchEnd::TurnLimit => panic!("match {seed} hit the turn cap"),
        }
    }
}

#[test]
fn test_goal_seeker_beats_turn_cap() {
    let mut state = PaperSoccerState::new(4, 6, 2).unwrap();
    let mut north = AlphaBeta::new(
        HeuristicBuilder::<PaperSoccerState>::new(3)
            .add(GoalDistance::new(3), 1.0)
            .build(),
        Side::North,
    );
    let mut south = AlphaBeta::new(GoalDistance::new(3), Side::South);

    let config = ArenaConfig::new().with_max_turns(200);
    let record = play_match(&mut state, &mut north, &mut south, &config).unwrap();

    assert!(record.winner.is_some());
    assert!(record.turns() <= 200);
    assert!(record.nodes_for(Side::North) > 0);
    assert!(record.nodes_for(Side::South) > 0);
}

#[test]
fn test_record_serializes() {
    let (_, record) = random_match(4, 4, 3);
    let json = serde_json::to_string(&record).unwrap();
    let back: MatchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
