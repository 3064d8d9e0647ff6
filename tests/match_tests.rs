use broadside::{
    Board, Boards, Combatant, Coordinate, EventLog, EventSink, GameEvent, Match, MatchError,
    MatchState, RandomDeployEngine, RandomSelector, ScriptedSelector, SelectorError, Ship,
    ShotOutcome, Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn board_with(ships: &[(Coordinate, Coordinate)]) -> Board {
    let mut board = Board::new(10);
    for &(start, end) in ships {
        board.place_ship(Ship::new(start, end).unwrap()).unwrap();
    }
    board
}

#[test]
fn challenger_wins_mid_round() {
    let mut challenger_board = board_with(&[(c(0, 0), c(0, 2))]);
    let mut defender_board = board_with(&[(c(5, 5), c(5, 6))]);
    let mut log = EventLog::new();

    let challenger = Combatant::new(
        &mut challenger_board,
        ScriptedSelector::new([(5, 5), (5, 6)]),
    );
    let defender = Combatant::new(&mut defender_board, ScriptedSelector::new([(9, 9), (8, 8)]));
    let summary = Match::new(challenger, defender)
        .unwrap()
        .with_observer(&mut log)
        .play()
        .unwrap();

    assert_eq!(summary.winner, Side::Challenger);
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.turns, 3);
    assert_eq!(summary.defender_ships_remaining, 0);
    assert_eq!(summary.challenger_ships_remaining, 1);

    assert_eq!(
        log.events(),
        &[
            GameEvent::Shot {
                shooter: Side::Challenger,
                target: c(5, 5),
                outcome: ShotOutcome::Hit
            },
            GameEvent::Shot {
                shooter: Side::Defender,
                target: c(9, 9),
                outcome: ShotOutcome::Miss
            },
            GameEvent::BoardsUpdated { round: 1 },
            GameEvent::Shot {
                shooter: Side::Challenger,
                target: c(5, 6),
                outcome: ShotOutcome::Sunk
            },
            GameEvent::BoardsUpdated { round: 2 },
            GameEvent::GameOver {
                winner: Side::Challenger
            },
        ]
    );
    assert_eq!(challenger_board.shots_received(), 1);
}

#[test]
fn defender_wins_when_reaching_zero_first() {
    let mut challenger_board = board_with(&[(c(0, 0), c(0, 1))]);
    let mut defender_board = board_with(&[(c(3, 3), c(5, 3))]);

    let challenger = Combatant::new(
        &mut challenger_board,
        ScriptedSelector::new([(3, 3), (4, 3), (9, 9)]),
    );
    let defender = Combatant::new(&mut defender_board, ScriptedSelector::new([(0, 0), (0, 1)]));
    let mut game = Match::new(challenger, defender).unwrap();

    assert_eq!(game.play_round().unwrap(), MatchState::AwaitingTurn(Side::Challenger));
    assert_eq!(
        game.play_round().unwrap(),
        MatchState::GameOver {
            winner: Side::Defender
        }
    );
    assert_eq!(game.winner(), Some(Side::Defender));
    assert_eq!(game.rounds_played(), 2);
    assert_eq!(game.board(Side::Defender).ships_remaining(), 1);
    assert_eq!(game.take_turn().unwrap_err(), MatchError::GameOver);
}

#[test]
fn non_hits_are_reported_in_resolution_order() {
    let mut challenger_board = board_with(&[(c(0, 0), c(0, 1))]);
    let mut defender_board = board_with(&[(c(5, 5), c(5, 6))]);
    let mut log = EventLog::new();

    let challenger = Combatant::new(
        &mut challenger_board,
        ScriptedSelector::new([(-1, 0), (2, 2), (2, 2), (5, 5), (5, 5)]),
    );
    let defender = Combatant::new(
        &mut defender_board,
        ScriptedSelector::new([(9, 9), (9, 8), (9, 7), (9, 6), (9, 5)]),
    );
    let mut game = Match::new(challenger, defender).unwrap();
    game.register_observer(&mut log);
    for _ in 0..5 {
        game.play_round().unwrap();
    }
    assert!(!game.is_over());
    drop(game);

    assert_eq!(
        log.outcomes_for(Side::Challenger),
        vec![
            ShotOutcome::OutOfBounds,
            ShotOutcome::Miss,
            ShotOutcome::AlreadyTargeted,
            ShotOutcome::Hit,
            ShotOutcome::AlreadyTargeted,
        ]
    );
    assert_eq!(defender_board.ships_remaining(), 1);
}

#[test]
fn observers_notified_in_registration_order() {
    struct Tagged<'l> {
        tag: &'static str,
        seen: &'l std::cell::RefCell<Vec<&'static str>>,
    }
    impl EventSink for Tagged<'_> {
        fn notify(&mut self, _event: &GameEvent, _boards: &Boards<'_>) {
            self.seen.borrow_mut().push(self.tag);
        }
    }

    let seen = std::cell::RefCell::new(Vec::new());
    let mut a = board_with(&[(c(0, 0), c(0, 0))]);
    let mut b = board_with(&[(c(1, 1), c(1, 1))]);
    let mut game = Match::new(
        Combatant::new(&mut a, ScriptedSelector::new([(1, 1)])),
        Combatant::new(&mut b, ScriptedSelector::new([(0, 0)])),
    )
    .unwrap()
    .with_observer(Tagged { tag: "first", seen: &seen })
    .with_observer(Tagged { tag: "second", seen: &seen });
    game.take_turn().unwrap();
    drop(game);

    // Shot, BoardsUpdated, GameOver; each delivered to both in order.
    assert_eq!(
        *seen.borrow(),
        vec!["first", "second", "first", "second", "first", "second"]
    );
}

#[test]
fn board_without_ships_cannot_start() {
    let mut empty = Board::new(10);
    let mut armed = board_with(&[(c(0, 0), c(0, 1))]);
    let err = Match::new(
        Combatant::new(&mut armed, ScriptedSelector::default()),
        Combatant::new(&mut empty, ScriptedSelector::default()),
    )
    .err();
    assert_eq!(err, Some(MatchError::NoShips(Side::Defender)));
}

#[test]
fn selector_failure_is_attributed_to_side() {
    let mut a = board_with(&[(c(0, 0), c(0, 1))]);
    let mut b = board_with(&[(c(2, 0), c(2, 1))]);
    let mut game = Match::new(
        Combatant::new(&mut a, ScriptedSelector::new([(9, 9)])),
        Combatant::new(&mut b, ScriptedSelector::default()),
    )
    .unwrap();
    game.take_turn().unwrap();
    assert_eq!(
        game.take_turn().unwrap_err(),
        MatchError::Selector {
            side: Side::Defender,
            source: SelectorError::Exhausted
        }
    );
    assert_eq!(game.state(), MatchState::AwaitingTurn(Side::Defender));
}

#[test]
fn random_vs_random_terminates() {
    let mut rng = SmallRng::seed_from_u64(123);
    let lengths = [5, 4, 3, 3, 2];
    let mut b1 = Board::new(10);
    let mut b2 = Board::new(10);
    b1.deploy_ships(&mut RandomDeployEngine::new(&mut rng), &lengths)
        .unwrap();
    b2.deploy_ships(&mut RandomDeployEngine::new(&mut rng), &lengths)
        .unwrap();

    let mut log = EventLog::new();
    let summary = Match::new(
        Combatant::new(&mut b1, RandomSelector::new(10, SmallRng::seed_from_u64(1))),
        Combatant::new(&mut b2, RandomSelector::new(10, SmallRng::seed_from_u64(2))),
    )
    .unwrap()
    .with_observer(&mut log)
    .play()
    .unwrap();

    let loser = summary.winner.opponent();
    let loser_ships = match loser {
        Side::Challenger => summary.challenger_ships_remaining,
        Side::Defender => summary.defender_ships_remaining,
    };
    assert_eq!(loser_ships, 0);
    assert_eq!(
        log.events().last(),
        Some(&GameEvent::GameOver {
            winner: summary.winner
        })
    );
    let sunk = log
        .outcomes_for(summary.winner)
        .into_iter()
        .filter(|o| *o == ShotOutcome::Sunk)
        .count();
    assert_eq!(sunk, lengths.len());
    assert!(log
        .outcomes_for(Side::Challenger)
        .iter()
        .all(|o| *o != ShotOutcome::OutOfBounds));
}
