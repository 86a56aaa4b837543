//! End-to-end turn scenarios driven through `GameSession` and `GameController`.
//!
//! Each test plays real ticks, the way the frame loop would.

use snakes_ladders::board::ShortcutKind;
use snakes_ladders::core::{EngineConfig, NotificationPolicy, PlayerId, Square};
use snakes_ladders::engine::{
    Command, CommandOutcome, GameController, GameEvent, GameSession, PhaseKind, RollOutcome,
    TurnResult,
};
use snakes_ladders::rules::MoveResolver;
use snakes_ladders::BoardTopology;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config() -> EngineConfig {
    EngineConfig::default().with_step_delay(2)
}

/// Drive a session to a chosen start square using only legal moves.
///
/// Player 0 takes the planned rolls; any other player rolls 1 each turn.
fn play_rolls(session: &mut GameSession, rolls: &[u8]) {
    for &die in rolls {
        while session.current_player() != PlayerId::new(0) {
            session.request_move(1);
            run_turn(session);
        }
        session.request_move(die);
        run_turn(session);
    }
}

/// Tick until the turn hands over or the game ends; returns the events.
fn run_turn(session: &mut GameSession) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..1_000 {
        if session.can_roll() || session.is_game_over() {
            return events;
        }
        events.extend(session.tick());
    }
    panic!("turn did not finish within 1000 ticks");
}

fn squares(ns: &[u8]) -> Vec<Square> {
    ns.iter().copied().map(Square::new).collect()
}

#[test]
fn test_ladder_scenario() {
    init_tracing();
    let mut session = GameSession::standard(1, config()).unwrap();
    play_rolls(&mut session, &[1]); // 1 -> 2
    assert_eq!(session.position(PlayerId::new(0)), Some(Square::new(2)));

    assert_eq!(
        session.request_move(2),
        RollOutcome::Moving {
            die: 2,
            destination: Square::new(14)
        }
    );
    assert_eq!(
        session.pending_move().unwrap().path.to_vec(),
        squares(&[3, 4, 14])
    );

    let events = run_turn(&mut session);
    let stepped: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Stepped { square, .. } => Some(square.number()),
            _ => None,
        })
        .collect();
    assert_eq!(stepped, vec![3, 4]);
    assert!(events.contains(&GameEvent::MoveCommitted {
        player: PlayerId::new(0),
        square: Square::new(14),
        redirect: Some(ShortcutKind::Ladder),
    }));
    assert_eq!(
        session.active_notification().map(|n| n.category),
        Some(ShortcutKind::Ladder)
    );
}

#[test]
fn test_snake_scenario() {
    let resolver = MoveResolver::new(BoardTopology::standard());
    let outcome = resolver.resolve(Square::new(60), 4);

    assert!(outcome.accepted);
    assert_eq!(outcome.path.to_vec(), squares(&[61, 62, 63, 64, 60]));
    assert_eq!(outcome.final_position, Square::new(60));
    assert_eq!(outcome.redirect, Some(ShortcutKind::Snake));

    // Reach 60 legally: 1 -> 4 (ladder 14) ... 40 (ladder 59) -> 60.
    let mut session = GameSession::standard(1, config()).unwrap();
    play_rolls(&mut session, &[3, 5, 5, 5, 6, 4, 1, 1]);
    assert_eq!(session.position(PlayerId::new(0)), Some(Square::new(60)));

    session.request_move(4);
    let events = run_turn(&mut session);
    assert!(events.contains(&GameEvent::MoveCommitted {
        player: PlayerId::new(0),
        square: Square::new(60),
        redirect: Some(ShortcutKind::Snake),
    }));
    assert_eq!(
        session.active_notification().map(|n| n.category),
        Some(ShortcutKind::Snake)
    );
}

#[test]
fn test_overshoot_scenario() {
    let mut session = GameSession::standard(2, config()).unwrap();
    // 1 -> 4 -> 14, 14 -> 20 -> 38, 38 -> 40 -> 59, 59 -> 63 -> 81, 81 -> 86,
    // 86 -> 92, 92 -> 97.
    play_rolls(&mut session, &[3, 6, 2, 4, 5, 6, 5]);
    assert_eq!(session.position(PlayerId::new(0)), Some(Square::new(97)));

    // Player 1 takes a turn; back to player 0.
    session.request_move(1);
    run_turn(&mut session);
    assert_eq!(session.current_player(), PlayerId::new(0));

    assert_eq!(session.request_move(6), RollOutcome::Rejected { die: 6 });
    assert_eq!(session.phase().kind(), PhaseKind::TurnComplete);

    let events = run_turn(&mut session);
    assert_eq!(
        events,
        vec![GameEvent::TurnPassed {
            next: PlayerId::new(1)
        }]
    );
    assert_eq!(session.position(PlayerId::new(0)), Some(Square::new(97)));
    assert_eq!(
        session.history().last().map(|r| r.result),
        Some(TurnResult::Rejected)
    );
}

#[test]
fn test_exact_win_scenario() {
    let mut session = GameSession::standard(2, config()).unwrap();
    // Same climb as above to 92, then step to 94 (95 is a snake head).
    play_rolls(&mut session, &[3, 6, 2, 4, 5, 6, 2]);
    assert_eq!(session.position(PlayerId::new(0)), Some(Square::new(94)));

    session.request_move(1);
    run_turn(&mut session);
    session.request_move(6);
    let events = run_turn(&mut session);

    assert_eq!(
        events.last(),
        Some(&GameEvent::GameWon {
            winner: PlayerId::new(0)
        })
    );
    assert!(session.is_game_over());
    assert_eq!(session.winner(), Some(PlayerId::new(0)));
    assert_eq!(session.position(PlayerId::new(0)), Some(Square::LAST));
}

#[test]
fn test_two_player_rotation() {
    let mut session = GameSession::standard(2, config()).unwrap();
    assert_eq!(session.current_player(), PlayerId::new(0));

    session.request_move(4); // 1 -> 5
    run_turn(&mut session);
    assert_eq!(session.current_player(), PlayerId::new(1));

    session.request_move(1); // 1 -> 2
    run_turn(&mut session);
    assert_eq!(session.current_player(), PlayerId::new(0));

    assert_eq!(session.position(PlayerId::new(0)), Some(Square::new(5)));
    assert_eq!(session.position(PlayerId::new(1)), Some(Square::new(2)));
}

#[test]
fn test_four_player_rotation_wraps() {
    let mut session = GameSession::standard(4, config()).unwrap();
    let mut seen = Vec::new();
    for _ in 0..8 {
        seen.push(session.current_player().0);
        session.request_move(1);
        run_turn(&mut session);
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn test_blocking_policy_through_controller() {
    let config = config()
        .with_notification_ticks(30)
        .with_notification_policy(NotificationPolicy::Blocking);
    let mut controller = GameController::new(config);
    controller.handle(Command::Start(2)).unwrap();

    // Keep rolling until someone hits a shortcut.
    let mut guard = 0;
    loop {
        guard += 1;
        assert!(guard < 10_000, "no shortcut reached");
        controller.handle(Command::Roll).unwrap();
        if let Some(GameEvent::MoveCommitted {
            redirect: Some(_), ..
        }) = controller.tick()
        {
            break;
        }
        if controller.session().unwrap().is_game_over() {
            controller.reset_session(2).unwrap();
        }
    }

    // Rolls stay locked for the whole message.
    for _ in 0..30 {
        assert_eq!(
            controller.handle(Command::Roll).unwrap(),
            CommandOutcome::Roll(RollOutcome::Ignored)
        );
        controller.tick();
    }
    let session = controller.session().unwrap();
    assert!(session.active_notification().is_none());
    assert_eq!(session.phase().kind(), PhaseKind::TurnComplete);

    controller.tick();
    assert!(controller.session().unwrap().can_roll());
}

#[test]
fn test_no_rolls_after_game_over() {
    let mut session = GameSession::standard(3, config()).unwrap();
    for _ in 0..10_000 {
        if session.is_game_over() {
            break;
        }
        session.request_roll();
        run_turn(&mut session);
    }
    assert!(session.is_game_over());

    let winner = session.winner().unwrap();
    assert_eq!(session.position(winner), Some(Square::LAST));

    let before: Vec<_> = session.players().collect();
    let turns = session.turn_number();
    for _ in 0..50 {
        assert_eq!(session.request_roll(), RollOutcome::Ignored);
        session.tick();
    }
    let after: Vec<_> = session.players().collect();
    assert_eq!(before, after);
    assert_eq!(session.turn_number(), turns);
    assert_eq!(
        after.iter().filter(|p| p.position == Square::LAST).count(),
        1
    );
}
