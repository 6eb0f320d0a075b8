//! End-to-end protocol tests.
//!
//! These drive a whole play-through the way a host UI would: flips, ticks
//! once the judging delay elapses, popup continuations, and the emitted
//! event stream.

use std::time::Duration;

use pair_match::{
    CardDefinition, CardId, FlipOutcome, GameConfig, GameEvent, GameRng, MatchKey, MemoryGame,
    RecordingSink, Resolution, ResolverPhase,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn new_game(defs: &[CardDefinition], seed: u64) -> MemoryGame<RecordingSink> {
    MemoryGame::new(
        defs,
        7,
        GameConfig::default(),
        &mut GameRng::new(seed),
        RecordingSink::new(),
    )
}

fn pair(game: &MemoryGame<RecordingSink>, key: u32) -> [CardId; 2] {
    game.board().pair(MatchKey::new(key)).unwrap()
}

/// Flip both cards of a pair and resolve the judgment, advancing `now`.
fn match_pair(game: &mut MemoryGame<RecordingSink>, ids: [CardId; 2], now: &mut Duration) -> Resolution {
    assert_eq!(game.flip(ids[0], *now), FlipOutcome::Awaiting);
    let outcome = game.flip(ids[1], *now);
    let FlipOutcome::Judging { due_at, .. } = outcome else {
        panic!("expected Judging, got {outcome:?}");
    };
    *now = due_at;
    game.tick(*now).expect("judgment due")
}

/// The reference scenario: one plain pair, one described pair.
#[test]
fn test_two_pair_scenario() {
    let defs = vec![
        CardDefinition::new("a.png"),
        CardDefinition::new("b.png").with_description("x"),
    ];
    let mut game = new_game(&defs, 42);
    game.present();
    assert_eq!(game.board().len(), 4);

    let mut now = ms(0);

    // Pair A: no description, game not finished, timer keeps running.
    let a = pair(&game, 0);
    let resolution = match_pair(&mut game, a, &mut now);
    assert_eq!(
        resolution,
        Resolution::Matched {
            first: a[0],
            second: a[1],
            finished: false,
            popup: None,
            feedback: false,
        }
    );
    assert_eq!(game.removed_count(), 2);
    assert!(!game.is_finished());
    assert!(game.timer().is_running());

    // Pair B: described, finishes the game behind the popup.
    let b = pair(&game, 1);
    let resolution = match_pair(&mut game, b, &mut now);
    let Resolution::Matched { finished, popup: Some(popup), feedback, .. } = resolution else {
        panic!("expected popup, got {resolution:?}");
    };
    assert!(finished);
    assert!(!feedback);
    assert_eq!(popup.description, "x");
    assert_eq!(game.removed_count(), 4);
    assert!(game.is_finished());
    assert!(!game.timer().is_running());

    // Continuation: completion feedback, since the game finished.
    assert!(game.popup_closed(now + ms(2000)));

    assert_eq!(game.moves(), 4);
    let events = &game.event_sink().events;
    assert_eq!(events[0], GameEvent::Attempted);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::Interacted { .. }))
            .count(),
        4
    );
    assert!(matches!(events.last(), Some(GameEvent::Scored(_))));
}

#[test]
fn test_completion_fires_exactly_once_either_order() {
    for order in [[0u32, 1], [1, 0]] {
        let defs = vec![CardDefinition::new("a.png"), CardDefinition::new("b.png")];
        let mut game = new_game(&defs, 9);
        let mut now = ms(0);

        for key in order {
            let ids = pair(&game, key);
            match_pair(&mut game, ids, &mut now);
        }

        assert!(game.is_finished());
        let scored = game
            .event_sink()
            .count_matching(|e| matches!(e, GameEvent::Scored(s)
                if s.score == 1 && s.max_score == 1 && s.verb == "completed"));
        assert_eq!(scored, 1, "order {order:?}");
    }
}

#[test]
fn test_mismatches_do_not_advance_completion() {
    let defs = vec![CardDefinition::new("a.png"), CardDefinition::new("b.png")];
    let mut game = new_game(&defs, 3);
    let [a1, a2] = pair(&game, 0);
    let [b1, b2] = pair(&game, 1);

    let mut now = ms(0);
    for (x, y) in [(a1, b1), (a2, b2), (b1, a2)] {
        game.flip(x, now);
        let FlipOutcome::Judging { due_at, .. } = game.flip(y, now) else {
            panic!("expected Judging");
        };
        now = due_at;
        assert!(matches!(game.tick(now), Some(Resolution::Mismatched { .. })));
    }

    assert_eq!(game.removed_count(), 0);
    assert_eq!(game.moves(), 6);
    assert_eq!(game.phase(), ResolverPhase::Idle);
    assert!(game.board().cards().all(|c| c.is_hidden()));
}

#[test]
fn test_move_counter_counts_individual_flips() {
    let defs = vec![CardDefinition::new("a.png"), CardDefinition::new("b.png")];
    let mut game = new_game(&defs, 5);
    let [a1, a2] = pair(&game, 0);
    let [b1, b2] = pair(&game, 1);

    game.flip(a1, ms(0)); // counted
    game.flip(a1, ms(1)); // ignored: already flipped
    game.flip(b1, ms(2)); // counted, judgment pending
    game.flip(b2, ms(3)); // counted: opens the next pair during the window
    assert_eq!(game.moves(), 3);

    game.tick(ms(900)); // (a1, b1) mismatch, both flip back
    game.flip(a2, ms(1000)); // counted: pairs with the waiting b2
    assert_eq!(game.moves(), 4);
}

#[test]
fn test_custom_judging_delay() {
    let defs = vec![CardDefinition::new("a.png")];
    let config = GameConfig::new().with_judging_delay(ms(50));
    let mut game = MemoryGame::new(&defs, 0, config, &mut GameRng::new(1), RecordingSink::new());

    let [a1, a2] = pair(&game, 0);
    game.flip(a1, ms(0));
    let FlipOutcome::Judging { due_at, .. } = game.flip(a2, ms(10)) else {
        panic!("expected Judging");
    };
    assert_eq!(due_at, ms(60));
    assert!(game.tick(ms(59)).is_none());
    assert!(game.tick(ms(60)).is_some());
}

#[test]
fn test_elapsed_excludes_popup_window() {
    let defs = vec![
        CardDefinition::new("a.png").with_description("alpha"),
        CardDefinition::new("b.png"),
    ];
    let mut game = new_game(&defs, 11);
    let mut now = ms(0);

    let a = pair(&game, 0);
    let resolution = match_pair(&mut game, a, &mut now);
    assert!(matches!(resolution, Resolution::Matched { popup: Some(_), .. }));
    let paused_at = now;

    // Player reads the popup for five seconds.
    now += ms(5000);
    game.popup_closed(now);
    assert!(game.timer().is_running());

    now += ms(300);
    assert_eq!(game.elapsed(now), paused_at + ms(300));
}

#[test]
fn test_finished_game_ignores_everything() {
    let defs = vec![CardDefinition::new("a.png")];
    let mut game = new_game(&defs, 2);
    let mut now = ms(0);
    let a = pair(&game, 0);
    match_pair(&mut game, a, &mut now);
    assert!(game.is_finished());

    assert_eq!(game.flip(a[0], now), FlipOutcome::Ignored);
    assert!(game.tick(now + ms(10_000)).is_none());
    assert_eq!(game.moves(), 2);
}

#[test]
fn test_invalid_definitions_shrink_board_silently() {
    let defs = vec![
        CardDefinition::new("a.png"),
        CardDefinition::empty(),
        CardDefinition::new("b.png"),
        CardDefinition::new(""),
    ];
    let game = new_game(&defs, 4);

    assert_eq!(game.board().len(), 4);
    assert!(game.board().pair(MatchKey::new(0)).is_some());
    assert!(game.board().pair(MatchKey::new(1)).is_none());
    assert!(game.board().pair(MatchKey::new(2)).is_some());
    assert!(game.board().pair(MatchKey::new(3)).is_none());
}
