use snake_tui::game::{
    Command, Direction, EndReason, GameConfig, GameEngine, GamePhase, Position, ScriptedCells,
};
use snake_tui::storage::{HighScoreStore, JsonFileStore, MemoryStore};
use tempfile::TempDir;

#[test]
fn eat_then_hit_the_wall() {
    let store = MemoryStore::new();
    let mut engine = GameEngine::with_parts(
        GameConfig::default(),
        ScriptedCells::cells(&[(10, 9), (10, 2)]),
        store.clone(),
    );

    engine.apply(Command::Turn(Direction::Up));
    assert_eq!(engine.phase(), GamePhase::Running);

    let outcome = engine.tick();
    assert!(outcome.ate_food);
    assert_eq!(engine.state().score, 1);
    assert_eq!(store.get(), 1);
    assert_eq!(engine.state().food, Some(Position::new(10, 2)));

    let mut last = outcome;
    while engine.phase() == GamePhase::Running {
        last = engine.tick();
    }

    assert_eq!(last.end_reason, Some(EndReason::Wall));
    assert_eq!(engine.state().snake.head(), Position::new(10, -1));
    assert_eq!(engine.state().score, 2);
    assert_eq!(store.get(), 2);
}

#[test]
fn high_score_survives_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("high_score.json");

    {
        let mut engine = GameEngine::with_parts(
            GameConfig::default(),
            ScriptedCells::cells(&[(11, 10), (0, 0)]),
            JsonFileStore::new(&path),
        );
        engine.start();
        engine.tick();
        assert_eq!(engine.state().high_score, 1);
    }

    assert_eq!(JsonFileStore::new(&path).load().unwrap(), 1);

    let engine = GameEngine::with_parts(
        GameConfig::default(),
        ScriptedCells::cells(&[(0, 0)]),
        JsonFileStore::new(&path),
    );
    assert_eq!(engine.state().high_score, 1);
    assert_eq!(engine.state().score, 0);
}

#[test]
fn pause_freezes_the_board() {
    let mut engine = GameEngine::with_parts(
        GameConfig::default(),
        ScriptedCells::cells(&[(0, 0)]),
        MemoryStore::new(),
    );

    engine.apply(Command::Start);
    engine.tick();
    engine.apply(Command::Pause);
    engine.apply(Command::Pause);

    let frozen = engine.snapshot();
    for _ in 0..5 {
        engine.tick();
    }
    assert_eq!(engine.snapshot(), frozen);
    assert_eq!(engine.scheduled_period(), None);

    engine.apply(Command::Resume);
    engine.tick();
    assert_eq!(engine.state().snake.head(), Position::new(12, 10));
}

#[test]
fn corrupt_high_score_file_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("high_score.json");
    let corrupt = r#"{"snakeHighScore": "40"}"#;
    std::fs::write(&path, corrupt).unwrap();

    let mut engine = GameEngine::with_parts(
        GameConfig::default(),
        ScriptedCells::cells(&[(11, 10), (0, 0)]),
        JsonFileStore::new(&path),
    );
    assert!(!engine.is_persisting());

    engine.start();
    assert!(engine.tick().new_high_score);
    assert_eq!(engine.state().high_score, 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), corrupt);
}

#[test]
fn restart_from_any_phase() {
    let mut engine = GameEngine::with_parts(
        GameConfig::default(),
        ScriptedCells::cells(&[(3, 4)]),
        MemoryStore::new(),
    );

    let setups: [&[Command]; 4] = [
        &[],
        &[Command::Start],
        &[Command::Start, Command::Pause],
        &[Command::Start, Command::AdjustSlider(3.0)],
    ];
    let expected = [
        GamePhase::Idle,
        GamePhase::Running,
        GamePhase::Paused,
        GamePhase::Over,
    ];

    for (setup, phase) in setups.into_iter().zip(expected) {
        for command in setup {
            engine.apply(*command);
        }
        if phase == GamePhase::Over {
            while engine.phase() == GamePhase::Running {
                engine.tick();
            }
            assert_eq!(engine.state().end_reason, Some(EndReason::Wall));
        } else if phase != GamePhase::Idle {
            engine.tick();
        }
        assert_eq!(engine.phase(), phase);

        engine.apply(Command::Restart);

        let state = engine.state();
        assert_eq!(state.snake.body, vec![Position::new(10, 10)]);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.end_reason, None);
        assert_eq!(state.steps, 0);
        assert_eq!(state.speed, state.slider);
        assert_ne!(state.food, Some(Position::new(10, 10)));
    }
}
