use flappy_bird::entities::*;

#[test]
fn status_eq() {
    // GameStatus derives PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(GameStatus::GameOver.clone(), GameStatus::GameOver);
}

#[test]
fn round_state_clone_is_independent() {
    let original = RoundState {
        bird: Bird {
            x: 80.0,
            y: 300.0,
            velocity: 0.0,
            radius: 20.0,
        },
        pipes: Vec::new(),
        score: 0,
        high_score: 12,
        status: GameStatus::Playing,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.bird.y = 99.0;
    cloned.score = 999;
    cloned.pipes.push(Pipe {
        x: 400.0,
        gap_top: 150.0,
        passed: false,
    });

    assert_eq!(original.bird.y, 300.0);
    assert_eq!(original.score, 0);
    assert!(original.pipes.is_empty());
    assert_eq!(original.high_score, 12);
}
