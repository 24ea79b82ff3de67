use planet_mcts::{PlannerConfig, PlannerError};

#[test]
fn test_config_builder_methods() {
    // Test that all builder methods correctly set their respective values
    let config = PlannerConfig::default()
        .with_iterations(500)
        .with_exploration_constant(2.0)
        .with_max_depth(9)
        .with_randomize(false)
        .with_max_rollout_moves(200)
        .with_seed(42);

    // Verify each setting was applied correctly
    assert_eq!(config.iterations, 500);
    assert_eq!(config.exploration_constant, 2.0);
    assert_eq!(config.max_depth, Some(9));
    assert!(!config.randomize);
    assert_eq!(config.max_rollout_moves, Some(200));
    assert_eq!(config.seed, Some(42));

    assert_eq!(config.without_max_depth().max_depth, None);
}

#[test]
fn test_config_default_values() {
    let config = PlannerConfig::default();

    // sqrt(2), i.e. sqrt(2 * ln(N) / n)
    assert!((config.exploration_constant - 1.414).abs() < 0.001);
    assert_eq!(config.iterations, 10);
    assert_eq!(config.max_depth, None);
    assert!(config.randomize);
    assert_eq!(config.max_rollout_moves, None);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let negative = PlannerConfig::default().with_exploration_constant(-1.0);
    assert!(matches!(
        negative.validate(),
        Err(PlannerError::InvalidConfiguration(_))
    ));

    let infinite = PlannerConfig::default().with_exploration_constant(f64::INFINITY);
    assert!(infinite.validate().is_err());

    let no_rollout = PlannerConfig::default().with_max_rollout_moves(0);
    assert!(no_rollout.validate().is_err());

    let greedy = PlannerConfig::default()
        .with_exploration_constant(0.0)
        .with_iterations(0);
    assert!(greedy.validate().is_ok());
}
