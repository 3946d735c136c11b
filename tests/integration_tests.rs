use wobbly::{AnimationCause, Model, NoOpStepObserver, Rect, StepOutcome, Surface, Vec2, Wobbly, WobblyConfig};

/// Kinetic plus spring potential energy, in model units.
fn energy(model: &Model<f32>, config: &WobblyConfig<f32>) -> f32 {
    let kinetic: f32 = model
        .masses()
        .iter()
        .map(|m| 0.5 * config.mass * (m.velocity.x * m.velocity.x + m.velocity.y * m.velocity.y))
        .sum();
    let potential: f32 = model
        .springs()
        .iter()
        .map(|s| {
            let d = model.masses()[s.b].position - model.masses()[s.a].position - s.offset;
            0.25 * config.spring_k * (d.x * d.x + d.y * d.y)
        })
        .sum();
    kinetic + potential
}

fn released_model() -> Model<f32> {
    let mut model = Model::build(&Rect::new(0.0, 0.0, 400.0, 200.0)).unwrap();
    model.grab(Vec2::new(200.0, 100.0), 0.05);
    model.translate_anchor(Vec2::new(40.0, 15.0));
    model.release_anchor();
    model
}

#[test]
fn released_grid_settles() {
    let mut model = released_model();
    let config = WobblyConfig::new();

    let mut settled_after = None;
    for tick in 0..5000 {
        let outcome = model.step(16.0, &config, &mut NoOpStepObserver);
        if !outcome.is_animating() {
            settled_after = Some(tick);
            break;
        }
    }
    assert!(settled_after.is_some(), "model never settled");
}

#[test]
fn energy_decays_once_unpinned() {
    let mut model = released_model();
    let config = WobblyConfig::new();
    let initial = energy(&model, &config);
    assert!(initial > 0.0);

    let mut checkpoints = Vec::new();
    for tick in 1..=300 {
        model.step(15.0, &config, &mut NoOpStepObserver);
        if tick % 50 == 0 {
            checkpoints.push(energy(&model, &config));
        }
    }
    assert!(checkpoints[0] < initial);
    for pair in checkpoints.windows(2) {
        assert!(pair[1] <= pair[0], "energy grew: {:?}", checkpoints);
    }
}

#[test]
fn settled_model_keeps_its_shape() {
    let mut model = released_model();
    let config = WobblyConfig::new();
    for _ in 0..5000 {
        if !model.step(16.0, &config, &mut NoOpStepObserver).is_animating() {
            break;
        }
    }
    let width = model.bottom_right().x - model.top_left().x;
    let height = model.bottom_right().y - model.top_left().y;
    assert!((width - 400.0).abs() < 10.0, "width {}", width);
    assert!((height - 200.0).abs() < 10.0, "height {}", height);
}

#[test]
fn pinned_anchor_never_moves_under_physics() {
    let mut model = Model::build(&Rect::new(0.0f32, 0.0, 300.0, 300.0)).unwrap();
    let anchor = model.grab(Vec2::new(0.0, 0.0), 0.05);
    model.translate_anchor(Vec2::new(-50.0, 0.0));
    let pinned_at = model.masses()[anchor].position;

    let config = WobblyConfig::new();
    for _ in 0..200 {
        model.step(16.0, &config, &mut NoOpStepObserver);
    }
    assert_eq!(model.masses()[anchor].position, pinned_at);
    assert_eq!(model.masses()[anchor].velocity, Vec2::zero());
}

#[test]
fn sub_step_count_follows_elapsed_time() {
    let mut model = released_model();
    let config = WobblyConfig::new();
    match model.step(61.0, &config, &mut NoOpStepObserver) {
        StepOutcome::Stepped { sub_steps, .. } => assert_eq!(sub_steps, 4),
        StepOutcome::Pending => panic!("61ms should run four 15ms sub-steps"),
    }
    // 1ms carried + 14.5ms = one more sub-step
    match model.step(14.5, &config, &mut NoOpStepObserver) {
        StepOutcome::Stepped { sub_steps, .. } => assert_eq!(sub_steps, 1),
        StepOutcome::Pending => panic!("carried fraction was lost"),
    }
}

#[test]
fn settle_thresholds_are_configurable() {
    let config = WobblyConfig::new().with_thresholds(1e9, 1e9);
    let mut model = released_model();
    let outcome = model.step(15.0, &config, &mut NoOpStepObserver);
    assert!(!outcome.is_animating());
}

#[test]
fn non_finite_elapsed_time_runs_nothing() {
    let mut model = released_model();
    let config = WobblyConfig::new();
    let before = model.masses().to_vec();
    assert_eq!(model.step(f32::INFINITY, &config, &mut NoOpStepObserver), StepOutcome::Pending);
    assert_eq!(model.step(f32::NAN, &config, &mut NoOpStepObserver), StepOutcome::Pending);
    assert_eq!(model.masses(), &before[..]);

    // The carried fraction stays usable afterwards.
    match model.step(15.0, &config, &mut NoOpStepObserver) {
        StepOutcome::Stepped { sub_steps, .. } => assert_eq!(sub_steps, 1),
        StepOutcome::Pending => panic!("accumulator was poisoned"),
    }
}

#[test]
fn huge_elapsed_time_is_capped() {
    let mut model = released_model();
    let config = WobblyConfig::new();
    match model.step(1e12, &config, &mut NoOpStepObserver) {
        StepOutcome::Stepped { sub_steps, .. } => assert_eq!(sub_steps, config.max_sub_steps),
        StepOutcome::Pending => panic!("1e12ms should run sub-steps"),
    }
}

#[test]
fn tiny_sub_step_is_capped() {
    let mut model = released_model();
    let config = WobblyConfig::new().with_sub_step_ms(f32::MIN_POSITIVE).with_max_sub_steps(8);
    match model.step(16.0, &config, &mut NoOpStepObserver) {
        StepOutcome::Stepped { sub_steps, .. } => assert_eq!(sub_steps, 8),
        StepOutcome::Pending => panic!("overflowing quotient should saturate to the cap"),
    }
}

#[test]
fn tick_returns_for_unbounded_elapsed_time() {
    let mut surface = Surface::new(Rect::new(0.0, 0.0, 300.0, 300.0), 8, 8);
    let mut wobbly = Wobbly::initialize(&mut surface, WobblyConfig::new()).unwrap();
    wobbly.grab(&mut surface, 0.0, 0.0);
    wobbly.move_by(&mut surface, 80.0, 0.0);
    wobbly.ungrab();
    assert!(wobbly.tick(&mut surface, 16.0, &mut NoOpStepObserver));
    assert!(wobbly.animation().contains(AnimationCause::ResidualVelocity));

    // Both calls must return; the model stays finite.
    wobbly.tick(&mut surface, f32::INFINITY, &mut NoOpStepObserver);
    wobbly.tick(&mut surface, 1e12, &mut NoOpStepObserver);
    let model = wobbly.model().unwrap();
    assert!(model.masses().iter().all(|m| m.position.x.is_finite() && m.position.y.is_finite()));
}
