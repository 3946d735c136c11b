use wobbly::{NoOpStepObserver, Rect, Surface, Vec2, Wobbly, WobblyConfig};

fn run_drag() -> Vec<Vec2<f32>> {
    let mut surface = Surface::new(Rect::new(0.0, 0.0, 400.0, 200.0), 8, 8);
    let mut wobbly = Wobbly::initialize(&mut surface, WobblyConfig::new()).unwrap();
    wobbly.grab(&mut surface, 200.0, 100.0);
    for frame in 0..30 {
        wobbly.move_by(&mut surface, 7.0, -3.0);
        wobbly.tick(&mut surface, 16.0 + (frame % 3) as f32, &mut NoOpStepObserver);
    }
    wobbly.ungrab();
    for _ in 0..60 {
        wobbly.tick(&mut surface, 16.0, &mut NoOpStepObserver);
    }
    wobbly.model().unwrap().masses().iter().map(|m| m.position).collect()
}

#[test]
fn drag_sequence_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run_drag()).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
