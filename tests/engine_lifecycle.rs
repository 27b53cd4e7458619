use std::collections::BTreeSet;

use georoute::{Engine, EngineConfig};
use rand::{SeedableRng, rngs::StdRng};

fn seeded_engine(seed: u64) -> Engine {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut rng = StdRng::seed_from_u64(seed);
    Engine::start(EngineConfig::default(), &mut rng).unwrap()
}

#[test]
fn sampled_scene_respects_invariants() {
    let engine = seeded_engine(1);
    let scene = engine.scene();

    assert_eq!(scene.routes.len(), 15);

    for route in &scene.routes {
        assert_ne!(route.from.name, route.to.name);
    }

    let endpoint_names: BTreeSet<&str> = scene
        .routes
        .iter()
        .flat_map(|r| [r.from.name.as_str(), r.to.name.as_str()])
        .collect();
    let stop_names: BTreeSet<&str> = scene.stops.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(stop_names, endpoint_names);
}

#[test]
fn every_tick_publishes_one_update_per_route() {
    let mut engine = seeded_engine(2);
    let route_count = engine.scene().routes.len();

    for _ in 0..10 {
        let updates = engine.tick();
        assert_eq!(updates.len(), route_count);
        let indices: BTreeSet<usize> = updates.iter().map(|u| u.index).collect();
        assert_eq!(indices.len(), route_count);
        assert!(indices.iter().all(|&i| i < route_count));
    }
}

#[test]
fn same_seed_reproduces_scene_and_motion() {
    let mut a = seeded_engine(77);
    let mut b = seeded_engine(77);

    let pairs = |e: &Engine| {
        e.scene()
            .routes
            .iter()
            .map(|r| (r.from.name.clone(), r.to.name.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(pairs(&a), pairs(&b));
    assert_eq!(a.tick(), b.tick());
}

#[test]
fn dispose_silences_all_further_frames() {
    let mut engine = seeded_engine(3);
    assert!(!engine.tick().is_empty());

    engine.dispose();
    for _ in 0..5 {
        assert!(engine.tick().is_empty());
    }

    // A second dispose stays a no-op.
    engine.dispose();
    assert!(engine.tick().is_empty());
}

#[test]
fn resample_replaces_routes_without_stale_chains() {
    let mut engine = seeded_engine(4);
    engine.tick();
    engine.tick();

    let mut rng = StdRng::seed_from_u64(40);
    engine.resample(&mut rng);

    let route_count = engine.scene().routes.len();
    let updates = engine.tick();
    assert_eq!(updates.len(), route_count);
    assert!(updates.iter().all(|u| u.index < route_count));
}
