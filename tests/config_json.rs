use georoute::{Engine, EngineConfig};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn json_fixture_validates_and_starts() {
    let s = include_str!("data/engine_config.json");
    let config: EngineConfig = serde_json::from_str(s).unwrap();
    config.validate().unwrap();

    assert_eq!(config.width, 1280);
    assert_eq!(config.height, 720);
    // Omitted fields fall back to their defaults.
    assert_eq!(config.curvature, 0.15);
    assert_eq!(config.route_color, "#436083ff");

    let mut rng = StdRng::seed_from_u64(9);
    let engine = Engine::start(config, &mut rng).unwrap();
    assert_eq!(engine.scene().routes.len(), 3);
}
