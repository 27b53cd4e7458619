use rand::Rng;

use crate::{
    catalog::{Catalog, GeoPoint},
    core::Canvas,
    error::{GeoRouteError, GeoRouteResult},
    motion::{MarkerUpdate, MotionScheduler},
    project::project,
    sample::{RoutePath, sample_routes},
};

/// Host-facing configuration. Every field has a default, so a partial (or
/// empty) JSON document deserializes into a working setup.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    /// Catalog names to sample from; `None` means the full catalog.
    pub countries: Option<Vec<String>>,
    /// Passed through to the render surface untouched.
    pub route_color: String,
    pub speed: f64,
    pub show_background: bool,
    pub max_routes: usize,
    pub curvature: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            countries: None,
            route_color: "#436083ff".to_string(),
            speed: 0.01,
            show_background: true,
            max_routes: 15,
            curvature: 0.15,
        }
    }
}

impl EngineConfig {
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    pub fn validate(&self) -> GeoRouteResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GeoRouteError::validation("canvas width/height must be > 0"));
        }
        if !self.speed.is_finite() {
            return Err(GeoRouteError::validation("speed must be finite"));
        }
        if !self.curvature.is_finite() || self.curvature < 0.0 {
            return Err(GeoRouteError::validation(
                "curvature must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Projected stop marker for one referenced catalog point.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StopMarker {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// The static output of one sampling pass, handed to the render surface for
/// the initial draw. Immutable until the next resample.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub routes: Vec<RoutePath>,
    pub stops: Vec<StopMarker>,
}

/// The running engine: owns the sampled scene and the motion chains.
///
/// `start` is the lifecycle entry point and the returned engine is the
/// handle; `dispose` cancels every chain synchronously and is idempotent.
pub struct Engine {
    config: EngineConfig,
    points: Vec<GeoPoint>,
    scene: Scene,
    scheduler: MotionScheduler,
    disposed: bool,
}

impl Engine {
    /// Start against the built-in catalog.
    pub fn start(config: EngineConfig, rng: &mut impl Rng) -> GeoRouteResult<Self> {
        Self::start_with_catalog(config, &Catalog::builtin(), rng)
    }

    #[tracing::instrument(skip_all, fields(max_routes = config.max_routes))]
    pub fn start_with_catalog(
        config: EngineConfig,
        catalog: &Catalog,
        rng: &mut impl Rng,
    ) -> GeoRouteResult<Self> {
        config.validate()?;

        let points = match &config.countries {
            Some(names) => catalog.select(names),
            None => catalog.points().to_vec(),
        };

        let scene = build_scene(&config, &points, rng);
        let scheduler = MotionScheduler::new(&scene.routes, config.speed);

        Ok(Self {
            config,
            points,
            scene,
            scheduler,
            disposed: false,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Advance one animation frame. Empty once disposed.
    pub fn tick(&mut self) -> Vec<MarkerUpdate> {
        self.scheduler.tick()
    }

    /// Throw away the current routes and sample a fresh set. All prior
    /// motion chains are cancelled before the new ones are created. No-op on
    /// a disposed engine.
    #[tracing::instrument(skip_all)]
    pub fn resample(&mut self, rng: &mut impl Rng) {
        if self.disposed {
            return;
        }
        self.scene = build_scene(&self.config, &self.points, rng);
        self.scheduler.rebuild(&self.scene.routes, self.config.speed);
    }

    /// Cancel every in-flight motion chain. Synchronous and idempotent;
    /// every later `tick` publishes nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.scheduler.cancel_all();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

fn build_scene(config: &EngineConfig, points: &[GeoPoint], rng: &mut impl Rng) -> Scene {
    let canvas = config.canvas();
    let sampled = sample_routes(points, config.max_routes, canvas, config.curvature, rng);

    let stops = sampled
        .stops
        .iter()
        .map(|p| {
            let pt = project(p.lat, p.lon, canvas);
            StopMarker {
                name: p.name.clone(),
                x: pt.x,
                y: pt.y,
            }
        })
        .collect();

    Scene {
        canvas,
        routes: sampled.routes,
        stops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn defaults_match_the_documented_values() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert!(config.countries.is_none());
        assert_eq!(config.speed, 0.01);
        assert!(config.show_background);
        assert_eq!(config.max_routes, 15);
    }

    #[test]
    fn empty_json_deserializes_to_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.width, 1920);
        assert_eq!(config.route_color, "#436083ff");
    }

    #[test]
    fn validate_rejects_bad_configs() {
        let mut config = EngineConfig {
            width: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        config.width = 1920;
        config.speed = f64::NAN;
        assert!(config.validate().is_err());

        config.speed = 0.01;
        config.curvature = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn start_builds_one_chain_per_route() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut engine = Engine::start(EngineConfig::default(), &mut rng).unwrap();
        let route_count = engine.scene().routes.len();
        assert_eq!(route_count, 15);

        let updates = engine.tick();
        assert_eq!(updates.len(), route_count);
    }

    #[test]
    fn country_filter_restricts_endpoints() {
        let names = ["Singapore", "Japan", "Germany", "Brazil"];
        let config = EngineConfig {
            countries: Some(names.iter().map(|s| s.to_string()).collect()),
            ..EngineConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let engine = Engine::start(config, &mut rng).unwrap();

        assert_eq!(engine.scene().routes.len(), 2);
        for route in &engine.scene().routes {
            assert!(names.contains(&route.from.name.as_str()));
            assert!(names.contains(&route.to.name.as_str()));
        }
    }

    #[test]
    fn unknown_country_list_degrades_to_empty_scene() {
        let config = EngineConfig {
            countries: Some(vec!["Atlantis".to_string()]),
            ..EngineConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let mut engine = Engine::start(config, &mut rng).unwrap();
        assert!(engine.scene().routes.is_empty());
        assert!(engine.scene().stops.is_empty());
        assert!(engine.tick().is_empty());
    }

    #[test]
    fn dispose_is_idempotent_and_silences_ticks() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut engine = Engine::start(EngineConfig::default(), &mut rng).unwrap();
        assert!(!engine.tick().is_empty());

        engine.dispose();
        engine.dispose();
        assert!(engine.is_disposed());
        for _ in 0..3 {
            assert!(engine.tick().is_empty());
        }
    }

    #[test]
    fn resample_after_dispose_is_a_noop() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut engine = Engine::start(EngineConfig::default(), &mut rng).unwrap();
        engine.dispose();
        engine.resample(&mut rng);
        assert!(engine.tick().is_empty());
    }

    #[test]
    fn resample_swaps_the_scene_and_keeps_ticking() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut engine = Engine::start(EngineConfig::default(), &mut rng).unwrap();
        engine.tick();

        engine.resample(&mut rng);
        let updates = engine.tick();
        assert_eq!(updates.len(), engine.scene().routes.len());
    }
}
