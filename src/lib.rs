#![forbid(unsafe_code)]

pub mod catalog;
pub mod core;
pub mod curve;
pub mod engine;
pub mod error;
pub mod motion;
pub mod project;
pub mod sample;
pub mod svg;

pub use catalog::{Catalog, GeoPoint};
pub use self::core::{Canvas, Point, Vec2};
pub use curve::RouteCurve;
pub use engine::{Engine, EngineConfig, Scene, StopMarker};
pub use error::{GeoRouteError, GeoRouteResult};
pub use motion::{FRAME_SCALE, MarkerUpdate, MotionScheduler};
pub use project::project;
pub use sample::{RoutePath, SampledRoutes, sample_routes};
