use std::collections::BTreeSet;

use rand::Rng;

use crate::{catalog::GeoPoint, core::Canvas, curve::RouteCurve, project::project};

/// One sampled route. `index` is the stable arena slot correlating the path
/// with its motion chain and its rendered elements.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RoutePath {
    pub index: usize,
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub curve: RouteCurve,
}

/// Result of one sampling pass: the routes plus the catalog reduced to the
/// points actually referenced by a route endpoint.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SampledRoutes {
    pub routes: Vec<RoutePath>,
    pub stops: Vec<GeoPoint>,
}

/// Draw up to `max_routes` random point pairs from `points` and synthesize a
/// curve for each. The second endpoint is redrawn until it differs from the
/// first, so no route is a self-loop.
///
/// Fewer than two usable points yields zero routes and zero stops.
pub fn sample_routes(
    points: &[GeoPoint],
    max_routes: usize,
    canvas: Canvas,
    curvature: f64,
    rng: &mut impl Rng,
) -> SampledRoutes {
    let count = max_routes.min(points.len() / 2);
    if count == 0 {
        return SampledRoutes::default();
    }

    let mut routes = Vec::with_capacity(count);
    for index in 0..count {
        let from_idx = rng.random_range(0..points.len());
        let mut to_idx = rng.random_range(0..points.len());
        while to_idx == from_idx {
            to_idx = rng.random_range(0..points.len());
        }

        let from = points[from_idx].clone();
        let to = points[to_idx].clone();
        let p1 = project(from.lat, from.lon, canvas);
        let p2 = project(to.lat, to.lon, canvas);
        let curve = RouteCurve::between(p1, p2, curvature);
        routes.push(RoutePath {
            index,
            from,
            to,
            curve,
        });
    }

    let used: BTreeSet<&str> = routes
        .iter()
        .flat_map(|r| [r.from.name.as_str(), r.to.name.as_str()])
        .collect();
    let stops = points
        .iter()
        .filter(|p| used.contains(p.name.as_str()))
        .cloned()
        .collect();

    tracing::debug!(routes = routes.len(), stops = used.len(), "sampled routes");
    SampledRoutes { routes, stops }
}
