use crate::{core::Point, curve::RouteCurve, sample::RoutePath};

/// Fixed multiplier tying the configured speed to the frame cadence: each
/// tick advances a chain by `speed * FRAME_SCALE` arc units.
pub const FRAME_SCALE: f64 = 6.0;

/// Per-frame marker coordinate for one route, published once per tick while
/// the route's chain is live.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarkerUpdate {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// One route's motion chain: Running until cancelled, Cancelled is terminal.
///
/// The flag is checked at the top of every step, so a chain cancelled
/// between ticks skips the already-queued frame instead of acting on it.
#[derive(Clone, Debug)]
struct MotionChain {
    index: usize,
    curve: RouteCurve,
    step: f64,
    position: f64,
    cancelled: bool,
}

impl MotionChain {
    fn new(route: &RoutePath, speed: f64) -> Self {
        Self {
            index: route.index,
            curve: route.curve,
            step: speed * FRAME_SCALE,
            position: 0.0,
            cancelled: false,
        }
    }

    fn step_frame(&mut self) -> Option<MarkerUpdate> {
        if self.cancelled {
            return None;
        }
        self.position = advance(self.position, self.step, self.curve.arc_len());
        let Point { x, y } = self.curve.point_at(self.position);
        Some(MarkerUpdate {
            index: self.index,
            x,
            y,
        })
    }
}

/// Advance an arc-length position by one frame step. Wraps by carrying the
/// overflow past the end of the curve back to its start (`position mod len`),
/// so the exact boundary `position + step == len` lands on `0` and arc speed
/// stays constant across the seam.
fn advance(position: f64, step: f64, len: f64) -> f64 {
    if len <= 0.0 {
        return 0.0;
    }
    (position + step).rem_euclid(len)
}

/// Drives every route's marker from a single shared frame tick.
///
/// Each route owns exactly one chain record; its position is touched by no
/// other chain. Cancelled chains publish nothing and are dropped after the
/// tick that observes the flag, so a route index can be reused by a later
/// sampling pass without a stale chain writing into it.
#[derive(Debug, Default)]
pub struct MotionScheduler {
    chains: Vec<MotionChain>,
}

impl MotionScheduler {
    pub fn new(routes: &[RoutePath], speed: f64) -> Self {
        Self {
            chains: routes.iter().map(|r| MotionChain::new(r, speed)).collect(),
        }
    }

    /// Cancel every existing chain, then install fresh chains for `routes`.
    pub fn rebuild(&mut self, routes: &[RoutePath], speed: f64) {
        self.cancel_all();
        self.chains.clear();
        self.chains
            .extend(routes.iter().map(|r| MotionChain::new(r, speed)));
    }

    /// Advance one frame and collect the marker updates of every live chain.
    /// Cross-route order within a tick carries no meaning; each chain only
    /// reads and writes its own state.
    pub fn tick(&mut self) -> Vec<MarkerUpdate> {
        let mut updates = Vec::with_capacity(self.chains.len());
        for chain in &mut self.chains {
            if let Some(update) = chain.step_frame() {
                updates.push(update);
            }
        }
        self.chains.retain(|c| !c.cancelled);
        updates
    }

    /// Cancel the chain for one route. No-op if the route has no live chain.
    pub fn cancel(&mut self, index: usize) {
        for chain in &mut self.chains {
            if chain.index == index {
                chain.cancelled = true;
            }
        }
    }

    /// Cancel every chain. Takes effect before this call returns: no chain
    /// publishes an update afterwards.
    pub fn cancel_all(&mut self) {
        if self.chains.iter().any(|c| !c.cancelled) {
            tracing::debug!(chains = self.chains.len(), "cancelling motion chains");
        }
        for chain in &mut self.chains {
            chain.cancelled = true;
        }
    }

    pub fn live_chains(&self) -> usize {
        self.chains.iter().filter(|c| !c.cancelled).count()
    }
}
