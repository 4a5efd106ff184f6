//! Start/stop lifecycle and the per-tick loop.
//!
//! [`FieldSim`] is the configuration builder; [`FieldSim::start`] queries the
//! host surface, builds the initial [`ParticleField`], subscribes to resize
//! notifications and requests the first frame, returning a [`Handle`] that
//! owns the whole run. The host then drives the loop:
//!
//! - each delivered frame callback calls [`Handle::frame`], which executes
//!   one tick (step → link → draw) synchronously and requests the next frame;
//! - resize notifications call [`Handle::resized`], which rebuilds the field
//!   atomically between ticks;
//! - [`Handle::stop`] cancels the pending frame request and drops the resize
//!   subscription. Stop is idempotent and never fails.
//!
//! # Example
//!
//! ```ignore
//! let mut handle = FieldSim::new().with_seed(7).start(&mut host)?;
//!
//! // Host event loop:
//! //   on frame callback  -> handle.frame(&mut host);
//! //   on resize          -> handle.resized(&mut host);
//! //   on unmount         -> handle.stop(&mut host);
//! ```

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::StartError;
use crate::field::ParticleField;
use crate::render;
use crate::simulation;
use crate::spatial::{ProximityLinker, MAX_LINK_DISTANCE};
use crate::surface::{FrameScheduler, FrameToken, Host, ResizeToken};

/// Lifecycle state. There are no other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Initial and terminal state; no pending callbacks or subscriptions.
    Stopped,
    /// Ticking: one frame request pending, resize subscription live.
    Running,
}

/// Field simulation builder.
///
/// Defaults match the reference visuals; override with the `with_` methods.
#[derive(Debug, Clone)]
pub struct FieldSim {
    max_link_distance: f32,
    seed: Option<u64>,
}

impl FieldSim {
    /// Builder with default settings.
    pub fn new() -> Self {
        Self {
            max_link_distance: MAX_LINK_DISTANCE,
            seed: None,
        }
    }

    /// Override the proximity-link distance threshold.
    pub fn with_max_link_distance(mut self, distance: f32) -> Self {
        self.max_link_distance = distance;
        self
    }

    /// Seed the random source for a reproducible run.
    ///
    /// Unseeded runs draw entropy from the OS.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start the field on the given host.
    ///
    /// Builds the initial population from the host's current drawable size,
    /// subscribes to resizes and requests the first frame. Returns
    /// [`StartError::NoSurface`] without entering the running state when the
    /// host has no usable surface; the caller may retry later.
    pub fn start<H: Host>(self, host: &mut H) -> Result<Handle, StartError> {
        let (width, height) = host.drawable_size();
        if width <= 0.0 || height <= 0.0 {
            return Err(StartError::NoSurface);
        }

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let field = ParticleField::initialize(width, height, &mut rng);

        let resize_sub = host.subscribe_resize();
        let pending = host.request_frame();

        Ok(Handle {
            state: RunState::Running,
            field,
            rng,
            linker: ProximityLinker::new(self.max_link_distance),
            pending: Some(pending),
            resize_sub: Some(resize_sub),
            ticks: 0,
        })
    }
}

impl Default for FieldSim {
    fn default() -> Self {
        Self::new()
    }
}

/// One active (or stopped) run of the field.
///
/// Exclusively owns the particle collection, the random source, the linker
/// scratch buffer and the host tokens.
#[derive(Debug)]
pub struct Handle {
    state: RunState,
    field: ParticleField,
    rng: SmallRng,
    linker: ProximityLinker,
    pending: Option<FrameToken>,
    resize_sub: Option<ResizeToken>,
    ticks: u64,
}

impl Handle {
    /// Execute one tick: step, recompute edges, draw, request the next frame.
    ///
    /// Delivery after [`stop`](Self::stop), or without a pending request, is
    /// ignored and requests nothing.
    pub fn frame<H: Host>(&mut self, host: &mut H) {
        if self.state != RunState::Running || self.pending.take().is_none() {
            return;
        }

        simulation::step(&mut self.field, &mut self.rng);
        let edges = self.linker.compute_edges(&self.field);
        render::draw_frame(host, &self.field, edges);
        self.ticks += 1;

        self.pending = Some(host.request_frame());
    }

    /// Rebuild the field for the host's new drawable size.
    ///
    /// Runs synchronously between ticks, so no tick ever observes a
    /// half-resized field. Ignored once stopped.
    pub fn resized<H: Host>(&mut self, host: &mut H) {
        if self.state != RunState::Running {
            return;
        }
        let (width, height) = host.drawable_size();
        self.field.resize(width, height, &mut self.rng);
    }

    /// Stop the run: cancel the pending frame request and unsubscribe from
    /// resizes. Idempotent; repeated calls do nothing.
    pub fn stop<H: FrameScheduler>(&mut self, host: &mut H) {
        if let Some(token) = self.pending.take() {
            host.cancel_frame(token);
        }
        if let Some(sub) = self.resize_sub.take() {
            host.unsubscribe_resize(sub);
        }
        self.state = RunState::Stopped;
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the run is ticking.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Ticks executed since start.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The current particle collection.
    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}
