//! # plexfield
//!
//! An animated-background subsystem: a bounded, recycled population of
//! upward-drifting particles, a per-frame proximity graph linking nearby
//! pairs, and a renderer painting both onto an abstract host surface.
//!
//! The crate owns no canvas, timer or event loop. The host provides a
//! [`DrawSurface`] and a [`FrameScheduler`]; the field exposes only a
//! start/stop contract and is driven one synchronous tick at a time.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plexfield::prelude::*;
//!
//! let mut handle = FieldSim::new()
//!     .with_seed(7)
//!     .start(&mut host)?;
//!
//! // Wire the host's callbacks to the handle:
//! //   frame callback fired -> handle.frame(&mut host)
//! //   surface resized      -> handle.resized(&mut host)
//! //   teardown             -> handle.stop(&mut host)
//! ```
//!
//! ## Per-tick control flow
//!
//! Each delivered frame callback executes, in order and synchronously:
//!
//! 1. [`simulation::step`] — constant-step movement with top-edge recycling,
//! 2. [`ProximityLinker::compute_edges`] — brute-force O(n²) pair pass
//!    (population capped at 50, so at most 1225 checks),
//! 3. [`render::draw_frame`] — clear, stroke edges, fill discs,
//!
//! then requests the next frame. [`Handle::stop`] cancels the pending
//! request and the resize subscription; after it returns, no further frame
//! requests or surface mutation occur.

pub mod error;
pub mod field;
pub mod lifecycle;
pub mod particle;
pub mod render;
pub mod simulation;
pub mod spatial;
pub mod spawn;
pub mod surface;

pub use error::StartError;
pub use field::ParticleField;
pub use glam::Vec2;
pub use lifecycle::{FieldSim, Handle, RunState};
pub use particle::{DisplayColor, Particle, PALETTE};
pub use spatial::{Edge, ProximityLinker};
pub use surface::{DrawSurface, FrameScheduler, FrameToken, Host, ResizeToken};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use plexfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::StartError;
    pub use crate::field::ParticleField;
    pub use crate::lifecycle::{FieldSim, Handle, RunState};
    pub use crate::particle::{DisplayColor, Particle, PALETTE};
    pub use crate::spatial::{Edge, ProximityLinker};
    pub use crate::surface::{DrawSurface, FrameScheduler, FrameToken, Host, ResizeToken};
    pub use crate::Vec2;
}
