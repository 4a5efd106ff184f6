//! Host capability traits.
//!
//! The field never talks to a real canvas, timer or event loop. The host
//! hands it two capabilities:
//!
//! - [`DrawSurface`] — pixel output plus its own size,
//! - [`FrameScheduler`] — frame callbacks and resize notifications, modeled
//!   as explicit token-returning requests instead of a hidden timer so that
//!   cancellation is directly observable in tests.
//!
//! The host guarantees at most one frame callback in flight: after
//! [`FrameScheduler::request_frame`] it delivers exactly one
//! [`Handle::frame`](crate::lifecycle::Handle::frame) call for that token
//! (unless canceled first), at display-refresh cadence. Resize events are
//! delivered via [`Handle::resized`](crate::lifecycle::Handle::resized)
//! while a subscription is live.

use glam::Vec2;

use crate::particle::DisplayColor;

/// The abstract drawable surface the renderer paints onto.
pub trait DrawSurface {
    /// Current drawable size as `(width, height)` in surface units.
    fn drawable_size(&self) -> (f32, f32);

    /// Erase the whole surface. Called once at the start of every frame.
    fn clear(&mut self);

    /// Paint a filled disc.
    fn draw_disc(&mut self, center: Vec2, radius: f32, color: DisplayColor, opacity: f32);

    /// Paint a line segment.
    fn draw_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        color: DisplayColor,
        alpha: f32,
        stroke_width: f32,
    );
}

/// Identifies one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Identifies one live resize subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeToken(pub u64);

/// The host's frame scheduler and resize notifier.
pub trait FrameScheduler {
    /// Ask for one frame callback. The token can cancel it before delivery.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a pending frame request. Canceling a token that already fired
    /// is a no-op.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Subscribe to resize notifications.
    fn subscribe_resize(&mut self) -> ResizeToken;

    /// Drop a resize subscription. Must not fail for already-dropped tokens.
    fn unsubscribe_resize(&mut self, token: ResizeToken);
}

/// Everything the lifecycle controller needs from the host.
///
/// Blanket-implemented for any type providing both capabilities.
pub trait Host: DrawSurface + FrameScheduler {}

impl<T: DrawSurface + FrameScheduler> Host for T {}
