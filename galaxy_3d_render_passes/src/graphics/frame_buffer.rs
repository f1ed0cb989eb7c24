/// FrameBuffer trait - offscreen render target handed to a pass through RenderState
///
/// The caller binds the framebuffer and selects its active attachments
/// before rendering; the passes only need the size it was last set up with.

use glam::UVec2;

/// Offscreen render target
pub trait FrameBuffer {
    /// Size (width, height) in pixels the framebuffer was last configured with
    fn last_size(&self) -> UVec2;
}
