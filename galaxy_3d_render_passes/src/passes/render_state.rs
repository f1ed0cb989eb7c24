/// RenderState - per-call description of what a render pass draws into
///
/// Bundles the renderer being drawn and the optional offscreen framebuffer.
/// Built by the caller for each frame and handed down the pass chain.

use crate::graphics::{Renderer, FrameBuffer, GraphicsContext, GraphicsState};

/// Renderer plus optional offscreen target for one render call
pub struct RenderState<'a> {
    renderer: &'a mut dyn Renderer,
    frame_buffer: Option<&'a dyn FrameBuffer>,
}

impl<'a> RenderState<'a> {
    /// Render to the renderer's window
    pub fn new(renderer: &'a mut dyn Renderer) -> Self {
        Self {
            renderer,
            frame_buffer: None,
        }
    }

    /// Render into an offscreen framebuffer the caller already bound
    pub fn with_frame_buffer(renderer: &'a mut dyn Renderer, frame_buffer: &'a dyn FrameBuffer) -> Self {
        Self {
            renderer,
            frame_buffer: Some(frame_buffer),
        }
    }

    pub fn renderer(&self) -> &dyn Renderer {
        &*self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    /// Offscreen target, `None` when rendering to the window
    pub fn frame_buffer(&self) -> Option<&'a dyn FrameBuffer> {
        self.frame_buffer
    }
}

impl GraphicsContext for RenderState<'_> {
    fn graphics_state(&mut self) -> &mut dyn GraphicsState {
        self.renderer.render_window_mut().graphics_state()
    }
}
