/// CameraPass - camera stage of a render pass chain
///
/// Prepares the render target for the renderer's active camera, then hands
/// the actual scene drawing to a delegate pass:
///
/// 1. resolves the target region (renderer tile, or offscreen framebuffer size)
/// 2. selects the window draw/read buffers, including stereo eye buffers
/// 3. applies the region as viewport and scissor, with the previous viewport,
///    scissor and scissor test restored when the render returns
/// 4. clears the target when the window and renderer both ask for it
/// 5. renders the delegate and reports its rendered prop count

use std::fmt;
use crate::graphics::{
    Capability, GraphicsContext, GraphicsState, Rect2D, RenderWindow,
    ScopedGraphicsState, BufferSelection, select_buffers,
};
use crate::{pass_debug, pass_error, pass_trace, pass_warn};
use super::camera_pass_config::CameraPassConfig;
use super::render_pass::{RenderPass, SharedRenderPass, lock_pass, pass_name, same_pass};
use super::render_state::RenderState;

const SOURCE: &str = "galaxy3d::CameraPass";

/// Camera stage render pass
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_render_passes::galaxy3d::passes::{CameraPass, SequencePass, shared};
///
/// let mut camera_pass = CameraPass::new();
/// camera_pass.set_delegate(Some(shared(SequencePass::new())));
/// ```
pub struct CameraPass {
    delegate: Option<SharedRenderPass>,
    aspect_ratio_override: f64,
    number_of_rendered_props: usize,
    config: CameraPassConfig,
}

impl CameraPass {
    /// Create a camera pass with the default configuration and no delegate
    pub fn new() -> Self {
        Self::with_config(CameraPassConfig::default())
    }

    /// Create a camera pass with an explicit configuration and no delegate
    pub fn with_config(config: CameraPassConfig) -> Self {
        Self {
            delegate: None,
            aspect_ratio_override: config.aspect_ratio_override,
            number_of_rendered_props: 0,
            config,
        }
    }

    /// Pass that draws the scene once the camera stage is set up
    pub fn delegate(&self) -> Option<&SharedRenderPass> {
        self.delegate.as_ref()
    }

    /// Replace the delegate pass
    ///
    /// The handle on the previous delegate is dropped; setting the delegate
    /// already held leaves both handles untouched.
    pub fn set_delegate(&mut self, delegate: Option<SharedRenderPass>) {
        match (&self.delegate, &delegate) {
            (Some(current), Some(new)) if same_pass(current, new) => return,
            (None, None) => return,
            _ => {}
        }

        match &delegate {
            Some(new) => pass_debug!(SOURCE, "Delegate set to {}", pass_name(new)),
            None => pass_debug!(SOURCE, "Delegate removed"),
        }
        self.delegate = delegate;
    }

    pub fn aspect_ratio_override(&self) -> f64 {
        self.aspect_ratio_override
    }

    pub fn set_aspect_ratio_override(&mut self, aspect_ratio_override: f64) {
        self.aspect_ratio_override = aspect_ratio_override;
    }

    pub fn config(&self) -> &CameraPassConfig {
        &self.config
    }

    /// Bind the window's default framebuffer and select its draw/read buffers
    fn prepare_window_buffers(state: &mut RenderState<'_>) {
        let renderer = state.renderer_mut();
        let left_eye = renderer.active_camera().left_eye();
        let window = renderer.render_window_mut();

        let framebuffer_id = window.default_framebuffer_id();
        if framebuffer_id != 0 {
            window.graphics_state().bind_framebuffer(framebuffer_id);
        }

        match select_buffers(&*window, left_eye) {
            BufferSelection::DrawAndRead(buffer) => {
                let graphics = window.graphics_state();
                graphics.set_draw_buffer(buffer);
                graphics.set_read_buffer(buffer);
            }
            BufferSelection::ForceLeftEye(left) => {
                renderer.active_camera().set_left_eye(left);
            }
            BufferSelection::Deferred => {}
        }
    }

    /// Log a pending graphics error, if checking is enabled
    fn check_graphics_error(&self, graphics: &mut dyn GraphicsState, stage: &str) {
        if !self.config.check_graphics_errors {
            return;
        }
        if let Err(err) = graphics.check_error() {
            pass_error!(SOURCE, "{}: {}", stage, err);
        }
    }
}

impl Default for CameraPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for CameraPass {
    fn render(&mut self, state: &mut RenderState<'_>) {
        self.number_of_rendered_props = 0;

        let renderer = state.renderer_mut();
        if !renderer.is_active_camera_created() {
            pass_debug!(SOURCE, "No cameras are on, creating one.");
            renderer.active_camera();
            renderer.reset_camera();
        }
        let window = renderer.render_window_mut();
        window.make_current();
        debug_assert!(window.is_current(), "render window context not current after make_current");

        if self.config.check_graphics_errors {
            if let Err(err) = state.graphics_state().check_error() {
                pass_trace!(SOURCE, "Discarding earlier graphics error: {}", err);
            }
        }

        let region = match state.frame_buffer() {
            // Draw buffers of an offscreen target are selected by the caller.
            Some(frame_buffer) => Rect2D::from_size(frame_buffer.last_size()),
            None => {
                Self::prepare_window_buffers(state);
                state.renderer().tiled_viewport()
            }
        };
        pass_trace!(SOURCE, "Rendering region {:?}", region);

        let mut scoped = ScopedGraphicsState::new(state)
            .save_viewport()
            .save_scissor()
            .save_capability(Capability::ScissorTest);

        let graphics = scoped.graphics_state();
        graphics.set_viewport(region);
        graphics.set_enabled(Capability::ScissorTest, true);
        graphics.set_scissor(region);

        let renderer = scoped.renderer_mut();
        if renderer.render_window().erase() && renderer.erase() && !renderer.is_picking() {
            renderer.clear();
        }

        self.check_graphics_error(scoped.graphics_state(), "failed after camera initialization");

        match &self.delegate {
            Some(delegate) => {
                let mut delegate = lock_pass(delegate);
                if self.config.debug_markers {
                    scoped.graphics_state().mark_debug_event("Start CameraPass delegate");
                }
                delegate.render(&mut scoped);
                if self.config.debug_markers {
                    scoped.graphics_state().mark_debug_event("End CameraPass delegate");
                }
                self.number_of_rendered_props += delegate.number_of_rendered_props();
            }
            None => pass_warn!(SOURCE, " no delegate."),
        }

        self.check_graphics_error(scoped.graphics_state(), "failed after delegate pass");
    }

    fn release_graphics_resources(&mut self, window: &mut dyn RenderWindow) {
        if let Some(delegate) = &self.delegate {
            lock_pass(delegate).release_graphics_resources(window);
        }
    }

    fn number_of_rendered_props(&self) -> usize {
        self.number_of_rendered_props
    }

    fn name(&self) -> &'static str {
        "CameraPass"
    }
}

impl fmt::Debug for CameraPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraPass")
            .field("aspect_ratio_override", &self.aspect_ratio_override)
            .field("delegate", &self.delegate.as_ref().map_or("(none)", pass_name))
            .field("number_of_rendered_props", &self.number_of_rendered_props)
            .finish()
    }
}

#[cfg(test)]
#[path = "camera_pass_tests.rs"]
mod tests;
