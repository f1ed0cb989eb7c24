/// GraphicsState trait and scoped save/restore guard
///
/// The graphics state is the mutable, context-wide pipeline state shared by
/// every pass of a frame (viewport, scissor, capabilities, bound framebuffer,
/// draw/read buffers). Passes reach it by reference and protect what they
/// change with `ScopedGraphicsState`.

use std::ops::{Deref, DerefMut};
use crate::error::Result;
use crate::graphics::{Rect2D, BufferId, Capability};

/// Mutable graphics pipeline state of one context
pub trait GraphicsState {
    /// Current viewport
    fn viewport(&self) -> Rect2D;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Rect2D);

    /// Current scissor rectangle
    fn scissor(&self) -> Rect2D;

    /// Set the scissor rectangle
    fn set_scissor(&mut self, scissor: Rect2D);

    /// Whether a capability is enabled
    fn is_enabled(&self, capability: Capability) -> bool;

    /// Enable or disable a capability
    fn set_enabled(&mut self, capability: Capability, enabled: bool);

    /// Bind a framebuffer object as the active draw/read target
    fn bind_framebuffer(&mut self, framebuffer_id: u32);

    /// Select the color buffer subsequent draws write to
    fn set_draw_buffer(&mut self, buffer: BufferId);

    /// Select the color buffer subsequent reads come from
    fn set_read_buffer(&mut self, buffer: BufferId);

    /// Consume the pending graphics API error, if any
    ///
    /// # Errors
    ///
    /// Returns `Error::GraphicsApiError` describing the pending error.
    fn check_error(&mut self) -> Result<()>;

    /// Insert a named marker into the command stream for graphics debuggers
    fn mark_debug_event(&mut self, _name: &str) {}
}

/// Anything that can hand out the graphics state it renders with
pub trait GraphicsContext {
    /// Mutable access to the graphics state
    fn graphics_state(&mut self) -> &mut dyn GraphicsState;
}

/// Scoped save/restore of graphics state
///
/// Snapshots the requested items when they are saved and writes them back
/// when the guard is dropped, including during unwinding. Restoration runs in
/// reverse order: capabilities, then scissor, then viewport.
///
/// The guard dereferences to the wrapped context so the caller keeps working
/// through it while the snapshot is held.
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_render_passes::galaxy3d::graphics::*;
/// # fn draw(ctx: &mut dyn GraphicsContext, region: Rect2D) {
/// let mut scoped = ScopedGraphicsState::new(ctx)
///     .save_viewport()
///     .save_scissor()
///     .save_capability(Capability::ScissorTest);
/// scoped.graphics_state().set_viewport(region);
/// // previous viewport, scissor and scissor test come back here
/// # }
/// ```
pub struct ScopedGraphicsState<'s, C: GraphicsContext + ?Sized> {
    context: &'s mut C,
    viewport: Option<Rect2D>,
    scissor: Option<Rect2D>,
    capabilities: Vec<(Capability, bool)>,
}

impl<'s, C: GraphicsContext + ?Sized> ScopedGraphicsState<'s, C> {
    /// Wrap a context without saving anything yet
    pub fn new(context: &'s mut C) -> Self {
        Self {
            context,
            viewport: None,
            scissor: None,
            capabilities: Vec::new(),
        }
    }

    /// Snapshot the current viewport
    pub fn save_viewport(mut self) -> Self {
        self.viewport = Some(self.context.graphics_state().viewport());
        self
    }

    /// Snapshot the current scissor rectangle
    pub fn save_scissor(mut self) -> Self {
        self.scissor = Some(self.context.graphics_state().scissor());
        self
    }

    /// Snapshot the enable flag of a capability
    pub fn save_capability(mut self, capability: Capability) -> Self {
        let enabled = self.context.graphics_state().is_enabled(capability);
        self.capabilities.push((capability, enabled));
        self
    }
}

impl<C: GraphicsContext + ?Sized> Deref for ScopedGraphicsState<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.context
    }
}

impl<C: GraphicsContext + ?Sized> DerefMut for ScopedGraphicsState<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.context
    }
}

impl<C: GraphicsContext + ?Sized> Drop for ScopedGraphicsState<'_, C> {
    fn drop(&mut self) {
        let state = self.context.graphics_state();
        for (capability, enabled) in self.capabilities.drain(..).rev() {
            state.set_enabled(capability, enabled);
        }
        if let Some(scissor) = self.scissor.take() {
            state.set_scissor(scissor);
        }
        if let Some(viewport) = self.viewport.take() {
            state.set_viewport(viewport);
        }
    }
}

#[cfg(test)]
#[path = "graphics_state_tests.rs"]
mod tests;
