/// RenderPass trait - a composable stage of the rendering pipeline
///
/// A pass prepares graphics state and/or draws, and may forward part of the
/// work to nested passes it holds. Passes are shared through
/// `SharedRenderPass` handles so one pass can sit in several chains.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use crate::graphics::RenderWindow;
use super::render_state::RenderState;

/// Shared, reference-counted render pass handle
pub type SharedRenderPass = Arc<Mutex<dyn RenderPass>>;

/// A stage of the rendering pipeline
pub trait RenderPass: Send {
    /// Render according to `state`
    fn render(&mut self, state: &mut RenderState<'_>);

    /// Release graphics resources held for `window`, and ask nested passes to do the same
    fn release_graphics_resources(&mut self, window: &mut dyn RenderWindow);

    /// Number of props rendered by the last call to `render`
    fn number_of_rendered_props(&self) -> usize;

    /// Short name used in logs and debug output
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Wrap a pass into a shared handle
pub fn shared<P: RenderPass + 'static>(pass: P) -> SharedRenderPass {
    Arc::new(Mutex::new(pass))
}

/// Lock a shared pass, recovering it if a previous render panicked
pub(crate) fn lock_pass(pass: &SharedRenderPass) -> MutexGuard<'_, dyn RenderPass + 'static> {
    pass.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Whether two handles point to the same pass instance
pub(crate) fn same_pass(a: &SharedRenderPass, b: &SharedRenderPass) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Name of a shared pass without blocking (the pass may be rendering)
pub(crate) fn pass_name(pass: &SharedRenderPass) -> &'static str {
    match pass.try_lock() {
        Ok(guard) => guard.name(),
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().name(),
        Err(TryLockError::WouldBlock) => "(busy)",
    }
}
