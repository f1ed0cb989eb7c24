/// SequencePass - runs a list of passes in order
///
/// Typical delegate of a CameraPass: opaque geometry, translucent geometry
/// and overlays are separate passes executed one after another on the same
/// render state.

use crate::graphics::RenderWindow;
use super::render_pass::{RenderPass, SharedRenderPass, lock_pass};
use super::render_state::RenderState;

/// Ordered list of render passes
pub struct SequencePass {
    passes: Vec<SharedRenderPass>,
    number_of_rendered_props: usize,
}

impl SequencePass {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self {
            passes: Vec::new(),
            number_of_rendered_props: 0,
        }
    }

    /// Append a pass at the end of the sequence
    pub fn add_pass(&mut self, pass: SharedRenderPass) {
        self.passes.push(pass);
    }

    /// Remove the pass at `index`
    ///
    /// Returns the removed pass, or None if the index is out of range.
    pub fn remove_pass(&mut self, index: usize) -> Option<SharedRenderPass> {
        if index < self.passes.len() {
            Some(self.passes.remove(index))
        } else {
            None
        }
    }

    /// Passes in execution order
    pub fn passes(&self) -> &[SharedRenderPass] {
        &self.passes
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Remove all passes
    pub fn clear(&mut self) {
        self.passes.clear();
    }
}

impl Default for SequencePass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for SequencePass {
    fn render(&mut self, state: &mut RenderState<'_>) {
        self.number_of_rendered_props = 0;
        for pass in &self.passes {
            let mut pass = lock_pass(pass);
            pass.render(state);
            self.number_of_rendered_props += pass.number_of_rendered_props();
        }
    }

    fn release_graphics_resources(&mut self, window: &mut dyn RenderWindow) {
        for pass in &self.passes {
            lock_pass(pass).release_graphics_resources(window);
        }
    }

    fn number_of_rendered_props(&self) -> usize {
        self.number_of_rendered_props
    }

    fn name(&self) -> &'static str {
        "SequencePass"
    }
}

#[cfg(test)]
#[path = "sequence_pass_tests.rs"]
mod tests;
