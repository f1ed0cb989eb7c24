/// CallbackPass - closure-backed render pass
///
/// Runs a user-provided closure for full control over drawing. The closure
/// returns the number of props it rendered. A failing closure is logged and
/// counts as an empty render; the rest of the chain keeps running.

use crate::error::Result;
use crate::graphics::RenderWindow;
use crate::pass_error;
use super::render_pass::RenderPass;
use super::render_state::RenderState;

const SOURCE: &str = "galaxy3d::CallbackPass";

type RenderCallback = Box<dyn FnMut(&mut RenderState<'_>) -> Result<usize> + Send>;

/// Closure-backed render pass
pub struct CallbackPass {
    callback: RenderCallback,
    number_of_rendered_props: usize,
}

impl CallbackPass {
    /// Create a pass from a closure returning the number of rendered props
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&mut RenderState<'_>) -> Result<usize> + Send + 'static,
    {
        Self {
            callback: Box::new(callback),
            number_of_rendered_props: 0,
        }
    }
}

impl RenderPass for CallbackPass {
    fn render(&mut self, state: &mut RenderState<'_>) {
        self.number_of_rendered_props = match (self.callback)(state) {
            Ok(count) => count,
            Err(err) => {
                pass_error!(SOURCE, "Render callback failed: {}", err);
                0
            }
        };
    }

    fn release_graphics_resources(&mut self, _window: &mut dyn RenderWindow) {}

    fn number_of_rendered_props(&self) -> usize {
        self.number_of_rendered_props
    }

    fn name(&self) -> &'static str {
        "CallbackPass"
    }
}

#[cfg(test)]
#[path = "callback_pass_tests.rs"]
mod tests;
