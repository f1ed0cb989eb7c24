/// Mock render passes for unit tests
///
/// `MockPass` records every call together with the graphics state it
/// observed, and can be told to scramble that state or panic mid-render.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use crate::graphics::{Capability, GraphicsContext, Rect2D, RenderWindow};
use super::render_pass::RenderPass;
use super::render_state::RenderState;

/// Graphics state a delegate saw when it was rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedState {
    pub viewport: Rect2D,
    pub scissor: Rect2D,
    pub scissor_test: bool,
    pub has_frame_buffer: bool,
}

#[derive(Debug, Default)]
pub struct MockPass {
    pub props: usize,
    pub render_count: usize,
    pub release_count: usize,
    pub observed: Vec<ObservedState>,
    pub scramble_state: bool,
    pub panic_on_render: bool,
    pub dropped: Option<Arc<AtomicBool>>,
    /// Shared call journal, used to check ordering across several passes
    pub journal: Option<(Arc<Mutex<Vec<String>>>, &'static str)>,
}

impl MockPass {
    pub fn with_props(props: usize) -> Self {
        // No struct update syntax: MockPass implements Drop.
        let mut pass = Self::default();
        pass.props = props;
        pass
    }

    /// Wrap into a concrete shared handle (coerces to SharedRenderPass on clone)
    pub fn into_shared(self) -> Arc<Mutex<MockPass>> {
        Arc::new(Mutex::new(self))
    }
}

impl RenderPass for MockPass {
    fn render(&mut self, state: &mut RenderState<'_>) {
        self.render_count += 1;
        if let Some((journal, label)) = &self.journal {
            journal.lock().unwrap().push(format!("render {}", label));
        }

        let has_frame_buffer = state.frame_buffer().is_some();
        let graphics = state.graphics_state();
        self.observed.push(ObservedState {
            viewport: graphics.viewport(),
            scissor: graphics.scissor(),
            scissor_test: graphics.is_enabled(Capability::ScissorTest),
            has_frame_buffer,
        });

        if self.scramble_state {
            graphics.set_viewport(Rect2D { x: -1, y: -1, width: 1, height: 1 });
            graphics.set_scissor(Rect2D { x: 5, y: 5, width: 2, height: 2 });
            graphics.set_enabled(Capability::ScissorTest, false);
        }
        if self.panic_on_render {
            panic!("delegate failure");
        }
    }

    fn release_graphics_resources(&mut self, _window: &mut dyn RenderWindow) {
        self.release_count += 1;
        if let Some((journal, label)) = &self.journal {
            journal.lock().unwrap().push(format!("release {}", label));
        }
    }

    fn number_of_rendered_props(&self) -> usize {
        self.props
    }

    fn name(&self) -> &'static str {
        "MockPass"
    }
}

impl Drop for MockPass {
    fn drop(&mut self) {
        if let Some(flag) = &self.dropped {
            flag.store(true, Ordering::SeqCst);
        }
    }
}
