/// Graphics collaborators of the render passes
///
/// Traits for the renderer, window, camera, offscreen framebuffer and the
/// graphics state they share, plus the value types exchanged with them.

pub mod types;
pub mod graphics_state;
pub mod render_window;
pub mod renderer;
pub mod frame_buffer;
pub mod stereo;

pub use types::*;
pub use graphics_state::*;
pub use render_window::*;
pub use renderer::*;
pub use frame_buffer::*;
pub use stereo::*;

// Mock collaborators for tests (no graphics context required)
#[cfg(test)]
pub mod mock_graphics;
