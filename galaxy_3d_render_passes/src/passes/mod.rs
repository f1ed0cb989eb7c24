//! Render passes
//!
//! `RenderPass` is the composable stage capability. `CameraPass` prepares the
//! target for the active camera and forwards to a delegate; `SequencePass`
//! and `CallbackPass` are ready-made delegates.

mod render_pass;
mod render_state;
mod camera_pass_config;
mod camera_pass;
mod sequence_pass;
mod callback_pass;

pub use render_pass::{RenderPass, SharedRenderPass, shared};
pub use render_state::RenderState;
pub use camera_pass_config::CameraPassConfig;
pub use camera_pass::CameraPass;
pub use sequence_pass::SequencePass;
pub use callback_pass::CallbackPass;

// Mock passes for tests
#[cfg(test)]
pub(crate) mod mock_passes;
