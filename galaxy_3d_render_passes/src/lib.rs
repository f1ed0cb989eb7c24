/*!
# Galaxy 3D Render Passes

Camera-stage render pass and composable render pass chain for the Galaxy3D
rendering pipeline.

A render pass prepares graphics state and/or draws, optionally forwarding
work to nested passes (trait-based dynamic polymorphism). The graphics
collaborators (renderer, window, camera, framebuffer, graphics state) are
traits implemented by the backend.

## Architecture

- **RenderPass**: composable stage capability (`render`, `release_graphics_resources`)
- **CameraPass**: viewport/scissor setup, draw buffer and stereo eye selection,
  clearing, then delegation
- **SequencePass**: runs a list of passes in order
- **CallbackPass**: closure-backed pass
- **GraphicsState**: mutable pipeline state with scoped save/restore
*/

// Internal modules
mod error;
pub mod log;
pub mod graphics;
pub mod passes;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    // Graphics collaborators
    pub mod graphics {
        pub use crate::graphics::*;
    }

    // Render passes
    pub mod passes {
        pub use crate::passes::*;
    }
}

// Re-export math library at crate root
pub use glam;
