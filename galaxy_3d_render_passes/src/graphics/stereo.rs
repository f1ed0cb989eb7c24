/// Draw/read buffer selection for on-screen rendering
///
/// Decides which window color buffer a camera stage renders into, based on
/// double buffering, stereo mode and the eye the camera currently produces.

use crate::graphics::{BufferId, RenderWindow, StereoType};

/// Outcome of buffer selection for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferSelection {
    /// Use this buffer for both drawing and reading
    DrawAndRead(BufferId),
    /// Keep the buffers, force the camera's eye flag (true = left)
    ForceLeftEye(bool),
    /// Nothing to select here; the stereo mode is composed by later stages
    Deferred,
}

/// Select the buffers for rendering to `window` with the camera on `left_eye`
pub fn select_buffers(window: &dyn RenderWindow, left_eye: bool) -> BufferSelection {
    if !window.stereo_render() {
        return if window.double_buffer() {
            // Reading the back buffer reads back-left: only one buffer can be read at a time.
            BufferSelection::DrawAndRead(window.back_buffer())
        } else {
            BufferSelection::DrawAndRead(window.front_buffer())
        };
    }

    match window.stereo_type() {
        StereoType::CrystalEyes => {
            let buffer = match (left_eye, window.double_buffer()) {
                (true, true) => window.back_left_buffer(),
                (true, false) => window.front_left_buffer(),
                (false, true) => window.back_right_buffer(),
                (false, false) => window.front_right_buffer(),
            };
            BufferSelection::DrawAndRead(buffer)
        }
        StereoType::Left => BufferSelection::ForceLeftEye(true),
        StereoType::Right => BufferSelection::ForceLeftEye(false),
        StereoType::None
        | StereoType::RedBlue
        | StereoType::Interlaced
        | StereoType::Dresden
        | StereoType::Anaglyph
        | StereoType::Checkerboard
        | StereoType::SplitViewportHorizontal
        | StereoType::Fake
        | StereoType::Emulate => BufferSelection::Deferred,
    }
}

#[cfg(test)]
#[path = "stereo_tests.rs"]
mod tests;
