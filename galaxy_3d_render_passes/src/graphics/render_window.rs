/// RenderWindow trait - the on-screen target and owner of a graphics context

use crate::graphics::{BufferId, GraphicsState};

/// Stereo rendering mode of a window
///
/// Only `CrystalEyes`, `Left` and `Right` influence buffer selection in the
/// camera pass; the remaining modes are composed by later stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StereoType {
    #[default]
    None,
    /// Left and right eyes rendered to distinct hardware buffers
    CrystalEyes,
    RedBlue,
    Interlaced,
    /// Render the left eye only
    Left,
    /// Render the right eye only
    Right,
    Dresden,
    Anaglyph,
    Checkerboard,
    SplitViewportHorizontal,
    Fake,
    Emulate,
}

/// Window owning a graphics context and its default framebuffer
pub trait RenderWindow {
    /// Bind this window's context to the calling thread
    fn make_current(&mut self);

    /// Whether this window's context is bound to the calling thread
    fn is_current(&self) -> bool;

    /// Double buffering enabled
    fn double_buffer(&self) -> bool;

    /// Stereo rendering enabled
    fn stereo_render(&self) -> bool;

    /// Active stereo mode (meaningful when `stereo_render()` is true)
    fn stereo_type(&self) -> StereoType;

    /// Framebuffer the window renders into when it is not the system one (0 = none)
    fn default_framebuffer_id(&self) -> u32;

    /// Whether renderers of this window may clear it
    fn erase(&self) -> bool;

    /// Graphics state of this window's context
    fn graphics_state(&mut self) -> &mut dyn GraphicsState;

    fn front_buffer(&self) -> BufferId {
        BufferId::FRONT
    }

    fn back_buffer(&self) -> BufferId {
        BufferId::BACK
    }

    fn front_left_buffer(&self) -> BufferId {
        BufferId::FRONT_LEFT
    }

    fn front_right_buffer(&self) -> BufferId {
        BufferId::FRONT_RIGHT
    }

    fn back_left_buffer(&self) -> BufferId {
        BufferId::BACK_LEFT
    }

    fn back_right_buffer(&self) -> BufferId {
        BufferId::BACK_RIGHT
    }
}
