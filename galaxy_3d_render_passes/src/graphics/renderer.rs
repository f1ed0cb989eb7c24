/// Renderer and Camera traits
///
/// A renderer draws one viewport of a render window with its active camera.
/// Projection and view math live behind the Camera implementation; the
/// render passes only read and force the stereo eye.

use crate::graphics::{Rect2D, RenderWindow};

/// Camera as seen by the render passes
pub trait Camera {
    /// Whether the camera currently produces the left stereo eye
    fn left_eye(&self) -> bool;

    /// Select the stereo eye the camera produces
    fn set_left_eye(&mut self, left_eye: bool);
}

/// Renderer driven by the render passes
pub trait Renderer {
    /// Whether an active camera exists yet
    fn is_active_camera_created(&self) -> bool;

    /// Active camera, created on first access when none exists
    fn active_camera(&mut self) -> &mut dyn Camera;

    /// Reposition the active camera so the whole scene is visible
    fn reset_camera(&mut self);

    /// Region of the window covered by this renderer for the current tile
    fn tiled_viewport(&self) -> Rect2D;

    /// Whether this renderer clears its region before drawing
    fn erase(&self) -> bool;

    /// Whether the current render is a selection (picking) pass
    fn is_picking(&self) -> bool;

    /// Clear color and depth of the current region
    fn clear(&mut self);

    /// Window this renderer draws into
    fn render_window(&self) -> &dyn RenderWindow;

    /// Mutable window this renderer draws into
    fn render_window_mut(&mut self) -> &mut dyn RenderWindow;
}
