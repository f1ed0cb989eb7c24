/// Mock graphics collaborators for unit tests (no graphics context required)
///
/// Every mock records what the passes did to it so tests can assert on
/// calls, call counts and final state.

use glam::UVec2;
use crate::error::{Error, Result};
use crate::graphics::{
    BufferId, Camera, Capability, FrameBuffer, GraphicsContext, GraphicsState,
    Rect2D, RenderWindow, Renderer, StereoType,
};

// ============================================================================
// Mock GraphicsState
// ============================================================================

#[derive(Debug, Default)]
pub struct MockGraphicsState {
    pub viewport: Rect2D,
    pub scissor: Rect2D,
    pub enabled: Vec<Capability>,
    pub bound_framebuffer: Option<u32>,
    pub draw_buffer: Option<BufferId>,
    pub read_buffer: Option<BufferId>,
    pub pending_errors: Vec<String>,
    pub debug_events: Vec<String>,
    pub commands: Vec<String>,
}

impl MockGraphicsState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphicsState for MockGraphicsState {
    fn viewport(&self) -> Rect2D {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Rect2D) {
        self.commands.push("set_viewport".to_string());
        self.viewport = viewport;
    }

    fn scissor(&self) -> Rect2D {
        self.scissor
    }

    fn set_scissor(&mut self, scissor: Rect2D) {
        self.commands.push("set_scissor".to_string());
        self.scissor = scissor;
    }

    fn is_enabled(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }

    fn set_enabled(&mut self, capability: Capability, enabled: bool) {
        self.commands.push(format!("set_enabled({:?}, {})", capability, enabled));
        self.enabled.retain(|c| *c != capability);
        if enabled {
            self.enabled.push(capability);
        }
    }

    fn bind_framebuffer(&mut self, framebuffer_id: u32) {
        self.commands.push("bind_framebuffer".to_string());
        self.bound_framebuffer = Some(framebuffer_id);
    }

    fn set_draw_buffer(&mut self, buffer: BufferId) {
        self.commands.push("set_draw_buffer".to_string());
        self.draw_buffer = Some(buffer);
    }

    fn set_read_buffer(&mut self, buffer: BufferId) {
        self.commands.push("set_read_buffer".to_string());
        self.read_buffer = Some(buffer);
    }

    fn check_error(&mut self) -> Result<()> {
        if self.pending_errors.is_empty() {
            Ok(())
        } else {
            Err(Error::GraphicsApiError(self.pending_errors.remove(0)))
        }
    }

    fn mark_debug_event(&mut self, name: &str) {
        self.debug_events.push(name.to_string());
    }
}

impl GraphicsContext for MockGraphicsState {
    fn graphics_state(&mut self) -> &mut dyn GraphicsState {
        self
    }
}

// ============================================================================
// Mock Camera
// ============================================================================

#[derive(Debug, Default)]
pub struct MockCamera {
    pub left_eye: bool,
}

impl Camera for MockCamera {
    fn left_eye(&self) -> bool {
        self.left_eye
    }

    fn set_left_eye(&mut self, left_eye: bool) {
        self.left_eye = left_eye;
    }
}

// ============================================================================
// Mock RenderWindow
// ============================================================================

#[derive(Debug)]
pub struct MockRenderWindow {
    pub double_buffer: bool,
    pub stereo_render: bool,
    pub stereo_type: StereoType,
    pub default_framebuffer_id: u32,
    pub erase: bool,
    pub current: bool,
    /// make_current() leaves the context unbound
    pub refuse_current: bool,
    pub make_current_count: usize,
    pub state: MockGraphicsState,
}

impl MockRenderWindow {
    /// Double-buffered, mono, erasing window rendering to the system framebuffer
    pub fn new() -> Self {
        Self {
            double_buffer: true,
            stereo_render: false,
            stereo_type: StereoType::None,
            default_framebuffer_id: 0,
            erase: true,
            current: false,
            refuse_current: false,
            make_current_count: 0,
            state: MockGraphicsState::new(),
        }
    }

    pub fn stereo(stereo_type: StereoType, double_buffer: bool) -> Self {
        Self {
            double_buffer,
            stereo_render: true,
            stereo_type,
            ..Self::new()
        }
    }
}

impl RenderWindow for MockRenderWindow {
    fn make_current(&mut self) {
        self.state.commands.push("make_current".to_string());
        self.current = !self.refuse_current;
        self.make_current_count += 1;
    }

    fn is_current(&self) -> bool {
        self.current
    }

    fn double_buffer(&self) -> bool {
        self.double_buffer
    }

    fn stereo_render(&self) -> bool {
        self.stereo_render
    }

    fn stereo_type(&self) -> StereoType {
        self.stereo_type
    }

    fn default_framebuffer_id(&self) -> u32 {
        self.default_framebuffer_id
    }

    fn erase(&self) -> bool {
        self.erase
    }

    fn graphics_state(&mut self) -> &mut dyn GraphicsState {
        &mut self.state
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

#[derive(Debug)]
pub struct MockRenderer {
    pub window: MockRenderWindow,
    pub camera: Option<MockCamera>,
    pub reset_camera_count: usize,
    pub tiled_viewport: Rect2D,
    pub erase: bool,
    pub picking: bool,
    pub clear_count: usize,
    /// Viewport and scissor-test flag seen by each clear()
    pub clears: Vec<(Rect2D, bool)>,
}

impl MockRenderer {
    /// Renderer with a created camera, covering an 800x600 tile at (10, 20)
    pub fn new(window: MockRenderWindow) -> Self {
        Self {
            window,
            camera: Some(MockCamera::default()),
            reset_camera_count: 0,
            tiled_viewport: Rect2D { x: 10, y: 20, width: 800, height: 600 },
            erase: true,
            picking: false,
            clear_count: 0,
            clears: Vec::new(),
        }
    }

    pub fn state(&self) -> &MockGraphicsState {
        &self.window.state
    }

    pub fn state_mut(&mut self) -> &mut MockGraphicsState {
        &mut self.window.state
    }
}

impl Renderer for MockRenderer {
    fn is_active_camera_created(&self) -> bool {
        self.camera.is_some()
    }

    fn active_camera(&mut self) -> &mut dyn Camera {
        self.camera.get_or_insert_with(MockCamera::default)
    }

    fn reset_camera(&mut self) {
        self.reset_camera_count += 1;
    }

    fn tiled_viewport(&self) -> Rect2D {
        self.tiled_viewport
    }

    fn erase(&self) -> bool {
        self.erase
    }

    fn is_picking(&self) -> bool {
        self.picking
    }

    fn clear(&mut self) {
        self.clear_count += 1;
        let state = &self.window.state;
        self.clears.push((state.viewport, state.is_enabled(Capability::ScissorTest)));
    }

    fn render_window(&self) -> &dyn RenderWindow {
        &self.window
    }

    fn render_window_mut(&mut self) -> &mut dyn RenderWindow {
        &mut self.window
    }
}

// ============================================================================
// Mock FrameBuffer
// ============================================================================

#[derive(Debug)]
pub struct MockFrameBuffer {
    pub size: UVec2,
}

impl FrameBuffer for MockFrameBuffer {
    fn last_size(&self) -> UVec2 {
        self.size
    }
}
