/// Value types shared by the graphics collaborators

use glam::{IVec2, UVec2};

/// 2D rectangle in window pixels (viewport or scissor region)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect2D {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect2D {
    /// Build a rectangle from an origin and a size
    pub fn new(origin: IVec2, size: UVec2) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Rectangle anchored at (0, 0)
    pub fn from_size(size: UVec2) -> Self {
        Self::new(IVec2::ZERO, size)
    }
}

/// Identifier of a window color buffer, as consumed by draw/read buffer selection
///
/// The associated constants use the OpenGL enum values so that a GL backend
/// can pass them through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

impl BufferId {
    pub const FRONT_LEFT: BufferId = BufferId(0x0400);
    pub const FRONT_RIGHT: BufferId = BufferId(0x0401);
    pub const BACK_LEFT: BufferId = BufferId(0x0402);
    pub const BACK_RIGHT: BufferId = BufferId(0x0403);
    pub const FRONT: BufferId = BufferId(0x0404);
    pub const BACK: BufferId = BufferId(0x0405);
}

/// Boolean pipeline capability toggled through `GraphicsState::set_enabled`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Restrict rasterization to the scissor rectangle
    ScissorTest,
    DepthTest,
    Blend,
    CullFace,
}
