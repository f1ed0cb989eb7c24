/// CameraPass configuration

/// Camera pass configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPassConfig {
    /// Initial aspect ratio override (stored on the pass, not used by its algorithm)
    pub aspect_ratio_override: f64,
    /// Check the graphics error state after camera setup and after the delegate
    pub check_graphics_errors: bool,
    /// Emit debug markers around the delegate render
    pub debug_markers: bool,
}

impl Default for CameraPassConfig {
    fn default() -> Self {
        Self {
            aspect_ratio_override: 1.0,
            check_graphics_errors: cfg!(debug_assertions),
            debug_markers: cfg!(debug_assertions),
        }
    }
}
