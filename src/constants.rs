/// Page wiring and rendering constants for the web frontend.
///
/// Scene tuning lives in `core::constants`; these are the names the page and
/// the GPU layer agree on.
// Elements the host page must provide
pub const CANVAS_ID: &str = "app-canvas";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Elements created at startup
pub const MODAL_ROOT_ID: &str = "modal-root";
pub const LABEL_ROOT_ID: &str = "node-labels";

// CSS classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const MODAL_OVERLAY_CLASS: &str = "modal-overlay";
pub const MODAL_CONTENT_CLASS: &str = "modal-content";
pub const MODAL_CLOSE_CLASS: &str = "modal-close";
pub const NODE_LABEL_CLASS: &str = "node-label";
pub const NODE_LABEL_HOVER_CLASS: &str = "node-label--hover";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Sphere tessellation
pub const SPHERE_RINGS: u16 = 24;
pub const SPHERE_SEGMENTS: u16 = 32;

// Directional light, pointing from the light toward the scene
pub const LIGHT_DIR: [f32; 3] = [-0.4, -0.6, -0.7];
