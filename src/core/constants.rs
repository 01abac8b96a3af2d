// Shared scene tuning constants. `SceneConfig::default()` is built from these.

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_CUBE_SIZE: f32 = 10.0; // edge length of the spawn cube, centered on the origin
pub const PARTICLE_HUE: f32 = 0.6; // normalized hue, 0..1
pub const PARTICLE_SATURATION: f32 = 0.8;
pub const PARTICLE_SPIN_X_PER_FRAME: f32 = 0.0002;
pub const PARTICLE_SPIN_Y_PER_FRAME: f32 = 0.0005;
pub const PARTICLE_SIZE: f32 = 0.03; // billboard half-size in world units

// Lightness bands the recolor draws from, [min, min + span)
pub const DARK_LIGHTNESS_MIN: f32 = 0.5;
pub const LIGHT_LIGHTNESS_MIN: f32 = 0.3;
pub const LIGHTNESS_SPAN: f32 = 0.2;

// Orbital scene layout
pub const ORBIT_ROTATION_PER_FRAME: f32 = 0.002; // radians about +Y
pub const HUB_RADIUS: f32 = 1.0;
pub const NODE_RADIUS: f32 = 0.5;
pub const NODE_POSITIONS: [[f32; 3]; 4] = [
    [3.0, 0.5, 0.0],   // Projects
    [-3.0, -0.5, 0.0], // About
    [0.0, 1.0, 3.0],   // Resume
    [0.0, -1.0, -3.0], // Contact
];

// Hover
pub const REST_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.2;
pub const HOVER_TWEEN_SEC: f32 = 0.3;

// Modal entrance
pub const MODAL_TWEEN_SEC: f32 = 0.5;
pub const MODAL_OFFSET_PX: f32 = 50.0; // starts this far below its resting place

// Background colors per theme (linear RGB)
pub const DARK_BACKGROUND: [f32; 3] = [0.04, 0.04, 0.08];
pub const LIGHT_BACKGROUND: [f32; 3] = [0.95, 0.95, 0.97];

// Materials
pub const HUB_COLOR: [f32; 3] = [0.39, 0.4, 0.95];
pub const HUB_METALNESS: f32 = 0.7;
pub const HUB_ROUGHNESS: f32 = 0.2;
pub const HUB_EMISSIVE: f32 = 0.3;
pub const NODE_COLORS: [[f32; 3]; 4] = [
    [0.93, 0.28, 0.6], // Projects
    [0.06, 0.73, 0.51], // About
    [0.96, 0.62, 0.04], // Resume
    [0.23, 0.51, 0.96], // Contact
];
pub const NODE_METALNESS: f32 = 0.5;
pub const NODE_ROUGHNESS: f32 = 0.3;
pub const NODE_EMISSIVE: f32 = 0.2;

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Pointer parallax
pub const PARALLAX_STRENGTH: f32 = 0.5; // world units of eye offset at the screen edge
pub const PARALLAX_SMOOTHING: f32 = 0.05; // fraction of the remaining distance per frame

// Labels float this far above a node's surface (world units)
pub const LABEL_LIFT: f32 = 0.35;
