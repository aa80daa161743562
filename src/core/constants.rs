// Shared tuning constants for the observers and the decorative visuals.

// Visibility
pub const DEFAULT_THRESHOLD: f64 = 0.1; // fraction of the region that must be on screen
pub const DEFAULT_ROOT_MARGIN: &str = "0px";
pub const REVEAL_THRESHOLD: f64 = 0.2; // reveal-on-scroll preset
pub const REVEAL_ROOT_MARGIN: &str = "-50px";

// Scroll-derived values
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const HERO_FADE_DISTANCE_PX: f64 = 700.0;
pub const NAV_SCROLLED_OFFSET_PX: f64 = 50.0;

// Pointer
pub const POINTER_REST: [f32; 2] = [0.5, 0.5]; // reported until the first pointer move
pub const CURSOR_FOLLOW_FACTOR: f32 = 0.08; // fraction of the remaining gap closed per frame
pub const CURSOR_SETTLE_EPSILON: f32 = 0.01;

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // avoid large jumps after a backgrounded tab
pub const CANVAS_BACKING_SCALE: f64 = 2.0;

// Chaotic visual
pub const CHAOS_FRAGMENT_COUNT: usize = 25;
pub const CHAOS_TIME_RATE: f64 = 1.2; // phase units per second
pub const CHAOS_JITTER_PX: f64 = 5.0;
pub const CHAOS_FRAGMENT_OPACITY_MIN: f64 = 0.1;
pub const CHAOS_FRAGMENT_OPACITY_MAX: f64 = 0.5;
pub const CHAOS_ROTATION_MAX_DEG: f64 = 30.0;
pub const CHAOS_GLITCH_MIN: f64 = 0.3; // glitch lines only above this chaos level
pub const CHAOS_GLITCH_ALPHA: f64 = 0.3;
pub const CHAOS_GLITCH_TAIL_PX: f64 = 10.0;
pub const CHAOS_FLICKER_MIN: f64 = 0.2; // flickering numbers only above this chaos level
pub const CHAOS_FLICKER_MAX_LABELS: usize = 15;
pub const CHAOS_FLICKER_ALPHA: f64 = 0.4;
pub const CHAOS_BLUR_MAX_PX: f64 = 2.0;

// Coherent visual
pub const COHERENT_TIME_RATE: f64 = 0.6;
pub const COHERENT_GRID_PX: f64 = 30.0;
pub const COHERENT_GRID_ALPHA: f64 = 0.1;
pub const COHERENT_SIGNAL_ALPHA: f64 = 0.6;
pub const COHERENT_SIGNAL_AMPLITUDE_PX: f64 = 30.0;
pub const COHERENT_SIGNAL_STEP_PX: f64 = 2.0;
pub const COHERENT_GLOW_BLUR_PX: f64 = 20.0;
pub const COHERENT_NODE_RADIUS_PX: f64 = 8.0;
pub const COHERENT_NODE_PULSE_PX: f64 = 2.0;
pub const COHERENT_NODE_ALPHA: f64 = 0.8;
pub const COHERENT_RING_COUNT: usize = 3;
pub const COHERENT_RING_SPACING_PX: f64 = 30.0;
pub const COHERENT_RING_ALPHA: f64 = 0.3;

// Line-by-line reveal
pub const LINE_REVEAL_INTERVAL_MS: u64 = 400;
pub const DEFAULT_STAGGER_BASE_SEC: f64 = 0.1;
