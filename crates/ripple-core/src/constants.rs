use crate::controls::SliderSpec;

// Shared ripple/tone tuning constants used by both web and native frontends.

// Lifecycle
pub const LIFESPAN_START: i32 = 255; // doubles as the initial stroke alpha
pub const LIFESPAN_DECAY_PER_TICK: i32 = 2;

// Rendering
pub const RING_STROKE_WEIGHT: f32 = 2.0;
pub const TRAIL_FADE_ALPHA: f32 = 25.0 / 255.0; // background wash applied every frame
pub const CHANNEL_MAX: f32 = 255.0; // HSB channels live in [0, 255]

// Colors
pub const STATIC_RIPPLE_HSB: [f32; 3] = [128.0, 204.0, 255.0];
pub const DYNAMIC_CHANNEL_WRAP: f32 = 255.0;

// Interaction
pub const UI_RESERVED_HEIGHT: f32 = 140.0; // top strip owned by the controls

// Tone mapping: initial radius range -> frequency range
pub const TONE_RADIUS_RANGE: [f32; 2] = [1.0, 20.0];
pub const TONE_FREQUENCY_RANGE_HZ: [f32; 2] = [100.0, 500.0];

// Tone envelope
pub const TONE_PEAK_AMPLITUDE: f32 = 0.5;
pub const TONE_ATTACK_SEC: f32 = 0.1;
pub const TONE_STOP_AFTER_SEC: f32 = 0.5;

// Controls
pub const SIZE_SLIDER: SliderSpec = SliderSpec {
    min: 1.0,
    max: 20.0,
    step: 1.0,
    default: 10.0,
};

pub const SPEED_SLIDER: SliderSpec = SliderSpec {
    min: 0.0,
    max: 2.0,
    step: 0.1,
    default: 0.5,
};

// Keyboard nudges (one slider step)
pub const SIZE_NUDGE: f32 = 1.0;
pub const SPEED_NUDGE: f32 = 0.1;
