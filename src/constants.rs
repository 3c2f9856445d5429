// Page layout and styling for the web frontend.
//
// Positions are canvas pixels measured from the top-left corner. Every label
// and control sits inside the reserved strip at the top of the canvas so
// pointer presses on them never start a drag.

// Canvas element looked up (or created) at start-up
pub const CANVAS_ID: &str = "app-canvas";

// Background and trail
pub const BACKGROUND_CSS: &str = "rgb(0, 0, 0)";
pub const TRAIL_FADE_RGB: (u8, u8, u8) = (0, 0, 0); // alpha comes from ripple_core::TRAIL_FADE_ALPHA

// Labels drawn on the canvas every frame
pub const LABEL_FONT: &str = "16px sans-serif";
pub const LABEL_FILL_CSS: &str = "rgb(255, 255, 255)";
pub const SIZE_LABEL: (&str, f64, f64) = ("Ripple Size:", 20.0, 30.0);
pub const SPEED_LABEL: (&str, f64, f64) = ("Ripple Speed:", 20.0, 70.0);
pub const COLOR_LABEL: (&str, f64, f64) = ("Color Mode:", 20.0, 110.0);

// DOM controls, absolutely positioned over the canvas
pub const SIZE_SLIDER_ID: &str = "size-slider";
pub const SPEED_SLIDER_ID: &str = "speed-slider";
pub const SIZE_SLIDER_POS: (f64, f64) = (20.0, 35.0);
pub const SPEED_SLIDER_POS: (f64, f64) = (20.0, 75.0);
pub const COLOR_BUTTON_POS: (f64, f64) = (20.0, 120.0);
pub const COLOR_BUTTON_TEXT: &str = "Color Mode";

// Nominal control heights used to keep them inside the reserved strip
pub const SLIDER_HEIGHT_PX: f64 = 20.0;
pub const BUTTON_HEIGHT_PX: f64 = 20.0;

// Ring stroke
pub const RING_LINE_WIDTH: f64 = 2.0;
