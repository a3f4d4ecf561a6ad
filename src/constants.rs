// DOM hooks the front-end looks for. Every feature is optional: a page that
// lacks the element simply skips it.

// Cursor trail canvas (`<canvas id="trail">`)
pub const TRAIL_CANVAS_ID: &str = "trail";
// Trail overrides are read from `data-<key>` attributes on the canvas
pub const DATA_ATTR_PREFIX: &str = "data-";

// Project cards with a hover shine child
pub const CARD_SELECTOR: &str = ".card";
pub const SHINE_SELECTOR: &str = ".shine";
pub const SHINE_X_VAR: &str = "--mx";
pub const SHINE_Y_VAR: &str = "--my";

// Footer element that receives the current year
pub const YEAR_ELEMENT_ID: &str = "year";
