//! Test suite - one file per area, exercised headless: hex math
//! properties, camera transform invariants, picker scenarios, and the
//! draw pass against the recording surface.

mod camera_math;
mod hex_props;
