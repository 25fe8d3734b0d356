//! Shared primitive types used across the entire metrics core.

/// Talk time in whole seconds. Zero means "no talk-time signal".
pub type Seconds = u32;

/// A post-call survey rating. Zero means "absent"; valid values land in (0, 5].
pub type Rating = f64;
