//! Scalar easing curves shared by the behavior catalog.
//!
//! Both functions are total over all real inputs; the intended domain is
//! [0, 1]. Values outside it extrapolate rather than clamp, which lets
//! callers feed unclamped progress without special-casing.

use std::f32::consts::PI;

/// Elastic ease-out: springs past 1.0 and settles back.
///
/// Exactly 0 at x=0 and 1 at x=1; elsewhere
/// `2^(-10x) · sin((10x − 0.75) · 2π/3) + 1`.
pub fn ease_out_elastic(x: f32) -> f32 {
    let c4 = (2.0 * PI) / 3.0;
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        2f32.powf(-10.0 * x) * ((x * 10.0 - 0.75) * c4).sin() + 1.0
    }
}

/// Quadratic ease-in-out: symmetric slow-fast-slow.
pub fn ease_in_out_quad(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}
