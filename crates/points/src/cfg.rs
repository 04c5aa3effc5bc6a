//! Numeric defaults (internal).
//!
//! Policy
//! - Fixed constants, same as the rest of the crate's tolerance handling.
//!   Callers that need a different tolerance pass it explicitly
//!   (`Coordinates::is_close_eps`).

/// Tolerance for comparing points after a Cartesian/polar round trip.
pub(crate) const ROUND_TRIP_EPS: f64 = 1e-8;
/// Upper bound on Cohen–Sutherland iterations before giving up.
///
/// Integer rounding of intersections can keep an endpoint outside a viewport
/// whose edges are not integral; the clipper reports that instead of looping.
pub(crate) const CLIP_STEP_BUDGET: usize = 16;
/// Decimal places past which rounding is the identity on every finite `f64`.
///
/// The smallest subnormal is about `4.9e-324`, so 340 places already keep
/// every stored value exactly.
pub(crate) const EXACT_DECIMAL_PLACES: u32 = 340;
