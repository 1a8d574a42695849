//! Damped replicator update for the Jumper/Waiter game.
//!
//! The colony state is a single scalar `x ∈ [0, 1]`, the proportion of
//! Jumpers. Given the waiting cost `T`, the dynamic has a closed-form rest
//! point
//!
//! ```text
//! x*(T) = (3 + T) / (8 + 0.35 T)
//! ```
//!
//! and each round moves `x` toward the (clamped) rest point with
//!
//! ```text
//! gap = target - x
//! x'  = x + STEP * gap * (1 - |gap|)
//! ```
//!
//! The `(1 - |gap|)` factor shrinks the step as the gap widens, so the
//! update never overshoots the target: for `|gap| <= 1` the new gap is
//! `gap * (1 - STEP * (1 - |gap|))`, which keeps its sign and never grows.
//!
//! All functions are total over `f64`. Out-of-domain inputs (for example
//! `T` at [`DENOMINATOR_POLE`]) produce the IEEE-754 result of the
//! arithmetic rather than a panic or an error.

/// Relative step size of the damped update.
pub const STEP: f64 = 0.6;

/// Waiting cost at which the rest-point denominator `8 + 0.35 T` vanishes.
pub const DENOMINATOR_POLE: f64 = -160.0 / 7.0;

/// Clamp a proportion into `[0, 1]`.
///
/// NaN passes through unchanged.
#[inline]
pub fn clamp_proportion(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Unclamped rest point `x*(T)` of the dynamic.
///
/// For `T` above roughly 7.69 the raw value exceeds 1.0; callers that use
/// it as an update target must clamp it first (see [`target`]).
///
/// ```
/// use rookery_core::fixed_point;
///
/// assert_eq!(fixed_point(0.0), 0.375);
/// assert!((fixed_point(3.0) - 6.0 / 9.05).abs() < 1e-12);
/// ```
#[inline]
pub fn fixed_point(waiting_cost: f64) -> f64 {
    (3.0 + waiting_cost) / (8.0 + 0.35 * waiting_cost)
}

/// The rest point clamped into the feasible range `[0, 1]`.
#[inline]
pub fn target(waiting_cost: f64) -> f64 {
    clamp_proportion(fixed_point(waiting_cost))
}

/// Signed distance from `x` to the clamped rest point.
#[inline]
pub fn gap(x: f64, waiting_cost: f64) -> f64 {
    target(waiting_cost) - x
}

/// One damped update step, without clamping the result.
///
/// The target is clamped internally; the returned value is not. For
/// `x ∈ [0, 1]` the result always lies between `x` and the target, but
/// callers iterating the dynamic should still go through
/// [`advance_clamped`] so the `[0, 1]` invariant holds for any input.
///
/// ```
/// use rookery_core::advance;
///
/// // x0 = 0, T = 0: target 0.375, gap 0.375.
/// assert!((advance(0.0, 0.0) - 0.140625).abs() < 1e-12);
/// ```
#[inline]
pub fn advance(x: f64, waiting_cost: f64) -> f64 {
    let gap = gap(x, waiting_cost);
    x + STEP * gap * (1.0 - gap.abs())
}

/// One damped update step followed by the clamp into `[0, 1]`.
///
/// This is the transition the run loop applies every round.
#[inline]
pub fn advance_clamped(x: f64, waiting_cost: f64) -> f64 {
    clamp_proportion(advance(x, waiting_cost))
}
