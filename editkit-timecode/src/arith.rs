//! Timecode addition and subtraction.
//!
//! Both operations pivot through the absolute frame count, so they inherit
//! the conversion layer's rounding behaviour wholesale. Subtraction
//! saturates at zero instead of failing: interactive use should never be
//! interrupted by an underflow that the operator can see and fix in place.

use crate::convert::{to_frame_count, to_timecode};
use crate::rate::FrameRate;
use crate::timecode::Timecode;

/// Add two timecodes at the given rate.
///
/// No upper bound is enforced; a sum past 99 hours yields a structurally
/// valid timecode with a larger hours component. Capping at a display
/// ceiling is the caller's decision.
#[must_use]
pub fn add(a: &Timecode, b: &Timecode, rate: FrameRate) -> Timecode {
    to_timecode(
        to_frame_count(a, rate) + to_frame_count(b, rate),
        rate,
    )
}

/// Subtract `b` from `a` at the given rate, saturating at zero.
///
/// A difference that would go negative returns `00:00:00:00` rather than an
/// error.
#[must_use]
pub fn subtract(a: &Timecode, b: &Timecode, rate: FrameRate) -> Timecode {
    to_timecode(
        to_frame_count(a, rate).saturating_sub(to_frame_count(b, rate)),
        rate,
    )
}
