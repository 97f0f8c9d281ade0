//! Lenient normalization of interactive input.
//!
//! Editing a timecode happens one keystroke at a time, and half-typed
//! values are the normal case, not an error. Everything here therefore
//! clamps instead of failing: unparseable text reads as zero, negatives
//! clamp to zero, and overshoot clamps to the field's bound. The result is
//! always a valid in-range integer, so a caller can write it straight back
//! into a [`Timecode`] without checking anything.

use crate::rate::FrameRate;
use crate::timecode::{Timecode, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};

/// A timecode component field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The hours field.
    Hours,
    /// The minutes field.
    Minutes,
    /// The seconds field.
    Seconds,
    /// The frames field.
    Frames,
}

impl Field {
    /// Upper bound for this field at the given rate.
    #[must_use]
    pub fn max(self, rate: FrameRate) -> u64 {
        match self {
            Self::Hours => MAX_HOURS,
            Self::Minutes => MAX_MINUTES as u64,
            Self::Seconds => MAX_SECONDS as u64,
            Self::Frames => rate.max_frame_index() as u64,
        }
    }
}

/// Clamp raw field input into the field's valid range.
///
/// Parse failure (including empty or in-progress text) reads as 0.
#[must_use]
pub fn clamp_component(field: Field, raw: &str, rate: FrameRate) -> u64 {
    let value = raw.trim().parse::<i64>().unwrap_or(0).max(0) as u64;
    value.min(field.max(rate))
}

/// Clamp raw input for the total-frames field to a non-negative count.
#[must_use]
pub fn clamp_frame_count(raw: &str) -> u64 {
    raw.trim().parse::<i64>().unwrap_or(0).max(0) as u64
}

/// Clamp four raw component inputs into a valid timecode.
#[must_use]
pub fn normalize_parts(
    hours: &str,
    minutes: &str,
    seconds: &str,
    frames: &str,
    rate: FrameRate,
) -> Timecode {
    Timecode {
        hours: clamp_component(Field::Hours, hours, rate),
        minutes: clamp_component(Field::Minutes, minutes, rate) as u8,
        seconds: clamp_component(Field::Seconds, seconds, rate) as u8,
        frames: clamp_component(Field::Frames, frames, rate) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamp_in_range_passthrough() {
        let rate = FrameRate::Fps24;
        assert_eq!(clamp_component(Field::Hours, "12", rate), 12);
        assert_eq!(clamp_component(Field::Minutes, "59", rate), 59);
        assert_eq!(clamp_component(Field::Frames, "23", rate), 23);
    }

    #[test]
    fn test_clamp_overshoot() {
        let rate = FrameRate::Fps24;
        assert_eq!(clamp_component(Field::Hours, "150", rate), 99);
        assert_eq!(clamp_component(Field::Minutes, "75", rate), 59);
        assert_eq!(clamp_component(Field::Seconds, "60", rate), 59);
        assert_eq!(clamp_component(Field::Frames, "24", rate), 23);
    }

    #[test]
    fn test_frames_bound_follows_rate() {
        assert_eq!(
            clamp_component(Field::Frames, "45", FrameRate::Fps29_97),
            29
        );
        assert_eq!(clamp_component(Field::Frames, "45", FrameRate::Fps50), 45);
        assert_eq!(clamp_component(Field::Frames, "99", FrameRate::Fps60), 59);
    }

    #[test]
    fn test_unparseable_reads_as_zero() {
        let rate = FrameRate::Fps24;
        assert_eq!(clamp_component(Field::Hours, "", rate), 0);
        assert_eq!(clamp_component(Field::Hours, "abc", rate), 0);
        assert_eq!(clamp_component(Field::Seconds, "1.5", rate), 0);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        let rate = FrameRate::Fps24;
        assert_eq!(clamp_component(Field::Minutes, "-3", rate), 0);
        assert_eq!(clamp_frame_count("-100"), 0);
    }

    #[test]
    fn test_leading_zeros_and_whitespace() {
        let rate = FrameRate::Fps24;
        assert_eq!(clamp_component(Field::Seconds, "07", rate), 7);
        assert_eq!(clamp_component(Field::Seconds, " 12 ", rate), 12);
    }

    #[test]
    fn test_clamp_frame_count() {
        assert_eq!(clamp_frame_count("107892"), 107_892);
        assert_eq!(clamp_frame_count("garbage"), 0);
        assert_eq!(clamp_frame_count(""), 0);
    }

    #[test]
    fn test_normalize_parts() {
        let tc = normalize_parts("1", "75", "xyz", "40", FrameRate::Fps30);
        assert_eq!(tc.hours, 1);
        assert_eq!(tc.minutes, 59);
        assert_eq!(tc.seconds, 0);
        assert_eq!(tc.frames, 29);
    }

    #[test]
    fn test_normalized_value_is_always_constructible() {
        for rate in FrameRate::ALL {
            let tc = normalize_parts("999", "999", "999", "999", rate);
            assert!(Timecode::new(tc.hours, tc.minutes, tc.seconds, tc.frames, rate).is_ok());
        }
    }
}
