//! Timecode Conversion & Arithmetic for the Video Editor's Toolkit
//!
//! This crate is the numeric core behind the toolkit's timecode calculator:
//!
//! - **Frame rate profiles**: the eight production rates (23.976 through
//!   60 fps) with their integer frame-accounting constants
//! - **Timecode values**: normalized `HH:MM:SS:FF` with parsing and
//!   formatting
//! - **Conversion**: timecode ↔ absolute frame count ↔ wall-clock duration
//! - **Arithmetic**: addition and zero-saturating subtraction
//! - **Input normalization**: per-keystroke clamping that never fails
//! - **Drop-frame labels**: opt-in SMPTE label skipping for 29.97/59.94
//!
//! # Quick Start
//!
//! ```rust
//! use editkit_timecode::{arith, convert, FrameRate, Timecode};
//!
//! let rate: FrameRate = "29.97".parse().unwrap();
//!
//! let tc = Timecode::new(1, 0, 0, 0, rate).unwrap();
//! assert_eq!(convert::to_frame_count(&tc, rate), 107_892);
//!
//! // Frame counts convert back exactly, at every rate.
//! assert_eq!(convert::to_timecode(107_892, rate), tc);
//!
//! // Arithmetic goes through frame counts and saturates at zero.
//! let sum = arith::add(&tc, &tc, rate);
//! assert_eq!(sum.to_string(), "02:00:00:00");
//! assert_eq!(arith::subtract(&tc, &sum, rate), Timecode::ZERO);
//! ```
//!
//! # Interactive input
//!
//! Field-level input is clamped, never rejected, so editing stays live on
//! every keystroke:
//!
//! ```rust
//! use editkit_timecode::{normalize, FrameRate};
//!
//! let rate = FrameRate::Fps24;
//! assert_eq!(normalize::clamp_component(normalize::Field::Frames, "99", rate), 23);
//! assert_eq!(normalize::clamp_component(normalize::Field::Minutes, "", rate), 0);
//! ```
//!
//! # Real time
//!
//! Timecode accounting is integral, but wall-clock conversion uses the
//! exact fractional rate:
//!
//! ```rust
//! use editkit_timecode::{convert, FrameRate, Timecode};
//!
//! let tc = Timecode::new(0, 0, 1, 12, FrameRate::Fps24).unwrap();
//! let seconds = convert::to_real_time_seconds(&tc, FrameRate::Fps24);
//! assert_eq!(convert::format_real_time(seconds), "00:00:01.500");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod arith;
pub mod convert;
pub mod dropframe;
pub mod error;
pub mod normalize;
pub mod rate;
pub mod timecode;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use rate::FrameRate;
pub use timecode::{parse_timecode, Timecode, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};

/// Create a timecode from hours, minutes, seconds, and frames.
///
/// Convenience shorthand for [`Timecode::new`].
///
/// # Example
/// ```rust
/// use editkit_timecode::{timecode, FrameRate};
///
/// let tc = timecode(1, 30, 45, 12, FrameRate::Fps24).unwrap();
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
pub fn timecode(hours: u64, minutes: u8, seconds: u8, frames: u8, rate: FrameRate) -> Result<Timecode> {
    Timecode::new(hours, minutes, seconds, frames, rate)
}

/// Signed frame distance from `start` to `end` at the given rate.
///
/// Negative when `end` is before `start`. Unlike
/// [`arith::subtract`], this reports direction instead of saturating.
#[must_use]
pub fn duration_frames(start: &Timecode, end: &Timecode, rate: FrameRate) -> i64 {
    convert::to_frame_count(end, rate) as i64 - convert::to_frame_count(start, rate) as i64
}

/// Wall-clock seconds from `start` to `end` at the given rate.
///
/// Negative when `end` is before `start`.
#[must_use]
pub fn duration_seconds(start: &Timecode, end: &Timecode, rate: FrameRate) -> f64 {
    convert::to_real_time_seconds(end, rate) - convert::to_real_time_seconds(start, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timecode_convenience() {
        let tc = timecode(1, 30, 45, 12, FrameRate::Fps24).unwrap();
        assert_eq!(tc.to_string(), "01:30:45:12");
    }

    #[test]
    fn test_duration_frames() {
        let start = timecode(0, 0, 0, 0, FrameRate::Fps24).unwrap();
        let end = timecode(0, 0, 1, 0, FrameRate::Fps24).unwrap();
        assert_eq!(duration_frames(&start, &end, FrameRate::Fps24), 24);
        assert_eq!(duration_frames(&end, &start, FrameRate::Fps24), -24);
    }

    #[test]
    fn test_duration_seconds() {
        let start = timecode(0, 0, 0, 0, FrameRate::Fps25).unwrap();
        let end = timecode(0, 1, 0, 0, FrameRate::Fps25).unwrap();
        let d = duration_seconds(&start, &end, FrameRate::Fps25);
        assert!((d - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_HOURS, 99);
        assert_eq!(MAX_MINUTES, 59);
        assert_eq!(MAX_SECONDS, 59);
    }

    #[test]
    fn test_selector_set_matches_profiles() {
        let selectors = ["23.976", "24", "25", "29.97", "30", "50", "59.94", "60"];
        for (s, fr) in selectors.iter().zip(FrameRate::ALL) {
            assert_eq!(s.parse::<FrameRate>().unwrap(), fr);
        }
    }
}
