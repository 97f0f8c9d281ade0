//! Timecode value type.

use crate::error::{Result, TimecodeError};
use crate::rate::FrameRate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum hours accepted from direct entry (the engine itself is unbounded
/// above; sums past this limit stay structurally valid).
pub const MAX_HOURS: u64 = 99;

/// Maximum minutes value in a normalized timecode.
pub const MAX_MINUTES: u8 = 59;

/// Maximum seconds value in a normalized timecode.
pub const MAX_SECONDS: u8 = 59;

/// A positional `HH:MM:SS:FF` timecode.
///
/// A plain value with no identity beyond its four components; two timecodes
/// with equal components are interchangeable. The frames bound depends on
/// the [`FrameRate`] the value is used with, which is passed to every
/// conversion separately rather than stored here.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Timecode {
    /// Hours (0-99 from direct entry; unbounded from arithmetic)
    pub hours: u64,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
    /// Frames (0 to `fps_rounded - 1`)
    pub frames: u8,
}

impl Timecode {
    /// The zero timecode, `00:00:00:00`.
    pub const ZERO: Timecode = Timecode {
        hours: 0,
        minutes: 0,
        seconds: 0,
        frames: 0,
    };

    /// Create a timecode, validating every component against its bound.
    ///
    /// This is the checked constructor for confirmed external values.
    /// Interactive per-keystroke input should go through
    /// [`crate::normalize`] instead, which clamps rather than fails.
    pub fn new(hours: u64, minutes: u8, seconds: u8, frames: u8, rate: FrameRate) -> Result<Self> {
        if hours > MAX_HOURS {
            return Err(TimecodeError::invalid_component("hours", hours, MAX_HOURS));
        }
        if minutes > MAX_MINUTES {
            return Err(TimecodeError::invalid_component(
                "minutes",
                minutes as u64,
                MAX_MINUTES as u64,
            ));
        }
        if seconds > MAX_SECONDS {
            return Err(TimecodeError::invalid_component(
                "seconds",
                seconds as u64,
                MAX_SECONDS as u64,
            ));
        }
        let max_frames = rate.max_frame_index();
        if frames as u32 > max_frames {
            return Err(TimecodeError::invalid_component(
                "frames",
                frames as u64,
                max_frames as u64,
            ));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
            frames,
        })
    }

    /// Check if this is the zero timecode.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

/// Parse a `HH:MM:SS:FF` string against an explicit frame rate.
///
/// Only the colon-separated notation is accepted; the drop-frame semicolon
/// and any other notation are rejected as a format error.
pub fn parse_timecode(s: &str, rate: FrameRate) -> Result<Timecode> {
    let parts: Vec<&str> = s.trim().split(':').collect();

    if parts.len() != 4 {
        return Err(TimecodeError::invalid_format(
            "Expected format HH:MM:SS:FF",
        ));
    }

    let component = |part: &str, name: &str| -> Result<u64> {
        part.parse::<u64>()
            .map_err(|_| TimecodeError::invalid_format(format!("Invalid {name}: {part}")))
    };

    let hours = component(parts[0], "hours")?;
    let minutes = component(parts[1], "minutes")?;
    let seconds = component(parts[2], "seconds")?;
    let frames = component(parts[3], "frames")?;

    if minutes > MAX_MINUTES as u64 {
        return Err(TimecodeError::invalid_component(
            "minutes",
            minutes,
            MAX_MINUTES as u64,
        ));
    }
    if seconds > MAX_SECONDS as u64 {
        return Err(TimecodeError::invalid_component(
            "seconds",
            seconds,
            MAX_SECONDS as u64,
        ));
    }
    if frames > rate.max_frame_index() as u64 {
        return Err(TimecodeError::invalid_component(
            "frames",
            frames,
            rate.max_frame_index() as u64,
        ));
    }

    Timecode::new(hours, minutes as u8, seconds as u8, frames as u8, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_valid() {
        let tc = Timecode::new(1, 30, 45, 12, FrameRate::Fps24).unwrap();
        assert_eq!(tc.hours, 1);
        assert_eq!(tc.minutes, 30);
        assert_eq!(tc.seconds, 45);
        assert_eq!(tc.frames, 12);
    }

    #[test]
    fn test_new_bounds() {
        assert!(Timecode::new(99, 59, 59, 23, FrameRate::Fps24).is_ok());

        assert!(Timecode::new(100, 0, 0, 0, FrameRate::Fps24).is_err());
        assert!(Timecode::new(0, 60, 0, 0, FrameRate::Fps24).is_err());
        assert!(Timecode::new(0, 0, 60, 0, FrameRate::Fps24).is_err());
        assert!(Timecode::new(0, 0, 0, 24, FrameRate::Fps24).is_err());

        // The frames bound follows the rounded rate.
        assert!(Timecode::new(0, 0, 0, 29, FrameRate::Fps29_97).is_ok());
        assert!(Timecode::new(0, 0, 0, 30, FrameRate::Fps29_97).is_err());
        assert!(Timecode::new(0, 0, 0, 59, FrameRate::Fps59_94).is_ok());
    }

    #[test]
    fn test_display_zero_padded() {
        let tc = Timecode::new(1, 2, 3, 4, FrameRate::Fps24).unwrap();
        assert_eq!(tc.to_string(), "01:02:03:04");
        assert_eq!(Timecode::ZERO.to_string(), "00:00:00:00");
    }

    #[test]
    fn test_is_zero() {
        assert!(Timecode::ZERO.is_zero());
        assert!(!Timecode::new(0, 0, 0, 1, FrameRate::Fps24).unwrap().is_zero());
    }

    #[test]
    fn test_component_ordering() {
        let a = Timecode::new(0, 0, 0, 5, FrameRate::Fps24).unwrap();
        let b = Timecode::new(0, 0, 1, 0, FrameRate::Fps24).unwrap();
        let c = Timecode::new(1, 0, 0, 0, FrameRate::Fps24).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_parse_timecode() {
        let tc = parse_timecode("01:30:45:12", FrameRate::Fps25).unwrap();
        assert_eq!(tc, Timecode::new(1, 30, 45, 12, FrameRate::Fps25).unwrap());

        // Whitespace is tolerated, other notations are not.
        assert!(parse_timecode("  00:00:10:00 ", FrameRate::Fps24).is_ok());
        assert!(parse_timecode("01:30:45;12", FrameRate::Fps29_97).is_err());
        assert!(parse_timecode("01:30:45", FrameRate::Fps24).is_err());
        assert!(parse_timecode("01:30:45:12:00", FrameRate::Fps24).is_err());
        assert!(parse_timecode("aa:bb:cc:dd", FrameRate::Fps24).is_err());
    }

    #[test]
    fn test_parse_respects_frame_bound() {
        assert!(parse_timecode("00:00:00:24", FrameRate::Fps25).is_ok());
        assert!(parse_timecode("00:00:00:25", FrameRate::Fps25).is_err());
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let original = "12:34:56:07";
        let tc = parse_timecode(original, FrameRate::Fps24).unwrap();
        assert_eq!(tc.to_string(), original);
    }

    #[test]
    fn test_serialization() {
        let tc = Timecode::new(1, 30, 45, 12, FrameRate::Fps24).unwrap();
        let json = serde_json::to_string(&tc).unwrap();
        let decoded: Timecode = serde_json::from_str(&json).unwrap();
        assert_eq!(tc, decoded);
    }
}
