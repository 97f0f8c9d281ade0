//! Frame rate profiles for timecode accounting.
//!
//! A [`FrameRate`] describes one of the eight production frame rates the
//! calculators accept. The fractional NTSC-derived rates (23.976, 29.97,
//! 59.94) are carried as their decimal nominal values, the same values the
//! frame-rate selector hands over, and every integer frame-accounting
//! constant is derived from the nominal value with a single rounding
//! convention (round half away from zero).

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Frame rates supported by the timecode engine.
///
/// This is a closed set: arbitrary or custom rates are rejected with
/// [`TimecodeError::UnsupportedFrameRate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    /// 23.976 fps (NTSC film)
    Fps23_976,
    /// 24 fps (film)
    Fps24,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps (NTSC)
    Fps29_97,
    /// 30 fps (NTSC)
    Fps30,
    /// 50 fps (PAL high speed)
    Fps50,
    /// 59.94 fps (NTSC high speed)
    Fps59_94,
    /// 60 fps (NTSC high speed)
    Fps60,
}

impl FrameRate {
    /// All supported frame rates, in ascending order.
    pub const ALL: [FrameRate; 8] = [
        Self::Fps23_976,
        Self::Fps24,
        Self::Fps25,
        Self::Fps29_97,
        Self::Fps30,
        Self::Fps50,
        Self::Fps59_94,
        Self::Fps60,
    ];

    /// Resolve a nominal rate value to a profile.
    ///
    /// Only the eight enumerated values are accepted; anything else fails
    /// with [`TimecodeError::UnsupportedFrameRate`]. This is the one error
    /// the engine surfaces to the caller rather than coercing away.
    pub fn from_nominal(rate: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|fr| fr.nominal() == rate)
            .ok_or_else(|| TimecodeError::unsupported_frame_rate(rate))
    }

    /// Get the nominal rate as a floating point value.
    ///
    /// For fractional rates this is the decimal value itself (29.97, not
    /// 30000/1001); real-time conversion depends on it being exact.
    #[must_use]
    pub fn nominal(&self) -> f64 {
        match self {
            Self::Fps23_976 => 23.976,
            Self::Fps24 => 24.0,
            Self::Fps25 => 25.0,
            Self::Fps29_97 => 29.97,
            Self::Fps30 => 30.0,
            Self::Fps50 => 50.0,
            Self::Fps59_94 => 59.94,
            Self::Fps60 => 60.0,
        }
    }

    /// Nominal rate rounded to an integer frames-per-second.
    ///
    /// This bounds the frames component of a timecode: one displayed second
    /// holds `fps_rounded()` frame slots, even at fractional rates.
    #[must_use]
    pub fn fps_rounded(&self) -> u32 {
        match self {
            Self::Fps23_976 | Self::Fps24 => 24,
            Self::Fps25 => 25,
            Self::Fps29_97 | Self::Fps30 => 30,
            Self::Fps50 => 50,
            Self::Fps59_94 | Self::Fps60 => 60,
        }
    }

    /// Largest valid frames component, `fps_rounded() - 1`.
    #[must_use]
    pub fn max_frame_index(&self) -> u32 {
        self.fps_rounded() - 1
    }

    /// Whether this rate belongs to the drop-frame family (29.97 and 59.94).
    ///
    /// The conversion path does not apply drop-frame label skipping; this
    /// flag tells callers which rates the [`crate::dropframe`] module
    /// supports.
    #[must_use]
    pub fn is_drop_frame_family(&self) -> bool {
        matches!(self, Self::Fps29_97 | Self::Fps59_94)
    }

    /// Frames in one displayed second, `round(nominal)`.
    #[must_use]
    pub fn frames_per_second(&self) -> u64 {
        self.fps_rounded() as u64
    }

    /// Frames in one displayed minute, `round(60 * nominal)`.
    #[must_use]
    pub fn frames_per_minute(&self) -> u64 {
        (60.0 * self.nominal()).round() as u64
    }

    /// Frames in one displayed hour, `round(3600 * nominal)`.
    #[must_use]
    pub fn frames_per_hour(&self) -> u64 {
        (3600.0 * self.nominal()).round() as u64
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Fps23_976 => "23.976",
            Self::Fps24 => "24",
            Self::Fps25 => "25",
            Self::Fps29_97 => "29.97",
            Self::Fps30 => "30",
            Self::Fps50 => "50",
            Self::Fps59_94 => "59.94",
            Self::Fps60 => "60",
        };
        f.write_str(s)
    }
}

impl FromStr for FrameRate {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "23.976" => Ok(Self::Fps23_976),
            "24" => Ok(Self::Fps24),
            "25" => Ok(Self::Fps25),
            "29.97" => Ok(Self::Fps29_97),
            "30" => Ok(Self::Fps30),
            "50" => Ok(Self::Fps50),
            "59.94" => Ok(Self::Fps59_94),
            "60" => Ok(Self::Fps60),
            other => Err(TimecodeError::unsupported_frame_rate(other)),
        }
    }
}
