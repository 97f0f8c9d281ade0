//! SMPTE drop-frame label arithmetic for 29.97 and 59.94 fps.
//!
//! The conversion layer in [`crate::convert`] counts every nominal frame
//! without skipping, which is how the calculators have always behaved. Real
//! drop-frame timecode instead skips the first two frame labels (four at
//! 59.94) of every minute not divisible by ten, so that the label stream
//! tracks wall-clock time. This module provides that labeling as a separate
//! opt-in path; nothing in the conversion layer depends on it.
//!
//! Labels keep the `HH:MM:SS:FF` notation of the rest of the crate.

use crate::convert;
use crate::error::{Result, TimecodeError};
use crate::rate::FrameRate;
use crate::timecode::Timecode;

/// Drop-frame counting constants for one rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DropFrameConfig {
    /// Frame labels skipped per dropped minute.
    pub dropped_per_minute: u64,
    /// Nominal integer frames per second.
    pub fps: u64,
    /// Real frames in a ten-minute block (one undropped + nine dropped minutes).
    pub frames_per_ten_minutes: u64,
    /// Real frames in a dropped minute.
    pub frames_per_minute: u64,
}

impl DropFrameConfig {
    /// Constants for 29.97 fps.
    #[must_use]
    pub const fn for_29_97() -> Self {
        Self {
            dropped_per_minute: 2,
            fps: 30,
            // 30 * 60 * 10 - 9 * 2
            frames_per_ten_minutes: 17_982,
            // 30 * 60 - 2
            frames_per_minute: 1798,
        }
    }

    /// Constants for 59.94 fps.
    #[must_use]
    pub const fn for_59_94() -> Self {
        Self {
            dropped_per_minute: 4,
            fps: 60,
            frames_per_ten_minutes: 35_964,
            frames_per_minute: 3596,
        }
    }

    /// Constants for a rate, if it belongs to the drop-frame family.
    #[must_use]
    pub fn for_rate(rate: FrameRate) -> Option<Self> {
        match rate {
            FrameRate::Fps29_97 => Some(Self::for_29_97()),
            FrameRate::Fps59_94 => Some(Self::for_59_94()),
            _ => None,
        }
    }
}

/// Convert a frame count to its drop-frame label.
///
/// Rates outside the drop-frame family fall back to the plain conversion.
#[must_use]
pub fn label_from_frame_count(frame_count: u64, rate: FrameRate) -> Timecode {
    let Some(config) = DropFrameConfig::for_rate(rate) else {
        return convert::to_timecode(frame_count, rate);
    };

    let undropped_minute = config.fps * 60;

    let ten_minute_blocks = frame_count / config.frames_per_ten_minutes;
    let rem = frame_count % config.frames_per_ten_minutes;

    // The first minute of each block keeps all its labels; the rest start
    // at label `dropped_per_minute`.
    let (minute_in_block, label_index) = if rem < undropped_minute {
        (0, rem)
    } else {
        let past_first = rem - undropped_minute;
        (
            1 + past_first / config.frames_per_minute,
            past_first % config.frames_per_minute + config.dropped_per_minute,
        )
    };

    let total_minutes = ten_minute_blocks * 10 + minute_in_block;

    Timecode {
        hours: total_minutes / 60,
        minutes: (total_minutes % 60) as u8,
        seconds: (label_index / config.fps) as u8,
        frames: (label_index % config.fps) as u8,
    }
}

/// Convert a drop-frame label to its frame count.
///
/// The label is assumed valid; use [`validate_label`] first for labels that
/// may sit on a dropped slot. Rates outside the drop-frame family fall back
/// to the plain conversion.
#[must_use]
pub fn frame_count_from_label(tc: &Timecode, rate: FrameRate) -> u64 {
    let Some(config) = DropFrameConfig::for_rate(rate) else {
        return convert::to_frame_count(tc, rate);
    };

    let total_minutes = tc.hours * 60 + tc.minutes as u64;
    let dropped_minutes = total_minutes - total_minutes / 10;

    (tc.hours * 3600 + tc.minutes as u64 * 60 + tc.seconds as u64) * config.fps
        + tc.frames as u64
        - dropped_minutes * config.dropped_per_minute
}

/// Whether a label sits on a dropped (skipped) slot.
#[must_use]
pub fn is_dropped_label(minutes: u8, seconds: u8, frames: u8, rate: FrameRate) -> bool {
    match DropFrameConfig::for_rate(rate) {
        Some(config) => {
            seconds == 0 && minutes % 10 != 0 && (frames as u64) < config.dropped_per_minute
        }
        None => false,
    }
}

/// Check that a label exists on the drop-frame grid.
pub fn validate_label(tc: &Timecode, rate: FrameRate) -> Result<()> {
    if is_dropped_label(tc.minutes, tc.seconds, tc.frames, rate) {
        return Err(TimecodeError::dropped_label(format!(
            "{tc} is skipped at {rate} fps drop-frame"
        )));
    }
    Ok(())
}

/// Wall-clock seconds elapsed at a drop-frame label.
///
/// This is what drop-frame exists for: the label stream stays aligned with
/// real time, so one labeled hour comes out as 3600 s (to within a frame).
#[must_use]
pub fn wall_clock_seconds(tc: &Timecode, rate: FrameRate) -> f64 {
    frame_count_from_label(tc, rate) as f64 / rate.nominal()
}
