//! Bidirectional conversion between timecode, frame count, and real time.
//!
//! The absolute frame count is the pivot for everything: arithmetic and
//! both display conversions go through it. Frame accounting is integral,
//! built on fixed per-hour/minute/second frame constants rounded once from
//! the nominal rate (see [`FrameRate`]), so converting a frame count to a
//! timecode and back reproduces the count exactly at every rate, fractional
//! ones included.
//!
//! Real time is the deliberate exception: timecode counts whole frame slots
//! per displayed second, but a 29.97 fps frame does not last 1/30 s, so
//! [`to_real_time_seconds`] divides by the exact nominal rate instead.

use crate::rate::FrameRate;
use crate::timecode::Timecode;

/// Convert a timecode to an absolute frame count.
///
/// # Example
/// ```rust
/// use editkit_timecode::{convert, FrameRate, Timecode};
///
/// let tc = Timecode::new(1, 0, 0, 0, FrameRate::Fps29_97).unwrap();
/// assert_eq!(convert::to_frame_count(&tc, FrameRate::Fps29_97), 107_892);
/// ```
#[must_use]
pub fn to_frame_count(tc: &Timecode, rate: FrameRate) -> u64 {
    tc.hours * rate.frames_per_hour()
        + tc.minutes as u64 * rate.frames_per_minute()
        + tc.seconds as u64 * rate.frames_per_second()
        + tc.frames as u64
}

/// Convert an absolute frame count to a timecode.
///
/// Decomposes by successive integer division, largest unit first. Feeding
/// the result back through [`to_frame_count`] reproduces `frame_count`
/// exactly for every input; that invertibility is the contract the
/// property suite pins down.
///
/// There is no upper bound: counts past 99 hours produce a structurally
/// valid result with a larger hours component. At fractional rates a few
/// counts per hour sit past the last in-range label (an hour holds slightly
/// more frames than 60 timecode minutes); those decompose with a minutes
/// component of 60 rather than disturbing neighbouring labels.
#[must_use]
pub fn to_timecode(frame_count: u64, rate: FrameRate) -> Timecode {
    let hours = frame_count / rate.frames_per_hour();
    let rem = frame_count % rate.frames_per_hour();

    let minutes = rem / rate.frames_per_minute();
    let rem = rem % rate.frames_per_minute();

    let seconds = rem / rate.frames_per_second();
    let frames = rem % rate.frames_per_second();

    Timecode {
        hours,
        minutes: minutes as u8,
        seconds: seconds as u8,
        frames: frames as u8,
    }
}

/// Convert a timecode to its wall-clock duration in seconds.
///
/// Uses the exact nominal rate: `01:00:00:00` at 29.97 fps is 3600 timecode
/// seconds but runs slightly longer than an hour of real time per frame
/// slot, and the frames component contributes `frames / 29.97` seconds.
#[must_use]
pub fn to_real_time_seconds(tc: &Timecode, rate: FrameRate) -> f64 {
    tc.hours as f64 * 3600.0
        + tc.minutes as f64 * 60.0
        + tc.seconds as f64
        + tc.frames as f64 / rate.nominal()
}

/// Format a duration in seconds as `HH:MM:SS.mmm`.
///
/// Milliseconds are rounded; a round up to 1000 carries into the seconds
/// (and onward), so `59.9996` formats as `00:01:00.000`.
#[must_use]
pub fn format_real_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;

    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
