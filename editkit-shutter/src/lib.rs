//! Shutter Calculations for the Video Editor's Toolkit
//!
//! Converts between frame rate, shutter angle, and shutter speed, and
//! classifies the motion blur a given angle produces. The 180° shutter is
//! the baseline: at 24 fps it exposes each frame for 1/48 s.
//!
//! Unlike the timecode engine, the frame rate here is a free parameter;
//! overcranked rates like 120 fps are normal in this calculator.
//!
//! # Quick Start
//!
//! ```rust
//! use editkit_shutter::{shutter_speed, MotionBlur};
//!
//! let speed = shutter_speed(24.0, 180.0).unwrap();
//! assert_eq!(speed.to_string(), "1/48");
//!
//! assert_eq!(MotionBlur::classify(180.0), MotionBlur::Standard);
//! assert_eq!(MotionBlur::classify(45.0), MotionBlur::Minimal);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Result, ShutterError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Frame rates offered as quick selections, in fps.
pub const COMMON_FRAME_RATES: [f64; 6] = [24.0, 25.0, 30.0, 50.0, 60.0, 120.0];

/// Shutter angles offered as quick selections, in degrees.
pub const COMMON_ANGLES: [f64; 4] = [180.0, 90.0, 270.0, 360.0];

/// A shutter speed expressed as the fraction `1/denominator` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShutterSpeed {
    /// Denominator of the exposure fraction.
    pub denominator: u32,
}

impl ShutterSpeed {
    /// Exposure time in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        1.0 / self.denominator as f64
    }
}

impl fmt::Display for ShutterSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{}", self.denominator)
    }
}

/// Qualitative motion blur produced by a shutter angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionBlur {
    /// Very sharp motion, staccato feel (up to 90°).
    Minimal,
    /// Noticeably reduced blur (up to 170°).
    Reduced,
    /// The filmic baseline around 180°.
    Standard,
    /// More blur than the baseline (up to 270°).
    Increased,
    /// Maximum smear, dreamlike motion (past 270°).
    Heavy,
}

impl MotionBlur {
    /// Classify a shutter angle in degrees.
    #[must_use]
    pub fn classify(angle: f64) -> Self {
        if angle <= 90.0 {
            Self::Minimal
        } else if angle <= 170.0 {
            Self::Reduced
        } else if angle <= 190.0 {
            Self::Standard
        } else if angle <= 270.0 {
            Self::Increased
        } else {
            Self::Heavy
        }
    }
}

/// Shutter speed for a frame rate and shutter angle.
///
/// `1 / (rate * angle / 360)`, with the denominator rounded to the nearest
/// whole fraction as cameras display it (and floored at 1/1 for very slow
/// combinations).
pub fn shutter_speed(rate: f64, angle: f64) -> Result<ShutterSpeed> {
    if rate.is_nan() || rate <= 0.0 {
        return Err(ShutterError::invalid_rate(rate));
    }
    if angle.is_nan() || angle <= 0.0 || angle > 360.0 {
        return Err(ShutterError::invalid_angle(angle));
    }

    let denominator = (rate * (angle / 360.0)).round().max(1.0) as u32;
    Ok(ShutterSpeed { denominator })
}

/// Shutter angle that produces a given shutter speed at a frame rate.
///
/// Inverse of [`shutter_speed`]; fails when the speed is slower than one
/// frame period (which would need an angle past 360°).
pub fn angle_for_speed(rate: f64, speed: ShutterSpeed) -> Result<f64> {
    if rate.is_nan() || rate <= 0.0 {
        return Err(ShutterError::invalid_rate(rate));
    }
    if speed.denominator == 0 {
        return Err(ShutterError::InvalidSpeed);
    }

    let angle = 360.0 * rate / speed.denominator as f64;
    if angle > 360.0 {
        return Err(ShutterError::invalid_angle(angle));
    }
    Ok(angle)
}
