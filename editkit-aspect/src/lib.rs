//! Aspect-Ratio Geometry for the Video Editor's Toolkit
//!
//! Computes delivery dimensions when reframing footage to a different
//! aspect ratio, by cropping (trim the overshooting axis, lose pixels) or
//! padding (extend the short axis, keep every source pixel).
//!
//! # Quick Start
//!
//! ```rust
//! use editkit_aspect::{resize, AspectRatio, Dimensions, ResizeMethod};
//!
//! let source = Dimensions::new(1920, 1080);
//!
//! // Reframe widescreen to square for a social cut.
//! let cropped = resize(source, AspectRatio::SQUARE, ResizeMethod::Crop).unwrap();
//! assert_eq!(cropped, Dimensions::new(1080, 1080));
//!
//! let padded = resize(source, AspectRatio::SQUARE, ResizeMethod::Pad).unwrap();
//! assert_eq!(padded, Dimensions::new(1920, 1920));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;

pub use error::{AspectError, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel dimensions of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A target aspect ratio expressed as horizontal:vertical terms.
///
/// Terms are floating point so cinema ratios like 2.35:1 are expressible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    /// Horizontal term.
    pub horizontal: f64,
    /// Vertical term.
    pub vertical: f64,
}

impl AspectRatio {
    /// 16:9 widescreen.
    pub const WIDESCREEN: AspectRatio = AspectRatio::new(16.0, 9.0);
    /// 1:1 square.
    pub const SQUARE: AspectRatio = AspectRatio::new(1.0, 1.0);
    /// 9:16 vertical.
    pub const VERTICAL: AspectRatio = AspectRatio::new(9.0, 16.0);
    /// 4:3 standard.
    pub const STANDARD: AspectRatio = AspectRatio::new(4.0, 3.0);
    /// 2.35:1 cinemascope.
    pub const CINEMASCOPE: AspectRatio = AspectRatio::new(2.35, 1.0);
    /// 21:9 ultrawide.
    pub const ULTRAWIDE: AspectRatio = AspectRatio::new(21.0, 9.0);
    /// 3:2 photo.
    pub const PHOTO: AspectRatio = AspectRatio::new(3.0, 2.0);

    /// The preset ratios offered by the calculator.
    pub const PRESETS: [AspectRatio; 7] = [
        Self::WIDESCREEN,
        Self::SQUARE,
        Self::VERTICAL,
        Self::STANDARD,
        Self::CINEMASCOPE,
        Self::ULTRAWIDE,
        Self::PHOTO,
    ];

    /// Create a custom ratio.
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Horizontal divided by vertical.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.horizontal / self.vertical
    }
}

/// How to reach the target ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeMethod {
    /// Trim the overshooting axis; output never exceeds the source.
    Crop,
    /// Extend the short axis; every source pixel is kept.
    Pad,
}

/// A named delivery resolution preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPreset {
    /// Display name of the preset.
    pub name: &'static str,
    /// Frame dimensions.
    pub dimensions: Dimensions,
}

/// Common export resolutions offered alongside the ratio presets.
pub const DELIVERY_PRESETS: [DeliveryPreset; 6] = [
    DeliveryPreset {
        name: "4K UHD",
        dimensions: Dimensions::new(3840, 2160),
    },
    DeliveryPreset {
        name: "1080p",
        dimensions: Dimensions::new(1920, 1080),
    },
    DeliveryPreset {
        name: "720p",
        dimensions: Dimensions::new(1280, 720),
    },
    DeliveryPreset {
        name: "Instagram",
        dimensions: Dimensions::new(1080, 1080),
    },
    DeliveryPreset {
        name: "TikTok/Reels",
        dimensions: Dimensions::new(1080, 1920),
    },
    DeliveryPreset {
        name: "YouTube Shorts",
        dimensions: Dimensions::new(1080, 1920),
    },
];

/// Compute delivery dimensions for a target ratio.
///
/// Cropping keeps the axis that already fits and trims the other; padding
/// keeps both axes and extends the short one. The adjusted side is rounded
/// to the nearest pixel.
pub fn resize(
    source: Dimensions,
    target: AspectRatio,
    method: ResizeMethod,
) -> Result<Dimensions> {
    if source.width == 0 || source.height == 0 {
        return Err(AspectError::invalid_dimensions(source.width, source.height));
    }
    if target.horizontal <= 0.0 || target.vertical <= 0.0 {
        return Err(AspectError::invalid_ratio(
            target.horizontal,
            target.vertical,
        ));
    }

    let target_ratio = target.value();
    let wider_than_source = target_ratio > source.ratio();

    let result = match (method, wider_than_source) {
        // Target is wider: cropping trims height, padding extends width.
        (ResizeMethod::Crop, true) => Dimensions {
            width: source.width,
            height: (source.width as f64 / target_ratio).round() as u32,
        },
        (ResizeMethod::Pad, true) => Dimensions {
            width: (source.height as f64 * target_ratio).round() as u32,
            height: source.height,
        },
        // Target is narrower (or equal): the roles swap.
        (ResizeMethod::Crop, false) => Dimensions {
            width: (source.height as f64 * target_ratio).round() as u32,
            height: source.height,
        },
        (ResizeMethod::Pad, false) => Dimensions {
            width: source.width,
            height: (source.width as f64 / target_ratio).round() as u32,
        },
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HD: Dimensions = Dimensions::new(1920, 1080);

    #[test]
    fn test_matching_ratio_is_identity() {
        for method in [ResizeMethod::Crop, ResizeMethod::Pad] {
            let out = resize(HD, AspectRatio::WIDESCREEN, method).unwrap();
            assert_eq!(out, HD);
        }
    }

    #[test]
    fn test_crop_to_square() {
        let out = resize(HD, AspectRatio::SQUARE, ResizeMethod::Crop).unwrap();
        assert_eq!(out, Dimensions::new(1080, 1080));
    }

    #[test]
    fn test_pad_to_square() {
        let out = resize(HD, AspectRatio::SQUARE, ResizeMethod::Pad).unwrap();
        assert_eq!(out, Dimensions::new(1920, 1920));
    }

    #[test]
    fn test_crop_to_cinemascope() {
        // Wider target: width holds, height trims to 1920 / 2.35.
        let out = resize(HD, AspectRatio::CINEMASCOPE, ResizeMethod::Crop).unwrap();
        assert_eq!(out, Dimensions::new(1920, 817));
    }

    #[test]
    fn test_pad_to_cinemascope() {
        let out = resize(HD, AspectRatio::CINEMASCOPE, ResizeMethod::Pad).unwrap();
        assert_eq!(out, Dimensions::new(2538, 1080));
    }

    #[test]
    fn test_vertical_from_widescreen() {
        let out = resize(HD, AspectRatio::VERTICAL, ResizeMethod::Crop).unwrap();
        assert_eq!(out, Dimensions::new(608, 1080));
    }

    #[test]
    fn test_crop_never_exceeds_source() {
        for ratio in AspectRatio::PRESETS {
            let out = resize(HD, ratio, ResizeMethod::Crop).unwrap();
            assert!(out.width <= HD.width && out.height <= HD.height, "{ratio:?}");
        }
    }

    #[test]
    fn test_pad_never_loses_pixels() {
        for ratio in AspectRatio::PRESETS {
            let out = resize(HD, ratio, ResizeMethod::Pad).unwrap();
            assert!(out.width >= HD.width && out.height >= HD.height, "{ratio:?}");
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = resize(
            Dimensions::new(0, 1080),
            AspectRatio::SQUARE,
            ResizeMethod::Crop,
        )
        .unwrap_err();
        assert!(matches!(err, AspectError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_degenerate_ratio_rejected() {
        let err = resize(HD, AspectRatio::new(16.0, 0.0), ResizeMethod::Crop).unwrap_err();
        assert!(matches!(err, AspectError::InvalidRatio { .. }));
    }

    #[test]
    fn test_dimensions_display() {
        assert_eq!(HD.to_string(), "1920x1080");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&HD).unwrap();
        let decoded: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(HD, decoded);
    }
}
