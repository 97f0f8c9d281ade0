//! Storage Estimation for the Video Editor's Toolkit
//!
//! Answers the two capture-planning questions: how much disk a recording
//! needs, and how long a given drive can record. Both come from a fixed
//! table of typical acquisition/delivery bitrates per codec and resolution.
//!
//! # Quick Start
//!
//! ```rust
//! use editkit_storage::{recordable_minutes, storage_gb, Codec, Resolution};
//!
//! // Ten minutes of ProRes 422 HQ in UHD.
//! let gb = storage_gb(Codec::ProRes422Hq, Resolution::Uhd2160, 10.0);
//! assert!((gb - 64.45).abs() < 0.01);
//!
//! // How much H.265 fits on a 1 TB drive?
//! let minutes = recordable_minutes(Codec::H265High, Resolution::Uhd2160, 1024.0);
//! assert!((minutes - 5592.4).abs() < 0.1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Result, StorageError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Codecs covered by the bitrate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Codec {
    /// Apple ProRes 422 HQ
    ProRes422Hq,
    /// Apple ProRes 422
    ProRes422,
    /// Apple ProRes 422 LT
    ProRes422Lt,
    /// Apple ProRes 422 Proxy
    ProRes422Proxy,
    /// H.264, high quality delivery
    H264High,
    /// H.264, medium quality delivery
    H264Medium,
    /// H.265/HEVC, high quality delivery
    H265High,
    /// H.265/HEVC, medium quality delivery
    H265Medium,
    /// Blackmagic RAW 3:1
    Braw3To1,
    /// Blackmagic RAW 5:1
    Braw5To1,
    /// Blackmagic RAW 8:1
    Braw8To1,
    /// Blackmagic RAW 12:1
    Braw12To1,
}

/// Frame sizes covered by the bitrate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// 1920x1080 (HD)
    Hd1080,
    /// 3840x2160 (4K UHD)
    Uhd2160,
    /// 4096x2160 (4K DCI)
    Dci2160,
    /// 5120x2880 (5K)
    FiveK,
    /// 7680x4320 (8K)
    EightK,
}

/// Drive capacities offered by the duration calculator, in gigabytes.
pub const DRIVE_SIZES_GB: [u32; 9] = [128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768];

impl Codec {
    /// All codecs in the bitrate table.
    pub const ALL: [Codec; 12] = [
        Self::ProRes422Hq,
        Self::ProRes422,
        Self::ProRes422Lt,
        Self::ProRes422Proxy,
        Self::H264High,
        Self::H264Medium,
        Self::H265High,
        Self::H265Medium,
        Self::Braw3To1,
        Self::Braw5To1,
        Self::Braw8To1,
        Self::Braw12To1,
    ];

    /// Display name of the codec.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ProRes422Hq => "ProRes 422 HQ",
            Self::ProRes422 => "ProRes 422",
            Self::ProRes422Lt => "ProRes 422 LT",
            Self::ProRes422Proxy => "ProRes 422 Proxy",
            Self::H264High => "H.264 (High Quality)",
            Self::H264Medium => "H.264 (Medium Quality)",
            Self::H265High => "H.265/HEVC (High Quality)",
            Self::H265Medium => "H.265/HEVC (Medium Quality)",
            Self::Braw3To1 => "BRAW 3:1",
            Self::Braw5To1 => "BRAW 5:1",
            Self::Braw8To1 => "BRAW 8:1",
            Self::Braw12To1 => "BRAW 12:1",
        }
    }

    /// Typical bitrate in Mbps at the given resolution.
    #[must_use]
    pub fn bitrate_mbps(&self, resolution: Resolution) -> u32 {
        use Resolution::*;
        match self {
            Self::ProRes422Hq => match resolution {
                Hd1080 => 220,
                Uhd2160 => 880,
                Dci2160 => 940,
                FiveK => 1500,
                EightK => 3500,
            },
            Self::ProRes422 => match resolution {
                Hd1080 => 147,
                Uhd2160 => 588,
                Dci2160 => 627,
                FiveK => 1000,
                EightK => 2350,
            },
            Self::ProRes422Lt => match resolution {
                Hd1080 => 102,
                Uhd2160 => 408,
                Dci2160 => 435,
                FiveK => 700,
                EightK => 1600,
            },
            Self::ProRes422Proxy => match resolution {
                Hd1080 => 45,
                Uhd2160 => 180,
                Dci2160 => 192,
                FiveK => 310,
                EightK => 720,
            },
            Self::H264High => match resolution {
                Hd1080 => 20,
                Uhd2160 => 45,
                Dci2160 => 50,
                FiveK => 80,
                EightK => 150,
            },
            Self::H264Medium => match resolution {
                Hd1080 => 10,
                Uhd2160 => 25,
                Dci2160 => 30,
                FiveK => 45,
                EightK => 80,
            },
            Self::H265High => match resolution {
                Hd1080 => 10,
                Uhd2160 => 25,
                Dci2160 => 30,
                FiveK => 45,
                EightK => 80,
            },
            Self::H265Medium => match resolution {
                Hd1080 => 5,
                Uhd2160 => 15,
                Dci2160 => 18,
                FiveK => 30,
                EightK => 50,
            },
            Self::Braw3To1 => match resolution {
                Hd1080 => 26,
                Uhd2160 => 104,
                Dci2160 => 111,
                FiveK => 178,
                EightK => 416,
            },
            Self::Braw5To1 => match resolution {
                Hd1080 => 16,
                Uhd2160 => 64,
                Dci2160 => 68,
                FiveK => 109,
                EightK => 256,
            },
            Self::Braw8To1 => match resolution {
                Hd1080 => 10,
                Uhd2160 => 40,
                Dci2160 => 43,
                FiveK => 68,
                EightK => 160,
            },
            Self::Braw12To1 => match resolution {
                Hd1080 => 7,
                Uhd2160 => 27,
                Dci2160 => 29,
                FiveK => 46,
                EightK => 108,
            },
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codec {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "prores-422-hq" => Ok(Self::ProRes422Hq),
            "prores-422" => Ok(Self::ProRes422),
            "prores-422-lt" => Ok(Self::ProRes422Lt),
            "prores-422-proxy" => Ok(Self::ProRes422Proxy),
            "h264-high" => Ok(Self::H264High),
            "h264-medium" => Ok(Self::H264Medium),
            "h265-high" => Ok(Self::H265High),
            "h265-medium" => Ok(Self::H265Medium),
            "braw-3-1" => Ok(Self::Braw3To1),
            "braw-5-1" => Ok(Self::Braw5To1),
            "braw-8-1" => Ok(Self::Braw8To1),
            "braw-12-1" => Ok(Self::Braw12To1),
            other => Err(StorageError::unknown_codec(other)),
        }
    }
}

impl Resolution {
    /// All resolutions in the bitrate table.
    pub const ALL: [Resolution; 5] = [
        Self::Hd1080,
        Self::Uhd2160,
        Self::Dci2160,
        Self::FiveK,
        Self::EightK,
    ];

    /// Display name of the resolution.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hd1080 => "HD (1920x1080)",
            Self::Uhd2160 => "4K UHD (3840x2160)",
            Self::Dci2160 => "4K DCI (4096x2160)",
            Self::FiveK => "5K (5120x2880)",
            Self::EightK => "8K (7680x4320)",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resolution {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1920x1080" => Ok(Self::Hd1080),
            "3840x2160" => Ok(Self::Uhd2160),
            "4096x2160" => Ok(Self::Dci2160),
            "5120x2880" => Ok(Self::FiveK),
            "7680x4320" => Ok(Self::EightK),
            other => Err(StorageError::unknown_resolution(other)),
        }
    }
}

/// Storage needed for a recording, in gigabytes.
///
/// Bitrate over eight gives megabytes per second; 1024 MB to the gigabyte.
#[must_use]
pub fn storage_gb(codec: Codec, resolution: Resolution, minutes: f64) -> f64 {
    let bitrate = codec.bitrate_mbps(resolution) as f64;
    (bitrate / 8.0) * (minutes * 60.0) / 1024.0
}

/// Minutes of recording that fit in the given storage.
#[must_use]
pub fn recordable_minutes(codec: Codec, resolution: Resolution, gb: f64) -> f64 {
    let bitrate = codec.bitrate_mbps(resolution) as f64;
    (gb * 1024.0 * 8.0) / bitrate / 60.0
}

/// Format a duration in minutes as "Hh Mm".
#[must_use]
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as u64;
    format!("{}h {}m", total / 60, total % 60)
}
