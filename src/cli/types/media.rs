//! Enumerated column values: subscription tiers, stream quality and devices.
//!
//! Each enum renders to the exact text stored in the database, and the
//! schema carries matching `CHECK` constraints.

use crate::error::{Result, StreamError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Viewer subscription tier.
///
/// # Examples
///
/// ```rust
/// use streamdb::Subscription;
///
/// let tier: Subscription = "Monthly".parse().unwrap();
/// assert_eq!(tier, Subscription::Monthly);
/// assert_eq!(tier.to_string(), "monthly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    Free,
    Monthly,
    Yearly,
}

impl Subscription {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subscription::Free => "free",
            Subscription::Monthly => "monthly",
            Subscription::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subscription {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Subscription::Free),
            "monthly" => Ok(Subscription::Monthly),
            "yearly" => Ok(Subscription::Yearly),
            _ => Err(StreamError::InvalidSubscription {
                value: s.to_string(),
            }),
        }
    }
}

/// Stream resolution of a viewing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "480p")]
    Sd480,
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    Hd1080,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Sd480 => "480p",
            Quality::Hd720 => "720p",
            Quality::Hd1080 => "1080p",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "480p" => Ok(Quality::Sd480),
            "720p" => Ok(Quality::Hd720),
            "1080p" => Ok(Quality::Hd1080),
            _ => Err(StreamError::InvalidQuality {
                value: s.to_string(),
            }),
        }
    }
}

/// Device a session was watched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Mobile,
    Desktop,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mobile" => Ok(Device::Mobile),
            "desktop" => Ok(Device::Desktop),
            _ => Err(StreamError::InvalidDevice {
                value: s.to_string(),
            }),
        }
    }
}
