use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityLevel {
    None,
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::None,
        ActivityLevel::Low,
        ActivityLevel::Medium,
        ActivityLevel::High,
    ];

    pub fn from_count(count: u64) -> Self {
        match count {
            0 => ActivityLevel::None,
            1..=4 => ActivityLevel::Low,
            5..=9 => ActivityLevel::Medium,
            _ => ActivityLevel::High,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub none: String,
    pub low: String,
    pub medium: String,
    pub high: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            none: "#e1e4e8".to_string(),   // light gray
            low: "#f4c20d".to_string(),    // light orange
            medium: "#f39c12".to_string(), // orange
            high: "#e67e22".to_string(),   // dark orange
        }
    }
}

impl Palette {
    pub fn color(&self, level: ActivityLevel) -> &str {
        match level {
            ActivityLevel::None => &self.none,
            ActivityLevel::Low => &self.low,
            ActivityLevel::Medium => &self.medium,
            ActivityLevel::High => &self.high,
        }
    }

    pub fn color_for(&self, count: u64) -> &str {
        self.color(ActivityLevel::from_count(count))
    }

    pub fn validate(&self) -> Result<()> {
        for level in ActivityLevel::ALL {
            let color = self.color(level);
            if parse_hex(color).is_none() {
                return Err(CalendarError::InvalidColor(color.to_string()));
            }
        }
        Ok(())
    }
}

/// `#rrggbb` -> (r, g, b)
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
