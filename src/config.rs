//! Config source parsing and color resolution.
//!
//! The config file is a line-oriented `KEY: value` text. It is optional: a
//! missing or unreadable file logs a warning and leaves the built-in defaults
//! in place. This path never aborts the process.

use std::{collections::HashMap, fs, path::Path};

use log::warn;
use once_cell::sync::Lazy;

pub const DEFAULT_INSTITUTION: &str = "BIGCARD";
pub const DEFAULT_COLOR: &str = "#0066cc";
pub const DEFAULT_RGB: Rgb = Rgb(0, 102, 204);

/// One integer per channel.
///
/// Channels are carried exactly as written in the source: a config that says
/// `300,0,0` yields `Rgb(300, 0, 0)`. Range-checking is deliberately not done
/// here; consumers that need 0..=255 clamp on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub i32, pub i32, pub i32);

static NAMED_COLORS: Lazy<HashMap<&'static str, Rgb>> = Lazy::new(|| {
    HashMap::from([
        ("blue", Rgb(0, 102, 204)),
        ("red", Rgb(220, 53, 69)),
        ("green", Rgb(40, 167, 69)),
        ("yellow", Rgb(255, 193, 7)),
        ("orange", Rgb(253, 126, 20)),
        ("purple", Rgb(111, 66, 193)),
        ("pink", Rgb(232, 62, 140)),
        ("black", Rgb(0, 0, 0)),
        ("gray", Rgb(108, 117, 125)),
        ("grey", Rgb(108, 117, 125)),
    ])
});

/// Resolved presentation settings, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub institution: String,
    /// The color exactly as written in the source (for CSS-side use).
    pub color: String,
    /// The same color resolved to channels (for PDF-side use).
    pub color_rgb: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            institution: DEFAULT_INSTITUTION.to_string(),
            color: DEFAULT_COLOR.to_string(),
            color_rgb: DEFAULT_RGB,
        }
    }
}

impl Config {
    /// Loads the config file, falling back to defaults if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(source) => Self::from_source(&source),
            Err(e) => {
                warn!(
                    "config file {} unavailable ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Parses config text. Unknown keys and lines without `:` are ignored.
    pub fn from_source(source: &str) -> Self {
        let mut config = Self::default();
        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim().to_uppercase().as_str() {
                "INSTITUICAO" => config.institution = value.to_string(),
                "COR" => {
                    config.color = value.to_string();
                    config.color_rgb = resolve_color(value);
                }
                _ => {}
            }
        }
        config
    }
}

/// Resolves a color notation to channels. First match wins:
/// explicit `r,g,b` (with optional `rgb(...)` wrapper), then `#rrggbb`, then
/// a named color, then the default blue.
pub fn resolve_color(value: &str) -> Rgb {
    let value = value.trim();

    if value.contains(',') {
        if let Some(rgb) = parse_channel_list(value) {
            return rgb;
        }
    }

    if let Some(hex) = value.strip_prefix('#') {
        if let Some(rgb) = parse_hex(hex) {
            return rgb;
        }
    }

    if let Some(rgb) = NAMED_COLORS.get(value.to_lowercase().as_str()) {
        return *rgb;
    }

    DEFAULT_RGB
}

fn parse_channel_list(value: &str) -> Option<Rgb> {
    let inner = value.strip_prefix("rgb(").unwrap_or(value);
    let inner = inner.strip_suffix(')').unwrap_or(inner).trim();
    let channels: Vec<i32> = inner
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;
    if channels.len() != 3 {
        return None;
    }
    Some(Rgb(channels[0], channels[1], channels[2]))
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range| i32::from_str_radix(&hex[range], 16).ok();
    Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
