//! Fold configuration read from `data-*` attributes.
//!
//! Parsing never fails as a whole: each invalid attribute yields a
//! `ConfigError` next to the configuration built from defaults, so the page
//! keeps working with a warning in the console.

use std::time::Duration;

use thiserror::Error;

use super::constants::{DEFAULT_PARALLAX_SPEED, HERO_FADE_DISTANCE_PX, LINE_REVEAL_INTERVAL_MS};
use super::observe::{RootMargin, VisibilityOptions};
use super::pointer::ClampPolicy;
use super::scroll::ProgressFormula;
use super::visuals::VisualKind;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("threshold `{0}` is not a number in [0, 1]")]
    Threshold(String),
    #[error("root margin `{0}` is not a list of 1 to 4 px/% lengths")]
    RootMargin(String),
    #[error("`{0}` is not a boolean flag")]
    Flag(String),
    #[error("`{0}` is not a finite number")]
    Number(String),
    #[error("unknown progress formula `{0}` (expected `full` or `linear`)")]
    Formula(String),
    #[error("unknown pointer policy `{0}` (expected `pass` or `clamp`)")]
    Pointer(String),
    #[error("unknown visual `{0}` (expected `chaotic` or `coherent`)")]
    Visual(String),
}

pub fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(t) if (0.0..=1.0).contains(&t) => Ok(t),
        _ => Err(ConfigError::Threshold(raw.to_string())),
    }
}

/// HTML boolean attribute semantics: present and empty means true.
pub fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Flag(raw.to_string())),
    }
}

pub fn parse_number(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::Number(raw.to_string())),
    }
}

pub fn parse_formula(raw: &str) -> Result<ProgressFormula, ConfigError> {
    match raw.trim() {
        "" | "full" => Ok(ProgressFormula::FullTraverse),
        "linear" => Ok(ProgressFormula::Linear),
        _ => Err(ConfigError::Formula(raw.to_string())),
    }
}

pub fn parse_clamp_policy(raw: &str) -> Result<ClampPolicy, ConfigError> {
    match raw.trim() {
        "" | "pass" => Ok(ClampPolicy::PassThrough),
        "clamp" => Ok(ClampPolicy::Clamp),
        _ => Err(ConfigError::Pointer(raw.to_string())),
    }
}

pub fn parse_visual(raw: &str) -> Result<VisualKind, ConfigError> {
    match raw.trim() {
        "chaotic" => Ok(VisualKind::Chaotic),
        "coherent" => Ok(VisualKind::Coherent),
        _ => Err(ConfigError::Visual(raw.to_string())),
    }
}

/// Parse an optional attribute, falling back to `default` and recording the
/// error when the value is invalid.
fn attr_or<T>(
    raw: Option<String>,
    default: T,
    parse: impl Fn(&str) -> Result<T, ConfigError>,
    errors: &mut Vec<ConfigError>,
) -> T {
    match raw {
        None => default,
        Some(raw) => parse(&raw).unwrap_or_else(|e| {
            errors.push(e);
            default
        }),
    }
}

/// Behaviour attached to one fold (section) of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct FoldConfig {
    pub visibility: VisibilityOptions,
    pub progress: Option<ProgressFormula>,
    pub pointer: Option<ClampPolicy>,
    /// Page-scroll distance over which the fold fades out.
    pub fade_distance: Option<f64>,
    pub line_interval: Duration,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            visibility: VisibilityOptions::default(),
            progress: None,
            pointer: None,
            fade_distance: None,
            line_interval: Duration::from_millis(LINE_REVEAL_INTERVAL_MS),
        }
    }
}

impl FoldConfig {
    /// Build from an attribute lookup (`name` without the `data-` prefix).
    pub fn parse(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let defaults = VisibilityOptions::default();

        let threshold = attr_or(
            lookup("threshold"),
            defaults.threshold,
            parse_threshold,
            &mut errors,
        );
        let root_margin = attr_or(
            lookup("root-margin"),
            defaults.root_margin,
            RootMargin::parse,
            &mut errors,
        );
        let once = attr_or(lookup("once"), defaults.once, parse_flag, &mut errors);

        let progress = lookup("progress").map(|raw| {
            parse_formula(&raw).unwrap_or_else(|e| {
                errors.push(e);
                ProgressFormula::FullTraverse
            })
        });
        let pointer = lookup("pointer").map(|raw| {
            parse_clamp_policy(&raw).unwrap_or_else(|e| {
                errors.push(e);
                ClampPolicy::PassThrough
            })
        });
        let fade_distance = lookup("fade-distance").map(|raw| {
            match parse_number(&raw) {
                Ok(d) if d > 0.0 => d,
                Ok(_) => {
                    errors.push(ConfigError::Number(raw));
                    HERO_FADE_DISTANCE_PX
                }
                Err(e) => {
                    errors.push(e);
                    HERO_FADE_DISTANCE_PX
                }
            }
        });
        let interval_ms = attr_or(
            lookup("line-interval"),
            LINE_REVEAL_INTERVAL_MS as f64,
            parse_number,
            &mut errors,
        );

        let config = Self {
            visibility: VisibilityOptions::new(threshold, root_margin, once),
            progress,
            pointer,
            fade_distance,
            line_interval: Duration::from_millis(interval_ms.max(0.0) as u64),
        };
        (config, errors)
    }
}

/// Parallax speed of a layer; an empty attribute means the default speed.
pub fn parse_parallax_speed(raw: &str) -> Result<f64, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(DEFAULT_PARALLAX_SPEED);
    }
    parse_number(raw)
}
