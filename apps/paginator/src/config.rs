use std::fmt::{Debug, Display};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::layout::geometry::{
    PageGeometry, A4_CONTENT_HEIGHT_PX, A4_CONTENT_WIDTH_PX, DEFAULT_SAFETY_MARGIN_PX,
};
use crate::layout::SkillMeasurerKind;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a value that does not parse aborts startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub page_content_height_px: f32,
    pub page_content_width_px: f32,
    pub page_safety_margin_px: f32,
    pub skill_measurer: SkillMeasurerKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_or(optional_env("PORT"), "PORT", 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            page_content_height_px: parse_or(
                optional_env("PAGE_CONTENT_HEIGHT_PX"),
                "PAGE_CONTENT_HEIGHT_PX",
                A4_CONTENT_HEIGHT_PX,
            )?,
            page_content_width_px: parse_or(
                optional_env("PAGE_CONTENT_WIDTH_PX"),
                "PAGE_CONTENT_WIDTH_PX",
                A4_CONTENT_WIDTH_PX,
            )?,
            page_safety_margin_px: parse_or(
                optional_env("PAGE_SAFETY_MARGIN_PX"),
                "PAGE_SAFETY_MARGIN_PX",
                DEFAULT_SAFETY_MARGIN_PX,
            )?,
            skill_measurer: parse_or(
                optional_env("SKILL_MEASURER"),
                "SKILL_MEASURER",
                SkillMeasurerKind::ChipFlow,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn page_geometry(&self) -> PageGeometry {
        PageGeometry {
            content_width_px: self.page_content_width_px,
            content_height_px: self.page_content_height_px,
            safety_margin_px: self.page_safety_margin_px,
        }
    }

    fn validate(&self) -> Result<()> {
        let lengths = [
            ("PAGE_CONTENT_HEIGHT_PX", self.page_content_height_px),
            ("PAGE_CONTENT_WIDTH_PX", self.page_content_width_px),
        ];
        for (key, value) in lengths {
            anyhow::ensure!(
                value.is_finite() && value > 0.0,
                "{key} must be a positive number of pixels, got {value}"
            );
        }
        anyhow::ensure!(
            self.page_safety_margin_px.is_finite()
                && (0.0..self.page_content_height_px).contains(&self.page_safety_margin_px),
            "PAGE_SAFETY_MARGIN_PX must be between 0 and the page height, got {}",
            self.page_safety_margin_px
        );
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            page_content_height_px: A4_CONTENT_HEIGHT_PX,
            page_content_width_px: A4_CONTENT_WIDTH_PX,
            page_safety_margin_px: DEFAULT_SAFETY_MARGIN_PX,
            skill_measurer: SkillMeasurerKind::ChipFlow,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses `raw` if present, otherwise returns `default`.
fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Debug + Display + Send + Sync + 'static,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
    }
}
