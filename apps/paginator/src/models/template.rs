//! Template layout metadata, as handed over by the template metadata extractor.
//!
//! The engine never parses template markup. It only needs the layout mode and the
//! few typographic constants that decide how skill chips wrap inside a column.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontFamily;

/// Column structure of a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    #[default]
    SingleColumn,
    TwoColumn,
}

/// Typography of the skill chips, mirrored from the template stylesheet.
///
/// All lengths are CSS pixels at 96 DPI, the same unit as `PageGeometry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipTypography {
    pub font: FontFamily,
    pub font_size_px: f32,
    /// Horizontal padding inside a chip, applied on both sides.
    pub padding_x_px: f32,
    pub chip_height_px: f32,
    /// Horizontal gap between chips on one row.
    pub gap_px: f32,
    /// Vertical gap between chip rows.
    pub row_gap_px: f32,
    /// Height of the "Skills" section heading.
    pub heading_height_px: f32,
    /// Space below the last chip row before the next section.
    pub section_padding_px: f32,
}

impl Default for ChipTypography {
    fn default() -> Self {
        Self {
            font: FontFamily::Inter,
            font_size_px: 12.0,
            padding_x_px: 10.0,
            chip_height_px: 26.0,
            gap_px: 6.0,
            row_gap_px: 6.0,
            heading_height_px: 32.0,
            section_padding_px: 12.0,
        }
    }
}

/// Pre-extracted template metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateDescriptor {
    pub id: String,
    pub layout: LayoutMode,
    /// Width of the sidebar column in two-column templates.
    pub sidebar_width_px: f32,
    /// Gutter between sidebar and main column.
    pub column_gap_px: f32,
    pub skill_chips: ChipTypography,
}

impl Default for TemplateDescriptor {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            layout: LayoutMode::SingleColumn,
            sidebar_width_px: 240.0,
            column_gap_px: 24.0,
            skill_chips: ChipTypography::default(),
        }
    }
}

/// Layout mode accessor used by the engine.
pub fn layout_mode(template: &TemplateDescriptor) -> LayoutMode {
    template.layout
}
