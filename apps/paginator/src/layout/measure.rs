//! Rendering-based skill measurement.
//!
//! `TextBlockMeasurer` is the seam between the packers and whatever knows how
//! tall a block of skill chips really is. Two implementations:
//! - `ChipFlowMeasurer` lays chips out on a `MeasurementSurface` with the
//!   template's font metrics and chip typography.
//! - `FixedRowMeasurer` uses fixed per-character and per-row formulas, so the
//!   packers can be exercised with exact, hand-computable heights.

use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::geometry::ColumnContext;
use crate::layout::surface::MeasurementSurface;

#[derive(Debug, Error, PartialEq)]
pub enum MeasureError {
    #[error("measurement surface is poisoned by an earlier failed layout pass")]
    SurfacePoisoned,

    #[error("column width {width_px}px cannot hold a skill chip")]
    InvalidColumn { width_px: f32 },
}

/// Measures the rendered height of a block of skill labels in a column.
#[async_trait]
pub trait TextBlockMeasurer: Send + Sync {
    async fn measure(&self, labels: &[String], column: &ColumnContext)
        -> Result<f32, MeasureError>;
}

// ────────────────────────────────────────────────────────────────────────────
// ChipFlowMeasurer
// ────────────────────────────────────────────────────────────────────────────

/// Production measurer backed by a caller-owned surface.
pub struct ChipFlowMeasurer<'s> {
    surface: &'s MeasurementSurface,
}

impl<'s> ChipFlowMeasurer<'s> {
    pub fn new(surface: &'s MeasurementSurface) -> Self {
        Self { surface }
    }
}

#[async_trait]
impl TextBlockMeasurer for ChipFlowMeasurer<'_> {
    async fn measure(
        &self,
        labels: &[String],
        column: &ColumnContext,
    ) -> Result<f32, MeasureError> {
        if labels.is_empty() {
            return Ok(0.0);
        }
        let slice = self.surface.mount(labels, column)?;
        let height = slice.layout();
        drop(slice);
        Ok(height)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FixedRowMeasurer
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic measurer: chip width = chars × `char_width_px` + `chip_padding_px`,
/// chips flow into rows separated by `gap_px`, height = `overhead_px` + rows × `row_height_px`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRowMeasurer {
    pub char_width_px: f32,
    pub chip_padding_px: f32,
    pub gap_px: f32,
    pub row_height_px: f32,
    pub overhead_px: f32,
}

impl Default for FixedRowMeasurer {
    fn default() -> Self {
        Self {
            char_width_px: 7.0,
            chip_padding_px: 20.0,
            gap_px: 6.0,
            row_height_px: 35.0,
            overhead_px: 50.0,
        }
    }
}

impl FixedRowMeasurer {
    pub fn rows(&self, labels: &[String], width_px: f32) -> usize {
        let mut rows = 0usize;
        let mut x = 0.0_f32;
        for label in labels {
            let w = (label.chars().count() as f32 * self.char_width_px + self.chip_padding_px)
                .min(width_px);
            if rows == 0 {
                rows = 1;
                x = w;
            } else if x + self.gap_px + w > width_px {
                rows += 1;
                x = w;
            } else {
                x += self.gap_px + w;
            }
        }
        rows
    }
}

#[async_trait]
impl TextBlockMeasurer for FixedRowMeasurer {
    async fn measure(
        &self,
        labels: &[String],
        column: &ColumnContext,
    ) -> Result<f32, MeasureError> {
        if column.width_px <= 0.0 || !column.width_px.is_finite() {
            return Err(MeasureError::InvalidColumn {
                width_px: column.width_px,
            });
        }
        if labels.is_empty() {
            return Ok(0.0);
        }
        let rows = self.rows(labels, column.width_px);
        Ok(self.overhead_px + rows as f32 * self.row_height_px)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurer selection
// ────────────────────────────────────────────────────────────────────────────

/// Which skill measurer the service uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillMeasurerKind {
    #[default]
    ChipFlow,
    FixedRow,
}

#[derive(Debug, Error)]
#[error("unknown skill measurer '{0}' (expected 'chip-flow' or 'fixed-row')")]
pub struct UnknownMeasurer(String);

impl FromStr for SkillMeasurerKind {
    type Err = UnknownMeasurer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chip-flow" => Ok(SkillMeasurerKind::ChipFlow),
            "fixed-row" => Ok(SkillMeasurerKind::FixedRow),
            other => Err(UnknownMeasurer(other.to_string())),
        }
    }
}
