//! Off-screen measurement surface for skill chips.
//!
//! The surface is owned by the caller: `create` it before a run, hand a reference
//! to the measurer, `dispose` it afterwards. Each measurement mounts a slice of
//! chips, lays them out, reads the height, and unmounts the slice when the
//! `MountedSlice` guard drops. The mutex serializes measurements, so a surface
//! shared between runs never exposes one run's chips to another.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::layout::font_metrics::get_metrics;
use crate::layout::geometry::ColumnContext;
use crate::layout::measure::MeasureError;
use crate::models::template::ChipTypography;

#[derive(Debug, Clone, Copy)]
struct ChipNode {
    width_px: f32,
}

#[derive(Debug, Default)]
struct SurfaceState {
    nodes: Vec<ChipNode>,
    column_width_px: f32,
}

pub struct MeasurementSurface {
    typography: ChipTypography,
    state: Mutex<SurfaceState>,
}

impl MeasurementSurface {
    pub fn create(typography: ChipTypography) -> Self {
        debug!(font = ?typography.font, size = typography.font_size_px, "Measurement surface created");
        Self {
            typography,
            state: Mutex::new(SurfaceState::default()),
        }
    }

    /// Mounts one chip per label into a column of the given width.
    ///
    /// Fails if the surface was poisoned by a panicking measurement or the column
    /// cannot hold even an empty chip.
    pub fn mount(
        &self,
        labels: &[String],
        column: &ColumnContext,
    ) -> Result<MountedSlice<'_>, MeasureError> {
        let min_chip = 2.0 * self.typography.padding_x_px;
        if !column.width_px.is_finite() || column.width_px <= min_chip {
            return Err(MeasureError::InvalidColumn {
                width_px: column.width_px,
            });
        }

        let mut state = self
            .state
            .lock()
            .map_err(|_| MeasureError::SurfacePoisoned)?;

        let metrics = get_metrics(self.typography.font);
        state.column_width_px = column.width_px;
        state.nodes.extend(labels.iter().map(|label| ChipNode {
            width_px: metrics.measure_px(label.trim(), self.typography.font_size_px) + min_chip,
        }));

        Ok(MountedSlice {
            state,
            typography: &self.typography,
        })
    }

    /// Number of chips currently mounted. Zero whenever no measurement is in flight.
    pub fn live_nodes(&self) -> usize {
        self.state.lock().map(|s| s.nodes.len()).unwrap_or(0)
    }

    pub fn dispose(self) {
        debug!("Measurement surface disposed");
    }
}

/// A slice of chips mounted on the surface. Unmounts on drop.
pub struct MountedSlice<'a> {
    state: MutexGuard<'a, SurfaceState>,
    typography: &'a ChipTypography,
}

impl MountedSlice<'_> {
    /// Flows the chips into rows and returns the realized section height.
    pub fn layout(&self) -> f32 {
        let t = self.typography;
        let width = self.state.column_width_px;

        let mut rows = 0usize;
        let mut x = 0.0_f32;
        for node in &self.state.nodes {
            // a chip wider than the column gets a row to itself and is clipped
            let w = node.width_px.min(width);
            if rows == 0 {
                rows = 1;
                x = w;
            } else if x + t.gap_px + w > width {
                rows += 1;
                x = w;
            } else {
                x += t.gap_px + w;
            }
        }

        if rows == 0 {
            return 0.0;
        }
        t.heading_height_px
            + rows as f32 * t.chip_height_px
            + (rows - 1) as f32 * t.row_gap_px
            + t.section_padding_px
    }

    pub fn chip_count(&self) -> usize {
        self.state.nodes.len()
    }
}

impl Drop for MountedSlice<'_> {
    fn drop(&mut self) {
        self.state.nodes.clear();
    }
}
