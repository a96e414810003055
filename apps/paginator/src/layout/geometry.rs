//! Page geometry and column contexts.
//!
//! A4 at 96 DPI is 794 × 1123 px. With 20 px margins on every side the printable
//! content area is 754 × 1083 px. A small safety margin is kept off the bottom so
//! rounding in the real renderer never pushes the last block onto a blank page.

use serde::{Deserialize, Serialize};

use crate::models::template::TemplateDescriptor;

pub const A4_CONTENT_WIDTH_PX: f32 = 754.0;
pub const A4_CONTENT_HEIGHT_PX: f32 = 1083.0;
pub const DEFAULT_SAFETY_MARGIN_PX: f32 = 5.0;

/// Fixed printable area shared by every page of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub content_width_px: f32,
    pub content_height_px: f32,
    pub safety_margin_px: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    pub fn a4() -> Self {
        Self {
            content_width_px: A4_CONTENT_WIDTH_PX,
            content_height_px: A4_CONTENT_HEIGHT_PX,
            safety_margin_px: DEFAULT_SAFETY_MARGIN_PX,
        }
    }

    /// A4 width with an exact height budget and no safety margin.
    pub fn with_budget(budget_px: f32) -> Self {
        Self {
            content_width_px: A4_CONTENT_WIDTH_PX,
            content_height_px: budget_px,
            safety_margin_px: 0.0,
        }
    }

    /// Maximum content height of one page, or of one column in two-column mode.
    pub fn budget(&self) -> f32 {
        (self.content_height_px - self.safety_margin_px).max(0.0)
    }

    pub fn full_width(&self) -> ColumnContext {
        ColumnContext {
            column: Column::Full,
            width_px: self.content_width_px,
        }
    }

    pub fn sidebar(&self, template: &TemplateDescriptor) -> ColumnContext {
        ColumnContext {
            column: Column::Sidebar,
            width_px: template.sidebar_width_px.min(self.content_width_px),
        }
    }

    pub fn main(&self, template: &TemplateDescriptor) -> ColumnContext {
        let used = template.sidebar_width_px + template.column_gap_px;
        ColumnContext {
            column: Column::Main,
            width_px: (self.content_width_px - used).max(0.0),
        }
    }
}

/// Which column a section is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Full,
    Sidebar,
    Main,
}

/// Width context a section is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnContext {
    pub column: Column,
    pub width_px: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_budget_subtracts_safety_margin() {
        assert_eq!(PageGeometry::a4().budget(), 1078.0);
    }

    #[test]
    fn test_with_budget_is_exact() {
        assert_eq!(PageGeometry::with_budget(1083.0).budget(), 1083.0);
    }

    #[test]
    fn test_negative_budget_clamps_to_zero() {
        let geometry = PageGeometry {
            content_width_px: 754.0,
            content_height_px: 3.0,
            safety_margin_px: 5.0,
        };
        assert_eq!(geometry.budget(), 0.0);
    }

    #[test]
    fn test_two_column_widths_partition_content_width() {
        let geometry = PageGeometry::a4();
        let template = TemplateDescriptor::default();
        let sidebar = geometry.sidebar(&template);
        let main = geometry.main(&template);
        assert_eq!(sidebar.column, Column::Sidebar);
        assert_eq!(main.column, Column::Main);
        assert!(
            (sidebar.width_px + template.column_gap_px + main.width_px - 754.0).abs() < 1e-3
        );
    }
}
