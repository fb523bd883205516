//! Per-call graphics parameters

use serde::{Deserialize, Serialize};

/// Graphics parameters for one rendering call.
///
/// Travels with the [`Figure`](crate::Figure) it configures; nothing is
/// kept between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    /// Panel grid as (rows, columns); chosen from the panel count when unset
    pub grid: Option<(usize, usize)>,
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Marker radius in pixels
    pub point_size: u32,
    /// Caption font size
    pub caption_size: f64,
    /// Margin around each panel
    pub margin: u32,
    /// Space reserved for axis labels
    pub label_area: u32,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            grid: None,
            width: 900,
            height: 600,
            point_size: 2,
            caption_size: 16.0,
            margin: 10,
            label_area: 40,
        }
    }
}

impl PlotParams {
    /// Grid used for `panels` panels
    pub fn grid_for(&self, panels: usize) -> (usize, usize) {
        if let Some((rows, cols)) = self.grid {
            if rows * cols < panels {
                log::warn!(
                    "grid {}x{} holds fewer than {} panels; extra panels are dropped",
                    rows,
                    cols,
                    panels
                );
            }
            return (rows.max(1), cols.max(1));
        }

        let panels = panels.max(1);
        let cols = (panels as f64).sqrt().ceil() as usize;
        let rows = panels.div_ceil(cols);
        (rows, cols)
    }
}

#[cfg(test)]
mod tests;
