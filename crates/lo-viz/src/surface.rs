//! Drawing targets for figures

use crate::Result;
use crate::figure::Figure;

/// Anything a figure can be drawn on
pub trait Surface {
    fn render(&mut self, figure: &Figure) -> Result<()>;
}

/// Keeps every rendered figure in memory
#[derive(Debug, Default)]
pub struct RecordingSurface {
    figures: Vec<Figure>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Most recently rendered figure
    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl Surface for RecordingSurface {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        self.figures.push(figure.clone());
        Ok(())
    }
}
