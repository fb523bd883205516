//! # lo-viz
//!
//! Backend-independent figure descriptions and the surfaces that draw them.
//!
//! A [`Figure`] is plain data: panels made of points, reference lines,
//! polylines and filled polygons, plus the [`PlotParams`] it should be
//! drawn with. Surfaces implement [`Surface`]; [`SvgSurface`] renders
//! through plotters and [`RecordingSurface`] keeps figures in memory.

pub mod color;
pub mod figure;
pub mod params;
pub mod surface;
pub mod svg;

use thiserror::Error;

pub use color::Color;
pub use figure::{Figure, Layer, Panel};
pub use params::PlotParams;
pub use surface::{RecordingSurface, Surface};
pub use svg::{SvgSurface, render_svg};

#[derive(Debug, Error)]
pub enum VizError {
    #[error("drawing backend error: {0}")]
    Backend(String),
    #[error("invalid color: {0}")]
    Color(String),
    #[error("nothing has been rendered yet")]
    Empty,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
