//! Tests for SVG rendering

use super::*;

fn scatter_figure() -> Figure {
    let mut figure = Figure::new(PlotParams::default());
    figure.push(
        Panel::new("Residuals vs row", "row index", "Dunn-Smyth residuals")
            .x_range(1.0, 3.0)
            .y_range(-2.0, 2.0)
            .layer(Layer::Polygon {
                points: vec![(1.0, -1.0), (3.0, -1.0), (3.0, 1.0), (1.0, 1.0)],
                fill: Color::LIGHT_BLUE,
            })
            .layer(Layer::HLine {
                y: 0.0,
                color: Color::GREY,
                dashed: true,
            })
            .layer(Layer::Points {
                points: vec![(1.0, 0.5), (2.0, -1.5), (3.0, 1.0)],
                colors: vec![Color::BLACK; 3],
            }),
    );
    figure
}

#[test]
#[ignore = "text layout needs a system sans-serif font"]
fn test_renders_svg_document() {
    let mut surface = SvgSurface::new();
    surface.render(&scatter_figure()).unwrap();

    let svg = surface.svg().unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Residuals vs row"));
}

#[test]
fn test_degenerate_ranges_are_padded() {
    assert_eq!(padded((2.0, 2.0)), (1.5, 2.5));
    assert_eq!(padded((f64::NAN, 1.0)), (-1.0, 1.0));
    assert_eq!(padded((0.0, 1.0)), (0.0, 1.0));
}

#[test]
fn test_saving_before_rendering_fails() {
    let surface = SvgSurface::new();
    let err = surface.save(Path::new("unused.svg")).unwrap_err();
    assert!(matches!(err, VizError::Empty));
}
