use crate::dial::{CairoCanvas, Dial, DialResources, SizeConstraint, draw, measure};
use cairo::{Context, Format, ImageSurface};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Renders a dial headlessly and writes it to `output` as PNG.
///
/// Without a `size` the dial gets the same default side it asks for on screen.
pub fn render_png(
    resources: DialResources,
    bearing: f32,
    size: Option<u32>,
    output: &Path,
) -> Result<u32, ExportError> {
    let constraint = size.map_or(SizeConstraint::Unspecified, SizeConstraint::Exact);
    let side = measure(constraint, constraint);
    let side_px = i32::try_from(side).map_err(|_| cairo::Error::InvalidSize)?;

    let surface = ImageSurface::create(Format::ARgb32, side_px, side_px)?;
    let cr = Context::new(&surface)?;
    let mut canvas = CairoCanvas::new(&cr);

    let mut dial = Dial::new(resources, &canvas);
    dial.set_bearing(bearing);
    draw(&mut canvas, &dial, side_px, side_px)?;

    drop(canvas);
    drop(cr);
    surface.flush();

    let mut file = fs_err::File::create(output)?;
    surface.write_to_png(&mut file)?;

    log::info!(
        "Rendered {}x{} dial at bearing {} to {}",
        side,
        side,
        bearing,
        output.display()
    );
    Ok(side)
}
