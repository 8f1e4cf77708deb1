//! Rendering the board off-screen and encoding it as PNG or JPEG.

use super::types::{ExportError, ExportFormat};
use crate::draw::{Color, Shape, WHITE, render_background, render_shapes};
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;

/// Renders `shapes` into a fresh ARGB32 surface.
///
/// With `background` set, the surface is first filled with white and the
/// background painted over it, so the result is fully opaque. Without one
/// the untouched pixels stay transparent.
pub fn render_image(
    shapes: &[Shape],
    width: i32,
    height: i32,
    background: Option<Color>,
) -> Result<cairo::ImageSurface, ExportError> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        if let Some(background) = background {
            render_background(&ctx, WHITE);
            let (r, g, b, a) = background.to_unit_rgba();
            ctx.set_source_rgba(r, g, b, a);
            ctx.paint()?;
        }
        render_shapes(&ctx, shapes);
    }
    surface.flush();
    Ok(surface)
}

/// Encodes a rendered surface in the requested format.
pub fn encode_surface(
    surface: &mut cairo::ImageSurface,
    format: ExportFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Png => encode_png(surface),
        ExportFormat::Jpeg => encode_jpeg(surface, jpeg_quality),
    }
}

fn encode_png(surface: &cairo::ImageSurface) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    surface
        .write_to_png(&mut buffer)
        .map_err(|e| ExportError::EncodeError(format!("PNG: {e}")))?;
    Ok(buffer)
}

fn encode_jpeg(surface: &mut cairo::ImageSurface, quality: u8) -> Result<Vec<u8>, ExportError> {
    let width = surface.width() as usize;
    let height = surface.height() as usize;
    let stride = surface.stride() as usize;
    let data = surface
        .data()
        .map_err(|e| ExportError::RenderError(format!("surface data unavailable: {e}")))?;

    // JPEG has no alpha, so the surface must be opaque.
    let mut rgb = Vec::with_capacity(width * height * 3);
    for row in data.chunks(stride).take(height) {
        for pixel in row[..width * 4].chunks_exact(4) {
            rgb.extend_from_slice(&argb_to_rgb(pixel));
        }
    }

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode(&rgb, width as u32, height as u32, ExtendedColorType::Rgb8)
        .map_err(|e| ExportError::EncodeError(format!("JPEG: {e}")))?;
    Ok(buffer)
}

/// Splits one Cairo ARGB32 pixel, a native-endian `u32`, into R, G, B.
fn argb_to_rgb(pixel: &[u8]) -> [u8; 3] {
    let argb = u32::from_ne_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
    [(argb >> 16) as u8, (argb >> 8) as u8, argb as u8]
}
