use crate::structs::chart::linear_gradient::GradientStop;

/// A mounted (or not yet mounted) drawing surface of the rendering layer.
pub trait RenderingSurface {
    /// Backend-specific gradient object.
    type Gradient;

    /// Pixel height once the surface is mounted, `None` before.
    fn pixel_height(&self) -> Option<u32>;

    fn create_linear_gradient(&self, from: (f64, f64), to: (f64, f64), stops: &[GradientStop]) -> Self::Gradient;
}
