use crate::structs::chart::color_stops::ColorStops;
use crate::structs::chart::linear_gradient::GradientStop;
use crate::traits::rendering_surface::RenderingSurface;

pub struct GradientBuilder;

impl GradientBuilder {
    /// Two-stop ramp from `(0, 0)` to `(0, height)`. Returns `None` while the
    /// surface is not mounted; call again once it reports a height.
    pub fn build<S: RenderingSurface>(surface: &S, colors: &ColorStops) -> Option<S::Gradient> {
        let height = surface.pixel_height()?;
        let stops = [
            GradientStop { offset: 0.0, color: colors.color_start.clone() },
            GradientStop { offset: 1.0, color: colors.color_end.clone() },
        ];
        Some(surface.create_linear_gradient((0.0, 0.0), (0.0, f64::from(height)), &stops))
    }
}
