use serde::{Deserialize, Serialize};
use crate::structs::chart::linear_gradient::{GradientStop, LinearGradient};
use crate::traits::rendering_surface::RenderingSurface;

/// Surface report from the web renderer. `height` is `None` until the
/// canvas is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartSurface {
    pub height: Option<u32>,
}

impl ChartSurface {
    pub fn mounted(height: u32) -> Self {
        Self { height: Some(height) }
    }

    pub fn unmounted() -> Self {
        Self { height: None }
    }
}

impl RenderingSurface for ChartSurface {
    type Gradient = LinearGradient;

    fn pixel_height(&self) -> Option<u32> {
        self.height
    }

    fn create_linear_gradient(&self, from: (f64, f64), to: (f64, f64), stops: &[GradientStop]) -> LinearGradient {
        LinearGradient {
            x0: from.0,
            y0: from.1,
            x1: to.0,
            y1: to.1,
            stops: stops.to_vec(),
        }
    }
}
