use serde::{Deserialize, Serialize};

use crate::processing::waveform::{WaveParameters, WaveType};

/// Which curves the plot draws. Consumed only by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveToggles {
    pub surface_profile: bool,
    pub mean_line: bool,
    pub roughness: bool,
}

impl Default for CurveToggles {
    fn default() -> Self {
        Self {
            surface_profile: true,
            mean_line: true,
            roughness: true,
        }
    }
}

/// One render request from the parameter controls.
///
/// Carries everything the pipeline needs by value, so a run never reads
/// live widget state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub wave_type: WaveType,
    pub wave_count: f64,
    pub amplitude: f64,
    pub point_count: usize,
    /// Kernel radius as a fraction of the point count, in (0, 1].
    pub gauss_fraction: f64,
    #[serde(default)]
    pub curves: CurveToggles,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            wave_type: WaveType::Sine,
            wave_count: 5.0,
            amplitude: 1.0,
            point_count: 1000,
            gauss_fraction: 0.1,
            curves: CurveToggles::default(),
        }
    }
}

impl RenderRequest {
    pub fn wave_parameters(&self) -> WaveParameters {
        WaveParameters {
            wave_type: self.wave_type,
            wave_count: self.wave_count,
            amplitude: self.amplitude,
            point_count: self.point_count,
        }
    }

    /// Real-valued kernel radius; the smoother rounds it.
    pub fn kernel_radius(&self) -> f64 {
        self.gauss_fraction * self.point_count as f64
    }

    /// Whether `other` needs a fresh pipeline run, as opposed to only a
    /// different set of visible curves.
    pub fn needs_recompute(&self, other: &RenderRequest) -> bool {
        self.wave_parameters() != other.wave_parameters()
            || self.gauss_fraction != other.gauss_fraction
    }
}
