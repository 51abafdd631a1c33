use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};
use crate::processing::profile::Profile;

/// Scalar roughness metrics of a surface profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoughnessStats {
    /// Arithmetic mean of absolute roughness.
    pub ra: f64,
    /// Root-mean-square roughness.
    pub rq: f64,
    /// Peak-to-valley range of the raw profile.
    pub ry: f64,
}

impl RoughnessStats {
    /// Compute Ra and Rq from `roughness` and Ry from the raw `profile`.
    pub fn compute(profile: &Profile, roughness: &Profile) -> ProfileResult<Self> {
        if profile.is_empty() || roughness.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }

        let n = roughness.len() as f64;
        let ra = roughness.iter().map(|v| v.abs()).sum::<f64>() / n;
        let rq = (roughness.iter().map(|v| v * v).sum::<f64>() / n).sqrt();
        let ry = profile.peak_to_valley().ok_or(ProfileError::EmptyProfile)?;

        Ok(RoughnessStats { ra, rq, ry })
    }

    /// Format as a multi-line report string.
    pub fn report(&self) -> String {
        format!(
            "Ra: {}\nRq: {}\nRmax/Ry: {}",
            self.ra, self.rq, self.ry
        )
    }
}
