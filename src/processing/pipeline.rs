use crate::error::ProfileResult;
use crate::processing::gaussian;
use crate::processing::profile::Profile;
use crate::processing::roughness;
use crate::processing::statistics::RoughnessStats;
use crate::processing::waveform::{self, WaveParameters};

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceAnalysis {
    pub profile: Profile,
    pub mean_line: Profile,
    pub roughness: Profile,
    pub stats: RoughnessStats,
    /// Integer kernel radius the mean line was built with.
    pub kernel_radius: f64,
}

/// Generate a profile, extract its Gaussian mean line and roughness, and
/// reduce them to statistics.
pub fn analyze(params: WaveParameters, kernel_radius: f64) -> ProfileResult<SurfaceAnalysis> {
    let profile = waveform::generate(params)?;

    let radius = gaussian::round_radius(kernel_radius)?;
    let mean_line = gaussian::smooth(&profile, kernel_radius)?;

    let roughness = roughness::subtract(&profile, &mean_line)?;
    let stats = RoughnessStats::compute(&profile, &roughness)?;

    tracing::debug!(
        wave = %params.wave_type,
        points = params.point_count,
        ra = stats.ra,
        rq = stats.rq,
        ry = stats.ry,
        "surface analysis complete"
    );

    Ok(SurfaceAnalysis {
        profile,
        mean_line,
        roughness,
        stats,
        kernel_radius: radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use crate::processing::waveform::WaveType;
    use approx::assert_abs_diff_eq;

    fn params(wave_type: WaveType, point_count: usize) -> WaveParameters {
        WaveParameters {
            wave_type,
            wave_count: 4.0,
            amplitude: 2.0,
            point_count,
        }
    }

    #[test]
    fn all_stages_share_length() {
        for wave in WaveType::ALL {
            let out = analyze(params(wave, 400), 20.0).unwrap();
            assert_eq!(out.profile.len(), 400);
            assert_eq!(out.mean_line.len(), 400);
            assert_eq!(out.roughness.len(), 400);
            assert_eq!(out.kernel_radius, 20.0);
        }
    }

    #[test]
    fn roughness_is_profile_minus_mean_line() {
        let out = analyze(params(WaveType::Triangle, 120), 6.0).unwrap();
        for i in 0..out.profile.len() {
            assert_abs_diff_eq!(
                out.roughness[i],
                out.profile[i] - out.mean_line[i],
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn ry_spans_raw_square_wave() {
        let out = analyze(params(WaveType::Square, 200), 10.0).unwrap();
        assert_eq!(out.stats.ry, 4.0);
        assert!(out.stats.ra > 0.0);
        assert!(out.stats.rq >= out.stats.ra);
    }

    #[test]
    fn flat_profile_has_no_roughness() {
        let profile = Profile::from(vec![0.7; 64]);
        let mean_line = gaussian::smooth(&profile, 9.0).unwrap();
        let residual = roughness::subtract(&profile, &mean_line).unwrap();
        let stats = RoughnessStats::compute(&profile, &residual).unwrap();
        assert_abs_diff_eq!(stats.ra, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.rq, 0.0, epsilon = 1e-12);
        assert_eq!(stats.ry, 0.0);
    }

    #[test]
    fn propagates_stage_errors() {
        let mut bad = params(WaveType::Sine, 100);
        bad.amplitude = -1.0;
        assert!(matches!(
            analyze(bad, 5.0),
            Err(ProfileError::InvalidParameter { name: "amplitude", .. })
        ));
        assert!(matches!(
            analyze(params(WaveType::Sine, 100), 0.0),
            Err(ProfileError::InvalidKernelSize(_))
        ));
    }
}
