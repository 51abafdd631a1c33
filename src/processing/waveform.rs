use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};
use crate::processing::profile::Profile;

/// Wave shape used to synthesize a surface profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveType {
    #[serde(rename = "sinewave")]
    Sine,
    #[serde(rename = "trianglewave")]
    Triangle,
    #[serde(rename = "squarewave")]
    Square,
}

impl Default for WaveType {
    fn default() -> Self {
        WaveType::Sine
    }
}

impl WaveType {
    pub const ALL: [WaveType; 3] = [WaveType::Sine, WaveType::Triangle, WaveType::Square];

    pub fn label(&self) -> &'static str {
        match self {
            WaveType::Sine => "Sine",
            WaveType::Triangle => "Triangle",
            WaveType::Square => "Square",
        }
    }

    /// Key used by external parameter sources.
    pub fn key(&self) -> &'static str {
        match self {
            WaveType::Sine => "sinewave",
            WaveType::Triangle => "trianglewave",
            WaveType::Square => "squarewave",
        }
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WaveType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WaveType::ALL
            .into_iter()
            .find(|w| w.key() == s)
            .ok_or_else(|| {
                ProfileError::invalid_parameter(
                    "waveType",
                    format!("unknown wave type {s:?}, expected sinewave, trianglewave or squarewave"),
                )
            })
    }
}

/// Shape parameters for a synthetic profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    pub wave_type: WaveType,
    pub wave_count: f64,
    pub amplitude: f64,
    pub point_count: usize,
}

impl WaveParameters {
    pub fn validate(&self) -> ProfileResult<()> {
        check_positive("waveCount", self.wave_count)?;
        check_positive("amplitude", self.amplitude)?;
        if self.point_count == 0 {
            return Err(ProfileError::invalid_parameter(
                "pointCount",
                "must be a positive integer, got 0",
            ));
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> ProfileResult<()> {
    if !value.is_finite() {
        return Err(ProfileError::invalid_parameter(
            name,
            format!("must be finite, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(ProfileError::invalid_parameter(
            name,
            format!("must be > 0, got {value}"),
        ));
    }
    Ok(())
}

/// Sample a profile of `point_count` values for the given wave shape.
pub fn generate(params: WaveParameters) -> ProfileResult<Profile> {
    params.validate()?;
    check_sampling(&params)?;

    let profile = match params.wave_type {
        WaveType::Sine => sine_wave(&params),
        WaveType::Triangle => triangle_wave(&params),
        WaveType::Square => square_wave(&params),
    };
    Ok(profile)
}

/// Reject parameters whose phase or ramp step overflows, which would
/// otherwise surface as NaN samples (or, for the square wave, a silent
/// `-amplitude`).
fn check_sampling(params: &WaveParameters) -> ProfileResult<()> {
    let n = params.point_count;
    let (what, value) = match params.wave_type {
        // The phase grows with the index, so the last sample bounds it.
        WaveType::Sine | WaveType::Square => (
            "phase",
            (n - 1) as f64 * PI * 2.0 / n as f64 * params.wave_count,
        ),
        WaveType::Triangle => (
            "ramp step",
            4.0 * params.wave_count * params.amplitude / n as f64,
        ),
    };
    if !value.is_finite() {
        return Err(ProfileError::invalid_parameter(
            "waveCount",
            format!("{what} overflows for waveCount {}", params.wave_count),
        ));
    }
    Ok(())
}

/// Phase-scaled sine at sample `i`, evaluated as `i * pi * 2 / n * wave_count`.
fn unit_sine(i: usize, n: usize, wave_count: f64) -> f64 {
    (i as f64 * PI * 2.0 / n as f64 * wave_count).sin()
}

fn sine_wave(params: &WaveParameters) -> Profile {
    let n = params.point_count;
    (0..n)
        .map(|i| unit_sine(i, n, params.wave_count) * params.amplitude)
        .collect()
}

fn square_wave(params: &WaveParameters) -> Profile {
    let n = params.point_count;
    (0..n)
        .map(|i| {
            // sin == 0 falls to the low level.
            if unit_sine(i, n, params.wave_count) * params.amplitude > 0.0 {
                params.amplitude
            } else {
                -params.amplitude
            }
        })
        .collect()
}

/// Ramp between the amplitude rails, flipping direction whenever a step
/// overshoots and clamping to the rail it crossed. Each sample is emitted
/// before the step for that index, so the first sample is always zero.
fn triangle_wave(params: &WaveParameters) -> Profile {
    let amplitude = params.amplitude;
    let step = 4.0 * params.wave_count * amplitude / params.point_count as f64;

    let mut last = 0.0;
    let mut rising = true;
    (0..params.point_count)
        .map(|_| {
            let sample = last;
            last += if rising { step } else { -step };
            if last > amplitude {
                rising = !rising;
                last = amplitude;
            }
            if last < -amplitude {
                rising = !rising;
                last = -amplitude;
            }
            sample
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn params(wave_type: WaveType, wave_count: f64, amplitude: f64, point_count: usize) -> WaveParameters {
        WaveParameters {
            wave_type,
            wave_count,
            amplitude,
            point_count,
        }
    }

    #[test]
    fn sine_quarter_samples() {
        let p = generate(params(WaveType::Sine, 1.0, 1.0, 4)).unwrap();
        let expected = [0.0, 1.0, 0.0, -1.0];
        assert_eq!(p.len(), 4);
        for (got, want) in p.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn square_zero_crossing_goes_low() {
        let p = generate(params(WaveType::Square, 1.0, 2.5, 8)).unwrap();
        // sin(0) == 0 exactly
        assert_eq!(p[0], -2.5);
        assert_eq!(p[1], 2.5);
        assert_eq!(p[7], -2.5);
        assert!(p.iter().all(|v| *v == 2.5 || *v == -2.5));
    }

    #[test]
    fn triangle_ramps_and_clamps() {
        // step = 4 * 1 * 1 / 8 = 0.5
        let p = generate(params(WaveType::Triangle, 1.0, 1.0, 8)).unwrap();
        assert_eq!(p.as_slice(), &[0.0, 0.5, 1.0, 1.0, 0.5, 0.0, -0.5, -1.0]);
    }

    #[test]
    fn triangle_clamps_overshoot_to_rail() {
        // step = 4 * 1 * 1 / 5 = 0.8, so the second step overshoots to 1.6
        let p = generate(params(WaveType::Triangle, 1.0, 1.0, 5)).unwrap();
        assert_eq!(p[0], 0.0);
        assert_abs_diff_eq!(p[1], 0.8, epsilon = 1e-12);
        assert_eq!(p[2], 1.0);
        assert_abs_diff_eq!(p[3], 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(p[4], -0.6, epsilon = 1e-12);
    }

    #[test]
    fn rejects_out_of_domain_parameters() {
        let bad = [
            params(WaveType::Sine, 0.0, 1.0, 10),
            params(WaveType::Sine, -1.0, 1.0, 10),
            params(WaveType::Sine, f64::NAN, 1.0, 10),
            params(WaveType::Triangle, 1.0, 0.0, 10),
            params(WaveType::Triangle, 1.0, f64::INFINITY, 10),
            params(WaveType::Square, 1.0, 1.0, 0),
        ];
        for p in bad {
            assert!(
                matches!(generate(p), Err(ProfileError::InvalidParameter { .. })),
                "{p:?} should be rejected"
            );
        }
    }

    #[test]
    fn overflowing_wave_count_is_rejected() {
        let cases = [
            params(WaveType::Sine, 1e308, 1.0, 4),
            params(WaveType::Square, 1e308, 1.0, 4),
            params(WaveType::Triangle, 1e308, 1e10, 4),
        ];
        for p in cases {
            assert!(
                matches!(
                    generate(p),
                    Err(ProfileError::InvalidParameter { name: "waveCount", .. })
                ),
                "{p:?} should be rejected"
            );
        }
    }

    #[test]
    fn large_finite_phase_still_samples() {
        let p = generate(params(WaveType::Sine, 1e300, 1.0, 4)).unwrap();
        assert!(p.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn wave_type_keys_round_trip() {
        for w in WaveType::ALL {
            assert_eq!(w.key().parse::<WaveType>().unwrap(), w);
        }
        let err = "sawtooth".parse::<WaveType>().unwrap_err();
        assert!(matches!(err, ProfileError::InvalidParameter { name: "waveType", .. }));
    }

    fn wave_type_strategy() -> impl Strategy<Value = WaveType> {
        prop_oneof![
            Just(WaveType::Sine),
            Just(WaveType::Triangle),
            Just(WaveType::Square),
        ]
    }

    proptest! {
        #[test]
        fn length_matches_point_count(
            wave_type in wave_type_strategy(),
            wave_count in 0.01f64..50.0,
            amplitude in 0.01f64..100.0,
            point_count in 1usize..2000,
        ) {
            let p = generate(params(wave_type, wave_count, amplitude, point_count)).unwrap();
            prop_assert_eq!(p.len(), point_count);
        }

        #[test]
        fn samples_stay_within_amplitude(
            wave_type in wave_type_strategy(),
            wave_count in 0.01f64..50.0,
            amplitude in 0.01f64..100.0,
            point_count in 1usize..2000,
        ) {
            let p = generate(params(wave_type, wave_count, amplitude, point_count)).unwrap();
            for v in p.iter() {
                match wave_type {
                    WaveType::Square => prop_assert_eq!(v.abs(), amplitude),
                    WaveType::Sine => prop_assert!(v.abs() <= amplitude * (1.0 + 1e-12)),
                    WaveType::Triangle => prop_assert!(v.abs() <= amplitude),
                }
            }
            if wave_type == WaveType::Triangle {
                prop_assert_eq!(p[0], 0.0);
            }
        }
    }
}
