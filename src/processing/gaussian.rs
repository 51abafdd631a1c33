use crate::error::{ProfileError, ProfileResult};
use crate::processing::profile::Profile;

/// Finite Gaussian kernel covering offsets `-radius..radius`.
///
/// The spread is tied to the radius: `w(k) = exp(-k^2 / (0.1 * radius^2))`.
/// Weights are evaluated per tap, so memory does not grow with the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    radius: f64,
    spread: f64,
}

impl GaussianKernel {
    /// Round a real-valued radius to the nearest integer and build the kernel.
    pub fn from_real_radius(radius: f64) -> ProfileResult<Self> {
        let radius = round_radius(radius)?;
        tracing::debug!(radius, "built gaussian kernel");
        Ok(Self {
            radius,
            spread: 0.1 * radius * radius,
        })
    }

    /// Weight at signed `offset`, or `None` outside `-radius..radius`.
    pub fn weight(&self, offset: i64) -> Option<f64> {
        let k = offset as f64;
        if k < -self.radius || k >= self.radius {
            return None;
        }
        Some((-(k * k) / self.spread).exp())
    }

    /// Number of taps reachable on either side of a position in a profile of
    /// `len` samples.
    fn span(&self, len: usize) -> usize {
        if self.radius >= len as f64 {
            len
        } else {
            // radius < len, so the conversion is exact
            self.radius as usize
        }
    }

    /// Weighted local mean at every position of `profile`.
    ///
    /// Taps that fall outside the profile are dropped from both the sum and
    /// the normaliser, so edge samples average only the taps actually
    /// available. There is no padding, wrap-around or reflection.
    pub fn convolve(&self, profile: &Profile) -> ProfileResult<Profile> {
        let samples = profile.as_slice();
        let n = samples.len();
        let span = self.span(n);

        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            // Offsets -span..span clipped to [0, n), i.e. max(-r, -i)..min(r, n - i)
            let lo = i - span.min(i);
            let hi = i + span.min(n - i);

            let mut sum = 0.0;
            let mut count = 0.0;
            for (idx, &sample) in samples.iter().enumerate().take(hi).skip(lo) {
                let offset = idx as i64 - i as i64;
                let Some(w) = self.weight(offset) else {
                    continue;
                };
                sum += sample * w;
                count += w;
            }
            if count == 0.0 {
                return Err(ProfileError::DegenerateWindow { position: i });
            }
            out.push(sum / count);
        }
        Ok(Profile::new(out))
    }
}

/// Nearest integer radius, rejecting anything that would leave the kernel
/// empty.
pub fn round_radius(radius: f64) -> ProfileResult<f64> {
    if !radius.is_finite() {
        return Err(ProfileError::InvalidKernelSize(radius));
    }
    let rounded = radius.round();
    if rounded < 1.0 {
        return Err(ProfileError::InvalidKernelSize(radius));
    }
    Ok(rounded)
}

/// Gaussian mean line of `profile` for a real-valued kernel radius.
pub fn smooth(profile: &Profile, kernel_radius: f64) -> ProfileResult<Profile> {
    GaussianKernel::from_real_radius(kernel_radius)?.convolve(profile)
}
