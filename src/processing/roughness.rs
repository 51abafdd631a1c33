use crate::error::{ProfileError, ProfileResult};
use crate::processing::profile::Profile;

/// Residual of `profile` about its mean line, sample by sample.
pub fn subtract(profile: &Profile, mean_line: &Profile) -> ProfileResult<Profile> {
    if profile.len() != mean_line.len() {
        return Err(ProfileError::LengthMismatch {
            profile: profile.len(),
            mean_line: mean_line.len(),
        });
    }

    Ok(profile
        .iter()
        .zip(mean_line.iter())
        .map(|(p, m)| p - m)
        .collect())
}
