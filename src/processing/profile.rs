use std::ops::Index;

/// An ordered run of amplitude samples taken at evenly spaced positions.
///
/// Profiles are never modified once built; every pipeline stage produces a
/// fresh one of the same length as its input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    samples: Vec<f64>,
}

impl Profile {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    /// Peak-to-valley range, or `None` for an empty profile.
    pub fn peak_to_valley(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let min = self.samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(max - min)
    }
}

impl From<Vec<f64>> for Profile {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<f64> for Profile {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Profile {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Profile {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_to_valley_spans_extremes() {
        let p = Profile::from(vec![0.5, -2.0, 3.0, 1.0]);
        assert_eq!(p.peak_to_valley(), Some(5.0));
        assert_eq!(Profile::default().peak_to_valley(), None);
    }

    #[test]
    fn collects_from_iterator() {
        let p: Profile = (0..3).map(|i| i as f64).collect();
        assert_eq!(p.len(), 3);
        assert_eq!(p[2], 2.0);
        assert_eq!(p.as_slice(), &[0.0, 1.0, 2.0]);
    }
}
