use thiserror::Error;

/// What to do with regions proven to contain no root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Drop empty regions from the results.
    #[default]
    Discard,

    /// Keep empty regions as stored leaves so the results cover the seeds.
    Store,
}

/// Configuration for a branch-and-prune search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    empty_policy: EmptyPolicy,
    max_steps: Option<usize>,
}

/// Errors that can occur when validating a branch-and-prune config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            empty_policy: EmptyPolicy::Discard,
            max_steps: None,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        Self::default().with_tolerance(tolerance)
    }

    /// Returns a copy with a different tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive.
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(Self { tolerance, ..self })
    }

    /// Returns a copy with a different policy for empty regions.
    #[must_use]
    pub fn with_empty_policy(self, empty_policy: EmptyPolicy) -> Self {
        Self {
            empty_policy,
            ..self
        }
    }

    /// Returns a copy that processes at most `max_steps` nodes in [`solve`].
    ///
    /// [`solve`]: super::solve
    #[must_use]
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..self
        }
    }

    /// Returns the diameter below which unknown regions are stored.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the policy for empty regions.
    #[must_use]
    pub fn empty_policy(&self) -> EmptyPolicy {
        self.empty_policy
    }

    /// Returns the step limit, if any.
    #[must_use]
    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-6), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::INFINITY), Err(ConfigError::Tolerance));
    }

    #[test]
    fn builders_keep_other_settings() {
        let config = Config::new(1e-6)
            .unwrap()
            .with_empty_policy(EmptyPolicy::Store)
            .with_max_steps(10);

        let retuned = config.with_tolerance(1e-3).unwrap();
        assert_eq!(retuned.empty_policy(), EmptyPolicy::Store);
        assert_eq!(retuned.max_steps(), Some(10));
        assert!((retuned.tolerance() - 1e-3).abs() < f64::EPSILON);
    }

    #[test]
    fn default_discards_without_limit() {
        let config = Config::default();
        assert_eq!(config.empty_policy(), EmptyPolicy::Discard);
        assert_eq!(config.max_steps(), None);
        assert_eq!(Config::new(config.tolerance()), Ok(config));
    }
}
