//! Configurable limits for task validation.

use serde::Deserialize;

/// Default maximum title length in characters.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 100;

/// Default maximum description length in characters.
pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 500;

/// Limits applied by [`TaskValidator`](super::TaskValidator).
///
/// # Examples
///
/// ```
/// use dayplanner::task::validation::TaskValidationConfig;
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.max_title_chars, 100);
///
/// let tight = TaskValidationConfig::default().with_max_title_chars(10);
/// assert_eq!(tight.max_title_chars, 10);
/// assert_eq!(tight.max_description_chars, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskValidationConfig {
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            max_description_chars: DEFAULT_MAX_DESCRIPTION_CHARS,
        }
    }
}

impl TaskValidationConfig {
    /// Creates a configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_chars: 50,
            max_description_chars: 200,
        }
    }

    /// Overrides the maximum title length.
    #[must_use]
    pub const fn with_max_title_chars(mut self, max: usize) -> Self {
        self.max_title_chars = max;
        self
    }

    /// Overrides the maximum description length.
    #[must_use]
    pub const fn with_max_description_chars(mut self, max: usize) -> Self {
        self.max_description_chars = max;
        self
    }
}
