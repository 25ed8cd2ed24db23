//! Print configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | ESC_WORD_NUMBER | 32 | Line width in printer cells |

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::error::{PrintError, PrintResult};

const WIDTH_58MM: NonZeroUsize = NonZeroUsize::new(32).unwrap();
const WIDTH_80MM: NonZeroUsize = NonZeroUsize::new(48).unwrap();

/// Common paper widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperWidth {
    /// 58mm paper: 32 cells
    Mm58,
    /// 80mm paper: 48 cells
    Mm80,
}

impl PaperWidth {
    pub fn word_number(self) -> NonZeroUsize {
        match self {
            PaperWidth::Mm58 => WIDTH_58MM,
            PaperWidth::Mm80 => WIDTH_80MM,
        }
    }
}

/// Effective print configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    /// Line width in printer cells
    pub word_number: NonZeroUsize,
}

impl PrintConfig {
    /// Configuration for a paper width
    pub fn for_paper(paper: PaperWidth) -> Self {
        Self {
            word_number: paper.word_number(),
        }
    }

    /// Line width as a plain count
    pub fn width(&self) -> usize {
        self.word_number.get()
    }

    /// Apply overrides; keys left unset keep their current value
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(word_number) = overrides.word_number {
            self.word_number = word_number;
        }
    }

    /// Default configuration with overrides applied
    pub fn merged(overrides: &ConfigOverrides) -> Self {
        let mut config = Self::default();
        config.merge(overrides);
        config
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self::for_paper(PaperWidth::Mm58)
    }
}

/// Caller supplied configuration overrides
///
/// Deserializes from the same mapping the device layer uses, e.g.
/// `{"wordNumber": 48}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(default)]
    pub word_number: Option<NonZeroUsize>,
}

impl ConfigOverrides {
    /// Override only the line width
    pub fn word_number(n: NonZeroUsize) -> Self {
        Self {
            word_number: Some(n),
        }
    }

    /// Parse overrides from a JSON object
    ///
    /// A zero or negative `wordNumber` is rejected.
    pub fn from_json(json: &str) -> PrintResult<Self> {
        serde_json::from_str(json).map_err(|e| PrintError::InvalidConfig(e.to_string()))
    }

    /// Read overrides from the environment
    ///
    /// Unset or unparsable variables leave the key unset.
    pub fn from_env() -> Self {
        Self {
            word_number: std::env::var("ESC_WORD_NUMBER")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_default_is_58mm() {
        assert_eq!(PrintConfig::default().width(), 32);
        assert_eq!(PrintConfig::for_paper(PaperWidth::Mm80).width(), 48);
    }

    #[test]
    fn test_merge_overrides_set_keys() {
        let mut config = PrintConfig::default();
        config.merge(&ConfigOverrides::word_number(nz(48)));
        assert_eq!(config.width(), 48);

        config.merge(&ConfigOverrides::default());
        assert_eq!(config.width(), 48);

        config.merge(&ConfigOverrides::word_number(nz(40)));
        assert_eq!(config.width(), 40);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let overrides = ConfigOverrides::word_number(nz(48));
        let mut once = PrintConfig::default();
        once.merge(&overrides);
        let mut twice = PrintConfig::default();
        twice.merge(&overrides);
        twice.merge(&overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_from_json() {
        let o = ConfigOverrides::from_json(r#"{"wordNumber": 48}"#).unwrap();
        assert_eq!(o.word_number, Some(nz(48)));

        let o = ConfigOverrides::from_json("{}").unwrap();
        assert_eq!(o.word_number, None);
    }

    // Tests run in parallel and share the process environment
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn env_overrides(value: Option<&str>) -> ConfigOverrides {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: every test touching ESC_WORD_NUMBER holds ENV_LOCK
        unsafe {
            match value {
                Some(v) => std::env::set_var("ESC_WORD_NUMBER", v),
                None => std::env::remove_var("ESC_WORD_NUMBER"),
            }
        }
        let overrides = ConfigOverrides::from_env();
        unsafe { std::env::remove_var("ESC_WORD_NUMBER") };
        overrides
    }

    #[test]
    fn test_from_env() {
        assert_eq!(env_overrides(Some("48")).word_number, Some(nz(48)));
        assert_eq!(env_overrides(Some(" 40 ")).word_number, Some(nz(40)));
        assert_eq!(env_overrides(None).word_number, None);
        assert_eq!(env_overrides(Some("0")).word_number, None);
        assert_eq!(env_overrides(Some("-1")).word_number, None);
        assert_eq!(env_overrides(Some("wide")).word_number, None);
    }

    #[test]
    fn test_from_env_merge_keeps_default() {
        let mut config = PrintConfig::default();
        config.merge(&env_overrides(Some("garbage")));
        assert_eq!(config.width(), 32);
    }

    #[test]
    fn test_from_json_rejects_non_positive() {
        assert!(matches!(
            ConfigOverrides::from_json(r#"{"wordNumber": 0}"#),
            Err(PrintError::InvalidConfig(_))
        ));
        assert!(ConfigOverrides::from_json(r#"{"wordNumber": -3}"#).is_err());
    }
}
