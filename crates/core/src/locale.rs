//! Supported UI locales.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A locale the application ships translations for.
///
/// Locale tags appear as the first path segment (`/vi/dashboard`), in the
/// `NEXT_LOCALE` cookie and in a user's `language_preference`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Vi,
    #[default]
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Vi, Locale::En, Locale::Ja];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Lenient lookup: `None` for anything that is not an exact supported tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == tag)
    }

    /// Split a leading locale segment off a path.
    ///
    /// `/vi/dashboard` yields `(Some(Vi), "/dashboard")`; `/en` yields
    /// `(Some(En), "")`. Only whole segments match, so `/english` is left alone.
    pub fn strip_prefix(path: &str) -> (Option<Self>, &str) {
        for locale in Self::ALL {
            if let Some(rest) = path
                .strip_prefix('/')
                .and_then(|p| p.strip_prefix(locale.as_str()))
            {
                if rest.is_empty() || rest.starts_with('/') {
                    return (Some(locale), rest);
                }
            }
        }
        (None, path)
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| {
            DomainError::validation(format!("unsupported locale '{s}' (expected one of: vi, en, ja)"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_prefix_matches_whole_segments_only() {
        assert_eq!(Locale::strip_prefix("/vi/dashboard"), (Some(Locale::Vi), "/dashboard"));
        assert_eq!(Locale::strip_prefix("/ja"), (Some(Locale::Ja), ""));
        assert_eq!(Locale::strip_prefix("/english/x"), (None, "/english/x"));
        assert_eq!(Locale::strip_prefix("/dashboard"), (None, "/dashboard"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("EN".parse::<Locale>().is_err());
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(serde_json::to_string(&Locale::Vi).unwrap(), "\"vi\"");
    }
}
