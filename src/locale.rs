//! Host locale detection
//!
//! Resolves the locale used for date labels from the usual POSIX environment
//! variables and turns POSIX names (`en_GB.UTF-8`) into BCP-47 locales.

use icu::locale::{locale, Locale};

/// Environment variables consulted for the date locale, highest precedence first
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Locale used when the host names none, or names `C`/`POSIX`
pub fn fallback_locale() -> Locale {
    locale!("en-GB")
}

/// Parse a locale name such as `en_GB.UTF-8`, `de-DE` or `C`
///
/// The encoding and modifier suffixes are ignored. Returns `None` for names
/// that are not well-formed locale identifiers.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let base = name
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    match base.as_str() {
        "" => None,
        "C" | "POSIX" => Some(fallback_locale()),
        other => other.parse::<Locale>().ok(),
    }
}

/// Locale of the host environment, falling back to [`fallback_locale`]
pub fn detect_locale() -> Locale {
    detect_locale_with(|key| std::env::var(key).ok())
}

/// Same as [`detect_locale`] with an injectable variable lookup
pub fn detect_locale_with<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .and_then(|value| {
            let parsed = parse_locale(&value);
            if parsed.is_none() {
                log::debug!("Malformed host locale {:?}, using {}", value, fallback_locale());
            }
            parsed
        })
        .unwrap_or_else(fallback_locale)
}
