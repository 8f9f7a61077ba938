//! Theme preference (light / dark / system)
//!
//! The choice is persisted as a plain string under [`THEME_KEY`]. `System`
//! defers to the environment's light/dark preference at resolve time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VaultResult;
use crate::storage::{KeyValueStore, THEME_KEY};

/// User-selected theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete appearance after resolving `System`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Theme {
    /// Next theme in the toggle cycle: system -> dark -> light -> system
    pub fn next(self) -> Self {
        match self {
            Theme::System => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::System,
        }
    }

    pub fn resolve(self, prefers_dark: bool) -> Appearance {
        match self {
            Theme::Light => Appearance::Light,
            Theme::Dark => Appearance::Dark,
            Theme::System if prefers_dark => Appearance::Dark,
            Theme::System => Appearance::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Lenient parse used for stored values; anything unknown is `System`
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!(
                "unknown theme '{}' (expected light, dark or system)",
                other
            )),
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Light => write!(f, "Light"),
            Appearance::Dark => write!(f, "Dark"),
        }
    }
}

/// Persisted theme preference backed by a key-value store
pub struct ThemePreference<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, `System` when nothing is stored
    pub fn current(&self) -> VaultResult<Theme> {
        Ok(self
            .store
            .get(THEME_KEY)?
            .map(|v| Theme::from_stored(&v))
            .unwrap_or_default())
    }

    /// Persist a theme and report how it renders right now
    pub fn set(&mut self, theme: Theme, prefers_dark: bool) -> VaultResult<Appearance> {
        self.store.set(THEME_KEY, theme.as_str())?;
        log::info!("theme set to {}", theme);
        Ok(theme.resolve(prefers_dark))
    }

    /// Advance to the next theme in the cycle and persist it
    ///
    /// An unrecognised stored value resets to `System` instead of advancing.
    pub fn cycle(&mut self) -> VaultResult<Theme> {
        let next = match self.store.get(THEME_KEY)? {
            None => Theme::System.next(),
            Some(stored) => stored
                .parse::<Theme>()
                .map(Theme::next)
                .unwrap_or(Theme::System),
        };
        self.store.set(THEME_KEY, next.as_str())?;
        log::info!("theme cycled to {}", next);
        Ok(next)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Guess whether the terminal has a dark background
///
/// Reads `COLORFGBG` ("fg;bg" or "fg;default;bg"), which many terminals
/// export. Without it, assume light, as browsers do when no preference is
/// reported.
pub fn detect_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .map(|v| colorfgbg_is_dark(&v))
        .unwrap_or(false)
}

fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}
