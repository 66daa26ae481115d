use std::fmt;

use thiserror::Error;

/// Local storage key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Restores a mode from its persisted flag. Only `"light"` selects the
    /// light theme; anything else, including no value, is dark.
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Root class selecting the CSS variable set for this mode.
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
        }
    }

    /// Value for the CSS `color-scheme` property, so native controls and
    /// scrollbars follow the page theme.
    pub fn color_scheme(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("couldn't read preference: {0}")]
    Read(String),
    #[error("couldn't write preference: {0}")]
    Write(String),
}

/// Durable home of a single string preference.
///
/// Stores that write asynchronously may accept a `save` and report its
/// failure from the next `save` instead.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, PreferenceError>;
    fn save(&self, value: &str) -> Result<(), PreferenceError>;
}

/// Current theme plus the store it is persisted to.
///
/// Storage failures never block the theme: a failed read starts in dark mode,
/// and any failure turns persistence off for the rest of the session.
#[derive(Debug)]
pub struct ThemePreference<S> {
    mode: ThemeMode,
    store: S,
    persist: bool,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn initialize(store: S) -> Self {
        let (mode, persist) = match store.load() {
            Ok(value) => (ThemeMode::from_persisted(value.as_deref()), true),
            Err(err) => {
                log::warn!("theme preference unavailable, using default: {err}");
                (ThemeMode::default(), false)
            }
        };
        log::debug!("restored theme: {mode}");
        Self {
            mode,
            store,
            persist,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_persisting(&self) -> bool {
        self.persist
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if self.persist {
            if let Err(err) = self.store.save(self.mode.as_str()) {
                log::warn!("couldn't persist theme, continuing without it: {err}");
                self.persist = false;
            }
        }
        self.mode
    }
}
