use std::fmt;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageError, UseStorageOptions};

use crate::theme::{PreferenceError, PreferenceStore, THEME_STORAGE_KEY};

/// Theme flag kept in browser local storage.
///
/// An empty value means nothing was stored. Any error `leptos-use` reports
/// sticks, so the preference stops persisting for the session. Writes land
/// after `save` returns, so a failed write shows up on the following `save`.
#[derive(Clone, Copy)]
pub struct LocalPreference {
    value: Signal<String>,
    set_value: WriteSignal<String>,
    error: RwSignal<Option<PreferenceError>>,
}

impl LocalPreference {
    pub fn new() -> Self {
        let error = RwSignal::new(None::<PreferenceError>);
        let (value, set_value, _) = use_local_storage_with_options::<String, FromToStringCodec>(
            THEME_STORAGE_KEY,
            UseStorageOptions::default().on_error(move |err| {
                log::warn!("local storage error for {THEME_STORAGE_KEY}: {err:?}");
                error.set(Some(preference_error(err)));
            }),
        );
        Self {
            value,
            set_value,
            error,
        }
    }

    /// Preference backed by a plain signal instead of local storage.
    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        let (value, set_value) = signal(String::new());
        Self {
            value: value.into(),
            set_value,
            error: RwSignal::new(None),
        }
    }
}

fn preference_error<E: fmt::Debug, D: fmt::Debug>(err: UseStorageError<E, D>) -> PreferenceError {
    match err {
        UseStorageError::StorageNotAvailable(_) | UseStorageError::StorageReturnedNone => {
            PreferenceError::Unavailable
        }
        UseStorageError::SetItemFailed(_) | UseStorageError::RemoveItemFailed(_) => {
            PreferenceError::Write(format!("{err:?}"))
        }
        _ => PreferenceError::Read(format!("{err:?}")),
    }
}

impl PreferenceStore for LocalPreference {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        if let Some(err) = self.error.get_untracked() {
            return Err(err);
        }
        let value = self.value.get_untracked();
        Ok((!value.is_empty()).then_some(value))
    }

    fn save(&self, value: &str) -> Result<(), PreferenceError> {
        if let Some(err) = self.error.get_untracked() {
            return Err(err);
        }
        self.set_value.set(value.to_string());
        Ok(())
    }
}
