use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use crate::theme::PreferenceStore;

/// One `localStorage` key. An empty value reads as absent; when the browser
/// has no usable storage the signal just stays in memory.
#[derive(Clone, Copy)]
pub struct BrowserStore {
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl BrowserStore {
    pub fn new(key: &'static str) -> Self {
        let (value, set_value, _) = use_local_storage::<String, FromToStringCodec>(key);
        Self { value, set_value }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self) -> Option<String> {
        let value = self.value.get_untracked();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn set(&self, value: &str) {
        self.set_value.set(value.to_string());
    }
}
