use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::models::{AccountRecord, SearchType};
use crate::shared::services::SearchService;
use crate::shared::state::{debounce_then_search, SearchBoxState, SearchStateHandle};
use crate::shared::utils::Debouncer;

impl SearchStateHandle for Signal<SearchBoxState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchBoxState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}

/// Search box state plus the handlers the markup wires to events
#[derive(Clone)]
pub struct UseSearchBoxReturn {
    pub state: Signal<SearchBoxState>,
    debouncer: Debouncer,
    service: SearchService,
    search_type: SearchType,
}

impl UseSearchBoxReturn {
    /// Keystroke: update the input now, search once typing pauses
    pub fn on_input(&self, value: String) {
        let mut state = self.state;
        if !state.update(|s| s.set_input(value.clone())) {
            return;
        }

        let debouncer = self.debouncer.clone();
        let service = self.service.clone();
        let search_type = self.search_type;
        spawn(async move {
            debounce_then_search(state, &debouncer, &service, search_type, value).await;
        });
    }

    pub fn on_focus(&self) {
        let mut state = self.state;
        state.update(|s| s.focus());
    }

    pub fn on_click_outside(&self) {
        let mut state = self.state;
        state.update(|s| s.click_outside());
    }

    pub fn on_clear(&self) {
        self.debouncer.cancel();
        let mut state = self.state;
        state.update(|s| s.clear());
    }

    pub fn on_select(&self, account: &AccountRecord) {
        self.debouncer.cancel();
        let mut state = self.state;
        state.update(|s| s.select(account));
    }
}

/// Hook owning the search box state for the lifetime of the component.
///
/// Expects `AppConfig` and `SearchService` in context (provided by `App`).
pub fn use_search_box() -> UseSearchBoxReturn {
    let config = use_context::<AppConfig>();
    let service = use_context::<SearchService>();
    let state = use_signal(SearchBoxState::default);
    let debouncer = use_hook(|| Debouncer::new(config.debounce()));

    UseSearchBoxReturn {
        state,
        debouncer,
        search_type: service.default_type(),
        service,
    }
}
