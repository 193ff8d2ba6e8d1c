//! Search box state
//!
//! Keystrokes update `input` immediately. A debounced copy is published once
//! typing pauses, and each published query is tagged with a sequence number
//! so that a slow response can never overwrite the results of a newer one.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::models::{AccountRecord, SearchType};
use crate::shared::logging::{
    log_debounce_superseded, log_search_result, log_search_start, log_stale_response,
};
use crate::shared::services::SearchProvider;
use crate::shared::utils::Debouncer;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchBoxState {
    input: String,
    debounced: String,
    results: Vec<AccountRecord>,
    visible: bool,
    loading: bool,
    seq: u64,
}

/// A search that was issued and may still be in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl SearchBoxState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn debounced(&self) -> &str {
        &self.debounced
    }

    pub fn results(&self) -> &[AccountRecord] {
        &self.results
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Accept a keystroke. Values starting with whitespace are rejected and
    /// leave the state untouched. Typing reopens a dropdown closed by Escape
    /// while the input kept focus.
    pub fn set_input(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.starts_with(char::is_whitespace) {
            return false;
        }
        self.input = value;
        self.visible = true;
        true
    }

    pub fn focus(&mut self) {
        self.visible = true;
    }

    pub fn click_outside(&mut self) {
        self.visible = false;
    }

    /// Publish the value that survived the quiet period.
    ///
    /// Returns a ticket when a request should be issued. An unchanged value
    /// issues nothing; a blank one clears the results.
    pub fn publish_debounced(&mut self, value: &str) -> Option<SearchTicket> {
        if value == self.debounced {
            return None;
        }
        self.debounced = value.to_string();
        self.seq += 1;

        let query = value.trim();
        if query.is_empty() {
            self.results.clear();
            self.loading = false;
            return None;
        }

        self.loading = true;
        Some(SearchTicket {
            seq: self.seq,
            query: query.to_string(),
        })
    }

    /// Apply a response. Returns `false` if a newer search superseded it.
    pub fn finish_search(&mut self, ticket: SearchTicket, results: Vec<AccountRecord>) -> bool {
        if ticket.seq != self.seq {
            log_stale_response(&ticket.query, ticket.seq, self.seq);
            return false;
        }

        log_search_result(&ticket.query, ticket.seq, results.len());
        self.results = results;
        self.loading = false;
        true
    }

    /// Empty the input and drop everything derived from it, including any
    /// response still in flight.
    pub fn clear(&mut self) {
        self.input.clear();
        self.debounced.clear();
        self.results.clear();
        self.loading = false;
        self.seq += 1;
    }

    /// An account row was picked
    pub fn select(&mut self, _account: &AccountRecord) {
        self.clear();
        self.visible = false;
    }

    pub fn dropdown_visible(&self) -> bool {
        self.visible && !self.results.is_empty() && !self.input.is_empty()
    }

    pub fn show_spinner(&self) -> bool {
        !self.input.is_empty() && self.loading
    }

    pub fn show_clear_button(&self) -> bool {
        !self.input.is_empty() && !self.loading
    }
}

/// Anything that can hand out mutable access to a [`SearchBoxState`]
pub trait SearchStateHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchBoxState) -> R) -> R;
}

impl SearchStateHandle for Rc<RefCell<SearchBoxState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchBoxState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Run one keystroke through the quiet period, the request and the apply step.
///
/// Spawn one of these per accepted keystroke; all but the last one return
/// early once the debouncer settles.
pub async fn debounce_then_search<H, P>(
    mut handle: H,
    debouncer: &Debouncer,
    provider: &P,
    search_type: SearchType,
    query: String,
) where
    H: SearchStateHandle,
    P: SearchProvider,
{
    if !debouncer.settle().await {
        log_debounce_superseded(&query);
        return;
    }

    let ticket = handle.update(|state| {
        if state.input() != query {
            return None;
        }
        state.publish_debounced(&query)
    });
    let Some(ticket) = ticket else {
        return;
    };

    log_search_start(ticket.query(), search_type.as_str(), ticket.seq());
    let results = provider
        .search(ticket.query(), search_type)
        .await
        .unwrap_or_default();

    handle.update(|state| state.finish_search(ticket, results));
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::shared::utils::sleep;
    use std::collections::HashMap;
    use std::time::Duration;

    fn account(id: u64, nickname: &str) -> AccountRecord {
        AccountRecord {
            id,
            nickname: nickname.to_string(),
            ..Default::default()
        }
    }

    /// Records every query and answers with one account named after it
    #[derive(Clone, Default)]
    struct MockProvider {
        calls: Rc<RefCell<Vec<String>>>,
        delays: HashMap<String, Duration>,
        failing: bool,
    }

    impl MockProvider {
        fn failing() -> Self {
            Self { failing: true, ..Default::default() }
        }

        fn with_delay(mut self, query: &str, delay: Duration) -> Self {
            self.delays.insert(query.to_string(), delay);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl SearchProvider for MockProvider {
        async fn search(&self, query: &str, _search_type: SearchType) -> Option<Vec<AccountRecord>> {
            self.calls.borrow_mut().push(query.to_string());
            if let Some(delay) = self.delays.get(query) {
                sleep(*delay).await;
            }
            if self.failing {
                return None;
            }
            Some(vec![account(query.len() as u64, query)])
        }
    }

    fn shared_state() -> Rc<RefCell<SearchBoxState>> {
        Rc::new(RefCell::new(SearchBoxState::default()))
    }

    /// Simulate a keystroke and return the task the component would spawn
    async fn type_and_search(
        state: &Rc<RefCell<SearchBoxState>>,
        debouncer: &Debouncer,
        provider: &MockProvider,
        value: &str,
    ) {
        if state.borrow_mut().set_input(value) {
            debounce_then_search(state.clone(), debouncer, provider, SearchType::Less, value.to_string())
                .await;
        }
    }

    #[test]
    fn test_leading_whitespace_rejected() {
        let mut state = SearchBoxState::default();

        assert!(!state.set_input(" "));
        assert!(!state.set_input("   hoa"));
        assert!(!state.set_input("\thoa"));
        assert_eq!(state.input(), "");

        assert!(state.set_input("hoa "));
        assert_eq!(state.input(), "hoa ");
    }

    #[test]
    fn test_blank_debounced_value_issues_nothing() {
        let mut state = SearchBoxState::default();
        state.set_input("hoa");
        let ticket = state.publish_debounced("hoa").unwrap();
        state.finish_search(ticket, vec![account(1, "hoa")]);

        assert!(state.publish_debounced("   ").is_none());
        assert!(state.results().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_unchanged_debounced_value_not_reissued() {
        let mut state = SearchBoxState::default();

        assert!(state.publish_debounced("hoa").is_some());
        assert!(state.publish_debounced("hoa").is_none());
    }

    #[test]
    fn test_ticket_carries_trimmed_query() {
        let mut state = SearchBoxState::default();
        let ticket = state.publish_debounced("hoa  ").unwrap();

        assert_eq!(ticket.query(), "hoa");
        assert!(state.is_loading());
    }

    #[test]
    fn test_dropdown_visibility_requires_all_three() {
        let mut state = SearchBoxState::default();
        state.set_input("hoa");
        let ticket = state.publish_debounced("hoa").unwrap();
        state.finish_search(ticket, vec![account(1, "hoa")]);
        assert!(state.dropdown_visible());

        state.click_outside();
        assert!(!state.dropdown_visible(), "closed");

        state.focus();
        assert!(state.dropdown_visible());

        let ticket = state.publish_debounced("nobody").unwrap();
        state.finish_search(ticket, Vec::new());
        assert!(!state.dropdown_visible(), "no results");
    }

    #[test]
    fn test_empty_input_hides_dropdown_before_debounce() {
        let mut state = SearchBoxState::default();
        state.focus();
        state.set_input("hoa");
        let ticket = state.publish_debounced("hoa").unwrap();
        state.finish_search(ticket, vec![account(1, "hoa")]);
        assert!(state.dropdown_visible());

        assert!(state.set_input(""));

        assert!(state.is_visible());
        assert_eq!(state.results(), &[account(1, "hoa")]);
        assert!(!state.dropdown_visible());
    }

    #[test]
    fn test_typing_after_escape_reopens_dropdown() {
        let mut state = SearchBoxState::default();
        state.focus();
        state.set_input("hoa");
        let ticket = state.publish_debounced("hoa").unwrap();
        state.finish_search(ticket, vec![account(1, "hoa")]);

        state.click_outside();
        assert!(!state.dropdown_visible());

        state.set_input("hoa2");
        assert!(state.dropdown_visible());
    }

    #[test]
    fn test_rejected_keystroke_keeps_dropdown_closed() {
        let mut state = SearchBoxState::default();
        state.click_outside();

        assert!(!state.set_input(" "));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_clear_hides_dropdown_and_results() {
        let mut state = SearchBoxState::default();
        state.focus();
        state.set_input("hoa");
        let ticket = state.publish_debounced("hoa").unwrap();
        state.finish_search(ticket, vec![account(1, "hoa")]);
        assert!(state.dropdown_visible());

        state.clear();

        assert_eq!(state.input(), "");
        assert!(state.results().is_empty());
        assert!(!state.dropdown_visible());
        assert!(!state.show_clear_button());
        assert!(!state.show_spinner());
    }

    #[test]
    fn test_clear_discards_in_flight_response() {
        let mut state = SearchBoxState::default();
        state.set_input("hoa");
        let ticket = state.publish_debounced("hoa").unwrap();

        state.clear();

        assert!(!state.finish_search(ticket, vec![account(1, "hoa")]));
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_select_clears_input_and_closes() {
        let mut state = SearchBoxState::default();
        state.focus();
        state.set_input("hoa");
        let ticket = state.publish_debounced("hoa").unwrap();
        state.finish_search(ticket, vec![account(1, "hoa")]);

        state.select(&account(1, "hoa"));

        assert_eq!(state.input(), "");
        assert!(!state.is_visible());
        assert!(!state.dropdown_visible());
    }

    #[test]
    fn test_spinner_and_clear_button_toggle() {
        let mut state = SearchBoxState::default();
        assert!(!state.show_spinner());
        assert!(!state.show_clear_button());

        state.set_input("hoa");
        assert!(state.show_clear_button());

        let ticket = state.publish_debounced("hoa").unwrap();
        assert!(state.show_spinner());
        assert!(!state.show_clear_button());

        state.finish_search(ticket, Vec::new());
        assert!(!state.show_spinner());
        assert!(state.show_clear_button());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_request_before_quiet_period() {
        let state = shared_state();
        let debouncer = Debouncer::default();
        let provider = MockProvider::default();

        let watch = async {
            sleep(Duration::from_millis(499)).await;
            assert!(provider.calls().is_empty());
            sleep(Duration::from_millis(2)).await;
            assert_eq!(provider.calls(), vec!["hoa".to_string()]);
        };
        futures::join!(type_and_search(&state, &debouncer, &provider, "hoa"), watch);

        assert_eq!(state.borrow().results(), &[account(3, "hoa")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_burst_issues_single_request() {
        let state = shared_state();
        let debouncer = Debouncer::default();
        let provider = MockProvider::default();

        let keystrokes = async {
            let h = type_and_search(&state, &debouncer, &provider, "h");
            let ho = async {
                sleep(Duration::from_millis(100)).await;
                type_and_search(&state, &debouncer, &provider, "ho").await;
            };
            let hoa = async {
                sleep(Duration::from_millis(200)).await;
                type_and_search(&state, &debouncer, &provider, "hoa").await;
            };
            futures::join!(h, ho, hoa);
        };
        keystrokes.await;

        assert_eq!(provider.calls(), vec!["hoa".to_string()]);
        assert_eq!(state.borrow().debounced(), "hoa");
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_only_input_never_searches() {
        let state = shared_state();
        let debouncer = Debouncer::default();
        let provider = MockProvider::default();

        type_and_search(&state, &debouncer, &provider, " ").await;
        type_and_search(&state, &debouncer, &provider, "    ").await;

        assert!(provider.calls().is_empty());
        assert_eq!(state.borrow().input(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_provider_yields_empty_results() {
        let state = shared_state();
        let debouncer = Debouncer::default();
        let provider = MockProvider::failing();
        state.borrow_mut().focus();

        type_and_search(&state, &debouncer, &provider, "hoa").await;

        let state = state.borrow();
        assert_eq!(provider.calls().len(), 1);
        assert!(state.results().is_empty());
        assert!(!state.is_loading());
        assert!(!state.dropdown_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_does_not_overwrite_newer() {
        let state = shared_state();
        let debouncer = Debouncer::default();
        let provider = MockProvider::default().with_delay("a", Duration::from_millis(1_000));

        // "a" is sent at 500ms and answers at 1500ms; "ab" is sent at 1100ms
        // and answers at once.
        let slow = type_and_search(&state, &debouncer, &provider, "a");
        let fast = async {
            sleep(Duration::from_millis(600)).await;
            type_and_search(&state, &debouncer, &provider, "ab").await;
        };
        futures::join!(slow, fast);

        assert_eq!(provider.calls(), vec!["a".to_string(), "ab".to_string()]);
        assert_eq!(state.borrow().results(), &[account(2, "ab")]);
        assert!(!state.borrow().is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_during_quiet_period_drops_pending_search() {
        let state = shared_state();
        let debouncer = Debouncer::default();
        let provider = MockProvider::default();

        let pending = type_and_search(&state, &debouncer, &provider, "hoa");
        let clear = async {
            sleep(Duration::from_millis(100)).await;
            state.borrow_mut().clear();
        };
        futures::join!(pending, clear);

        assert!(provider.calls().is_empty());
        assert!(state.borrow().results().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_empty_input_clears_results_after_quiet_period() {
        let state = shared_state();
        let debouncer = Debouncer::default();
        let provider = MockProvider::default();

        type_and_search(&state, &debouncer, &provider, "hoa").await;
        assert_eq!(state.borrow().results(), &[account(3, "hoa")]);

        let erase = type_and_search(&state, &debouncer, &provider, "");
        let midway = async {
            sleep(Duration::from_millis(1)).await;
            let current = state.borrow();
            assert!(!current.dropdown_visible());
            assert_eq!(current.results(), &[account(3, "hoa")]);
        };
        futures::join!(erase, midway);

        let current = state.borrow();
        assert!(current.results().is_empty());
        assert!(!current.dropdown_visible());
        assert_eq!(provider.calls(), vec!["hoa".to_string()]);
    }
}
