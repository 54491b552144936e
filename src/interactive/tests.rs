//! Controller flows exercised end to end against a scripted in-memory
//! backend: dispatch through the fetch service, apply the response, and
//! check the observable state. No network, no terminal.

use std::sync::{Arc, Mutex};

use crate::api::{ApiError, Book, CatalogApi, FacetFilter};

use super::application::fetch_service::FetchService;
use super::application::history_service::HistoryService;
use super::domain::models::FetchRequest;
use super::ui::app_state::{AppState, Surface};
use super::ui::commands::Command;
use super::ui::events::Message;

struct StubCatalog {
    popular_response: Result<Vec<Book>, ApiError>,
    semantic_response: Result<Vec<Book>, ApiError>,
    faceted_response: Result<Vec<Book>, ApiError>,
    suggestions_response: Result<Vec<Book>, ApiError>,
    read_response: Result<(), ApiError>,
    semantic_queries: Mutex<Vec<String>>,
    faceted_filters: Mutex<Vec<FacetFilter>>,
    suggestion_emails: Mutex<Vec<String>>,
    read_calls: Mutex<Vec<(String, String)>>,
    search_history_calls: Mutex<Vec<Vec<String>>>,
}

impl StubCatalog {
    fn new() -> Self {
        Self {
            popular_response: Ok(Vec::new()),
            semantic_response: Ok(Vec::new()),
            faceted_response: Ok(Vec::new()),
            suggestions_response: Ok(Vec::new()),
            read_response: Ok(()),
            semantic_queries: Mutex::new(Vec::new()),
            faceted_filters: Mutex::new(Vec::new()),
            suggestion_emails: Mutex::new(Vec::new()),
            read_calls: Mutex::new(Vec::new()),
            search_history_calls: Mutex::new(Vec::new()),
        }
    }
}

impl CatalogApi for StubCatalog {
    fn fetch_popular(&self) -> Result<Vec<Book>, ApiError> {
        self.popular_response.clone()
    }

    fn fetch_semantic(&self, query: &str) -> Result<Vec<Book>, ApiError> {
        self.semantic_queries.lock().unwrap().push(query.to_string());
        self.semantic_response.clone()
    }

    fn fetch_faceted(&self, filter: &FacetFilter) -> Result<Vec<Book>, ApiError> {
        self.faceted_filters.lock().unwrap().push(filter.clone());
        self.faceted_response.clone()
    }

    fn fetch_suggestions(&self, email: &str) -> Result<Vec<Book>, ApiError> {
        self.suggestion_emails.lock().unwrap().push(email.to_string());
        self.suggestions_response.clone()
    }

    fn record_read(&self, email: &str, book_id: &str) -> Result<(), ApiError> {
        self.read_calls
            .lock()
            .unwrap()
            .push((email.to_string(), book_id.to_string()));
        self.read_response.clone()
    }

    fn record_search(&self, _email: &str, queries: &[String]) -> Result<(), ApiError> {
        self.search_history_calls.lock().unwrap().push(queries.to_vec());
        Ok(())
    }

    fn register(&self, _email: &str, _username: &str) -> Result<(), ApiError> {
        Ok(())
    }
}

fn book(id: &str, title: &str, score: f64) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: vec!["George Orwell".to_string()],
        score,
        ..Book::default()
    }
}

/// Runs a fetch command synchronously through the service, the way the
/// worker thread would, and applies the response.
fn dispatch(state: &mut AppState, service: &FetchService, command: Command) -> Command {
    match command {
        Command::Fetch(kind) => {
            let response = service.execute(FetchRequest {
                generation: state.generation,
                kind,
            });
            state.apply_fetch(response)
        }
        other => other,
    }
}

#[test]
fn semantic_search_end_to_end() {
    let stub = Arc::new(StubCatalog {
        semantic_response: Ok(vec![book("b1", "1984", 0.91)]),
        ..StubCatalog::new()
    });
    let service = FetchService::new(stub.clone());
    let mut state = AppState::new("a@b.com".to_string());

    state.update(Message::OpenSearch);
    state.update(Message::QueryChanged("1984".to_string()));
    let command = state.update(Message::Submit);
    assert!(state.session.is_searching);

    let follow_up = dispatch(&mut state, &service, command);

    assert!(!state.session.is_searching);
    assert!(state.session.has_results);
    assert_eq!(state.session.results.len(), 1);
    assert_eq!(state.session.results[0].score, 0.91);
    assert_eq!(stub.semantic_queries.lock().unwrap().as_slice(), ["1984"]);

    // The successful search also records itself into the account history.
    let history = HistoryService::new(stub.clone());
    match follow_up {
        Command::RecordSearch(query) => {
            history.record_search(&state.email, &query).join().unwrap();
        }
        other => panic!("expected a search-history write, got {other:?}"),
    }
    assert_eq!(
        stub.search_history_calls.lock().unwrap().as_slice(),
        [vec!["1984".to_string()]]
    );
}

#[test]
fn faceted_search_with_empty_result_is_valid() {
    let stub = Arc::new(StubCatalog::new());
    let service = FetchService::new(stub.clone());
    let mut state = AppState::new("a@b.com".to_string());

    state.update(Message::OpenSearch);
    state.update(Message::SwitchMode(
        crate::interactive::domain::models::SearchMode::Faceted,
    ));
    state.update(Message::FilterChanged(
        crate::interactive::domain::models::FacetField::Author,
        "Orwell".to_string(),
    ));
    let command = state.update(Message::Submit);

    dispatch(&mut state, &service, command);

    let sent = stub.faceted_filters.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].author, "Orwell");
    assert_eq!(sent[0].title, "");
    assert_eq!(sent[0].genre, "");
    assert_eq!(sent[0].isbn, "");
    assert_eq!(sent[0].publisher, "");

    // Empty-but-valid: the backend was consulted and answered, unlike the
    // blank-semantic short circuit.
    assert!(state.session.has_results);
    assert!(state.session.results.is_empty());
}

#[test]
fn suggestions_load_after_visible_loading_state() {
    let stub = Arc::new(StubCatalog {
        suggestions_response: Ok(vec![
            book("s1", "One", 0.3),
            book("s2", "Two", 0.2),
            book("s3", "Three", 0.1),
        ]),
        ..StubCatalog::new()
    });
    let service = FetchService::new(stub.clone());
    let mut state = AppState::new("a@b.com".to_string());

    let command = state.update(Message::RequestSuggestions);

    // Visible with nothing in it: the loading condition.
    assert!(state.is_visible(Surface::Suggestions));
    assert!(state.suggestions.phase.is_loading());

    dispatch(&mut state, &service, command);

    assert_eq!(state.suggestions.phase.items().len(), 3);
    assert_eq!(stub.suggestion_emails.lock().unwrap().as_slice(), ["a@b.com"]);
}

#[test]
fn failed_read_write_never_disturbs_the_detail_view() {
    let stub = Arc::new(StubCatalog {
        semantic_response: Ok(vec![book("b1", "1984", 0.91)]),
        read_response: Err(ApiError::Status { code: 500 }),
        ..StubCatalog::new()
    });
    let service = FetchService::new(stub.clone());
    let history = HistoryService::new(stub.clone());
    let mut state = AppState::new("a@b.com".to_string());

    state.update(Message::OpenSearch);
    state.update(Message::QueryChanged("1984".to_string()));
    let command = state.update(Message::Submit);
    dispatch(&mut state, &service, command);

    let command = state.update(Message::ChooseResult);
    let Command::RecordRead(book_id) = command else {
        panic!("expected a read-history write, got {command:?}");
    };
    history.record_read(&state.email, &book_id).join().unwrap();

    // Exactly one attempt, no retry, and the failure is invisible: the
    // detail stays open and no alert appears.
    assert_eq!(
        stub.read_calls.lock().unwrap().as_slice(),
        [("a@b.com".to_string(), "b1".to_string())]
    );
    assert!(state.is_visible(Surface::Detail));
    assert!(!state.is_visible(Surface::Search));
    assert_eq!(
        state.detail.selected.as_ref().map(|b| b.id.as_str()),
        Some("b1")
    );
    assert!(state.alert.is_none());
}

#[test]
fn popular_fetch_feeds_the_dashboard() {
    let stub = Arc::new(StubCatalog {
        popular_response: Ok(vec![book("p1", "Most searched", 0.0)]),
        ..StubCatalog::new()
    });
    let service = FetchService::new(stub.clone());
    let mut state = AppState::new("a@b.com".to_string());
    state.dashboard.is_loading = true;

    dispatch(
        &mut state,
        &service,
        Command::Fetch(crate::interactive::domain::models::FetchKind::Popular),
    );

    assert!(!state.dashboard.is_loading);
    assert_eq!(state.dashboard.popular.len(), 1);
    assert_eq!(state.dashboard.popular[0].title, "Most searched");
}

#[test]
fn search_failure_leaves_an_interactive_session() {
    let stub = Arc::new(StubCatalog {
        semantic_response: Err(ApiError::Network("connection refused".to_string())),
        ..StubCatalog::new()
    });
    let service = FetchService::new(stub.clone());
    let mut state = AppState::new("a@b.com".to_string());

    state.update(Message::OpenSearch);
    state.update(Message::QueryChanged("1984".to_string()));
    let command = state.update(Message::Submit);
    dispatch(&mut state, &service, command);

    assert!(state.alert.is_some());
    state.update(Message::DismissAlert);

    // The controller is back in an interactive state: the next submit
    // dispatches normally.
    let command = state.update(Message::Submit);
    assert!(matches!(command, Command::Fetch(_)));
}
