use crate::api::Book;
use crate::interactive::domain::models::{FacetField, SearchMode};

/// Inputs to the session state machine.
///
/// Components translate key events into these; the runtime translates
/// current-generation worker responses into the `*Loaded`/`*Completed`/
/// `*Failed` variants via [`super::app_state::AppState::apply_fetch`].
#[derive(Clone, Debug)]
pub enum Message {
    // Dashboard
    SelectPopular(usize),
    ChoosePopular,
    PopularLoaded(Vec<Book>),
    PopularFailed(String),

    // Search session
    OpenSearch,
    CloseSearch,
    SwitchMode(SearchMode),
    QueryChanged(String),
    FilterChanged(FacetField, String),
    Submit,
    SelectResult(usize),
    ChooseResult,
    SearchCompleted(Vec<Book>),
    SearchFailed(String),

    // Suggestions
    RequestSuggestions,
    SelectSuggestion(usize),
    ChooseSuggestion,
    CloseSuggestions,
    SuggestionsLoaded(Vec<Book>),
    SuggestionsFailed(String),

    // Detail
    CloseDetail,

    // Overlays
    ShowHelp,
    CloseHelp,
    DismissAlert,

    Quit,
}
