use crate::api::{Book, FacetFilter};
use crate::interactive::domain::models::{
    FacetField, FetchKind, FetchOutcome, FetchResponse, SearchMode, SuggestionPhase,
};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

// Re-export Surface
pub use crate::interactive::domain::models::Surface;

/// The whole interactive session: dashboard, search session, suggestions,
/// selection, overlay stack, and the generation counter that invalidates
/// stale worker responses.
pub struct AppState {
    pub email: String,
    pub dashboard: DashboardState,
    pub session: SearchSessionState,
    pub suggestions: SuggestionState,
    pub detail: DetailState,
    /// Blocking alert shown above every surface until dismissed.
    pub alert: Option<String>,
    /// Bumped on mode switch, surface close, and every dispatch. A worker
    /// response whose tag no longer matches is discarded on arrival.
    pub generation: u64,
    stack: Vec<Surface>,
}

pub struct DashboardState {
    pub popular: Vec<Book>,
    pub selected_index: usize,
    pub is_loading: bool,
}

/// The search modal's state machine fields.
///
/// Invariant: once a response has been classified, at most one of
/// {searching, showing results, showing nothing} holds.
pub struct SearchSessionState {
    pub mode: SearchMode,
    pub query: String,
    pub filter: FacetFilter,
    pub is_searching: bool,
    pub has_results: bool,
    pub results: Vec<Book>,
    pub error: Option<String>,
    pub selected_index: usize,
    /// Set when the surface closes; the next open resets the session.
    /// Reopening without an intervening close preserves everything.
    pending_reset: bool,
}

impl SearchSessionState {
    fn new() -> Self {
        Self {
            mode: SearchMode::Semantic,
            query: String::new(),
            filter: FacetFilter::default(),
            is_searching: false,
            has_results: false,
            results: Vec::new(),
            error: None,
            selected_index: 0,
            pending_reset: false,
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.has_results = false;
        self.error = None;
        self.is_searching = false;
        self.selected_index = 0;
    }
}

pub struct SuggestionState {
    pub phase: SuggestionPhase,
    pub selected_index: usize,
}

pub struct DetailState {
    pub selected: Option<Book>,
}

impl AppState {
    pub fn new(email: String) -> Self {
        Self {
            email,
            dashboard: DashboardState {
                popular: Vec::new(),
                selected_index: 0,
                is_loading: false,
            },
            session: SearchSessionState::new(),
            suggestions: SuggestionState {
                phase: SuggestionPhase::Loading,
                selected_index: 0,
            },
            detail: DetailState { selected: None },
            alert: None,
            generation: 0,
            stack: Vec::new(),
        }
    }

    /// Surfaces bottom-to-top. The dashboard always sits underneath.
    pub fn surfaces(&self) -> &[Surface] {
        &self.stack
    }

    pub fn topmost(&self) -> Option<Surface> {
        self.stack.last().copied()
    }

    pub fn is_visible(&self, surface: Surface) -> bool {
        self.stack.contains(&surface)
    }

    /// Last write wins: an already-open surface moves to the top instead of
    /// appearing twice.
    fn raise(&mut self, surface: Surface) {
        self.stack.retain(|&s| s != surface);
        self.stack.push(surface);
    }

    fn drop_surface(&mut self, surface: Surface) {
        self.stack.retain(|&s| s != surface);
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            // -- dashboard -------------------------------------------------
            Message::SelectPopular(index) => {
                if index < self.dashboard.popular.len() {
                    self.dashboard.selected_index = index;
                }
                Command::None
            }
            Message::ChoosePopular => {
                let Some(book) = self
                    .dashboard
                    .popular
                    .get(self.dashboard.selected_index)
                    .cloned()
                else {
                    return Command::None;
                };
                self.open_detail(book)
            }
            Message::PopularLoaded(books) => {
                self.dashboard.popular = books;
                self.dashboard.selected_index = 0;
                self.dashboard.is_loading = false;
                Command::None
            }
            Message::PopularFailed(message) => {
                self.dashboard.is_loading = false;
                self.alert = Some(message);
                Command::None
            }

            // -- search session --------------------------------------------
            Message::OpenSearch => {
                if !self.is_visible(Surface::Search) && self.session.pending_reset {
                    self.session.reset();
                }
                self.raise(Surface::Search);
                Command::None
            }
            Message::CloseSearch => {
                // A plain close keeps query, filter, and results; only the
                // next open resets them. In-flight outcomes must not land on
                // a closed session, so the generation still advances.
                self.drop_surface(Surface::Search);
                self.session.pending_reset = true;
                self.generation += 1;
                Command::None
            }
            Message::SwitchMode(mode) => {
                self.session.mode = mode;
                self.session.clear_results();
                self.generation += 1;
                Command::None
            }
            Message::QueryChanged(query) => {
                self.session.query = query;
                Command::None
            }
            Message::FilterChanged(field, value) => {
                let filter = &mut self.session.filter;
                match field {
                    FacetField::Author => filter.author = value,
                    FacetField::Title => filter.title = value,
                    FacetField::Genre => filter.genre = value,
                    FacetField::Isbn => filter.isbn = value,
                    FacetField::Publisher => filter.publisher = value,
                }
                Command::None
            }
            Message::Submit => self.submit(),
            Message::SelectResult(index) => {
                if index < self.session.results.len() {
                    self.session.selected_index = index;
                }
                Command::None
            }
            Message::ChooseResult => {
                let Some(book) = self
                    .session
                    .results
                    .get(self.session.selected_index)
                    .cloned()
                else {
                    return Command::None;
                };
                // Selection closes the source surface and clears its list;
                // the typed query and filter survive for the next reopen.
                self.drop_surface(Surface::Search);
                self.session.pending_reset = true;
                self.session.clear_results();
                self.generation += 1;
                self.open_detail(book)
            }
            Message::SearchCompleted(results) => {
                self.session.is_searching = false;
                self.session.has_results = true;
                self.session.results = results;
                self.session.selected_index = 0;
                self.session.error = None;
                Command::None
            }
            Message::SearchFailed(message) => {
                self.session.is_searching = false;
                self.session.has_results = false;
                self.session.results.clear();
                self.session.selected_index = 0;
                self.session.error = Some(message.clone());
                self.alert = Some(message);
                Command::None
            }

            // -- suggestions -----------------------------------------------
            Message::RequestSuggestions => {
                // An empty, visible surface is the loading condition.
                self.suggestions.phase = SuggestionPhase::Loading;
                self.suggestions.selected_index = 0;
                self.raise(Surface::Suggestions);
                self.generation += 1;
                Command::Fetch(FetchKind::Suggestions(self.email.clone()))
            }
            Message::SelectSuggestion(index) => {
                if index < self.suggestions.phase.items().len() {
                    self.suggestions.selected_index = index;
                }
                Command::None
            }
            Message::ChooseSuggestion => {
                let Some(book) = self
                    .suggestions
                    .phase
                    .items()
                    .get(self.suggestions.selected_index)
                    .cloned()
                else {
                    return Command::None;
                };
                self.drop_surface(Surface::Suggestions);
                self.suggestions.phase = SuggestionPhase::Loading;
                self.suggestions.selected_index = 0;
                self.generation += 1;
                self.open_detail(book)
            }
            Message::CloseSuggestions => {
                self.drop_surface(Surface::Suggestions);
                self.suggestions.phase = SuggestionPhase::Loading;
                self.suggestions.selected_index = 0;
                self.generation += 1;
                Command::None
            }
            Message::SuggestionsLoaded(items) => {
                self.suggestions.phase = if items.is_empty() {
                    SuggestionPhase::Empty
                } else {
                    SuggestionPhase::Populated(items)
                };
                self.suggestions.selected_index = 0;
                Command::None
            }
            Message::SuggestionsFailed(message) => {
                self.drop_surface(Surface::Suggestions);
                self.suggestions.phase = SuggestionPhase::Loading;
                self.suggestions.selected_index = 0;
                self.alert = Some(message);
                Command::None
            }

            // -- detail ----------------------------------------------------
            Message::CloseDetail => {
                self.drop_surface(Surface::Detail);
                self.detail.selected = None;
                Command::None
            }

            // -- overlays --------------------------------------------------
            Message::ShowHelp => {
                self.raise(Surface::Help);
                Command::None
            }
            Message::CloseHelp => {
                self.drop_surface(Surface::Help);
                Command::None
            }
            Message::DismissAlert => {
                self.alert = None;
                Command::None
            }

            Message::Quit => Command::Quit,
        }
    }

    /// Applies a worker response, discarding anything from a superseded
    /// generation. The popular list is not a session result set, so it is
    /// exempt from the check.
    pub fn apply_fetch(&mut self, response: FetchResponse) -> Command {
        let stale = response.generation != self.generation;
        match response.outcome {
            FetchOutcome::Popular(result) => match result {
                Ok(books) => self.update(Message::PopularLoaded(books)),
                Err(message) => self.update(Message::PopularFailed(message)),
            },
            _ if stale => {
                tracing::debug!(
                    generation = response.generation,
                    current = self.generation,
                    "discarding stale response"
                );
                Command::None
            }
            FetchOutcome::Semantic { query, result } => match result {
                Ok(books) => {
                    let _ = self.update(Message::SearchCompleted(books));
                    Command::RecordSearch(query)
                }
                Err(message) => self.update(Message::SearchFailed(message)),
            },
            FetchOutcome::Faceted(result) => match result {
                Ok(books) => self.update(Message::SearchCompleted(books)),
                Err(message) => self.update(Message::SearchFailed(message)),
            },
            FetchOutcome::Suggestions(result) => match result {
                Ok(items) => self.update(Message::SuggestionsLoaded(items)),
                Err(message) => self.update(Message::SuggestionsFailed(message)),
            },
        }
    }

    fn submit(&mut self) -> Command {
        // Every submit supersedes whatever is in flight, including a blank
        // one that never reaches the backend.
        self.generation += 1;
        match self.session.mode {
            SearchMode::Semantic => {
                let query = self.session.query.trim().to_string();
                if query.is_empty() {
                    // A blank submit silently clears prior results instead
                    // of erroring.
                    self.session.clear_results();
                    return Command::None;
                }
                self.session.is_searching = true;
                self.session.error = None;
                Command::Fetch(FetchKind::Semantic(query))
            }
            SearchMode::Faceted => {
                // Always dispatched, all fields empty included; the server
                // decides what "unconstrained" returns.
                self.session.is_searching = true;
                self.session.error = None;
                Command::Fetch(FetchKind::Faceted(self.session.filter.clone()))
            }
        }
    }

    fn open_detail(&mut self, book: Book) -> Command {
        let book_id = book.id.clone();
        self.detail.selected = Some(book);
        self.raise(Surface::Detail);
        Command::RecordRead(book_id)
    }
}
