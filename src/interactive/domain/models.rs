use crate::api::{Book, FacetFilter};

/// How search input is interpreted. Exactly one mode is active at a time;
/// switching invalidates the current result set but keeps the typed text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchMode {
    Semantic,
    Faceted,
}

impl SearchMode {
    pub fn toggled(self) -> Self {
        match self {
            SearchMode::Semantic => SearchMode::Faceted,
            SearchMode::Faceted => SearchMode::Semantic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Semantic => "Semantic",
            SearchMode::Faceted => "Faceted",
        }
    }
}

/// The five facet fields, in form order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FacetField {
    Author,
    Title,
    Genre,
    Isbn,
    Publisher,
}

impl FacetField {
    pub const ALL: [FacetField; 5] = [
        FacetField::Author,
        FacetField::Title,
        FacetField::Genre,
        FacetField::Isbn,
        FacetField::Publisher,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FacetField::Author => "Author",
            FacetField::Title => "Title",
            FacetField::Genre => "Genre",
            FacetField::Isbn => "ISBN",
            FacetField::Publisher => "Publisher",
        }
    }
}

/// One of the overlapping modal surfaces stacked over the dashboard.
/// Visibility is a z-order stack with last-write-wins semantics owned by
/// the app state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Surface {
    Search,
    Suggestions,
    Detail,
    Help,
}

/// Contents of the suggestions surface.
///
/// `Loading` doubles as the pristine state so a reopened surface always
/// starts in the loading condition; `Empty` is a completed fetch that found
/// nothing, observably distinct from a fetch still in flight.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SuggestionPhase {
    #[default]
    Loading,
    Empty,
    Populated(Vec<Book>),
}

impl SuggestionPhase {
    pub fn items(&self) -> &[Book] {
        match self {
            SuggestionPhase::Populated(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SuggestionPhase::Loading)
    }
}

/// What the fetch worker should call.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchKind {
    Popular,
    Semantic(String),
    Faceted(FacetFilter),
    Suggestions(String),
}

/// A request handed to the fetch worker, tagged with the controller
/// generation captured at dispatch time.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub generation: u64,
    pub kind: FetchKind,
}

/// The worker's answer. Applied to state only while the generation still
/// matches; otherwise discarded on arrival.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub generation: u64,
    pub outcome: FetchOutcome,
}

#[derive(Clone, Debug)]
pub enum FetchOutcome {
    Popular(Result<Vec<Book>, String>),
    Semantic {
        query: String,
        result: Result<Vec<Book>, String>,
    },
    Faceted(Result<Vec<Book>, String>),
    Suggestions(Result<Vec<Book>, String>),
}
