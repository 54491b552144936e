use crate::interactive::domain::models::FetchKind;

/// Effects the runtime performs after a state transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Hand a request to the fetch worker, tagged with the current
    /// generation.
    Fetch(FetchKind),
    /// Spawn a detached read-history write for the given book id.
    RecordRead(String),
    /// Spawn a detached search-history write for the given query.
    RecordSearch(String),
    Quit,
}
