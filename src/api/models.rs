use serde::{Deserialize, Serialize};

/// A catalog entry as returned by the search service.
///
/// Books are read-only DTOs: every result list (popular, search results,
/// suggestions, the current selection) owns its own copies and nothing
/// mutates them after deserialization. Every field is defaulted because the
/// backend does not populate all of them on every route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: Vec<String>,
    pub genre: String,
    pub isbn: String,
    pub publisher: String,
    pub date: String,
    pub summary: String,
    pub score: f64,
    pub search_times: i64,
    pub edition: i64,
}

impl Book {
    /// Authors joined for single-line display.
    pub fn author_line(&self) -> String {
        self.author.join(", ")
    }
}

/// One faceted-search request.
///
/// All five fields are always transmitted; an empty string means
/// "unconstrained". Never partially submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacetFilter {
    pub author: String,
    pub title: String,
    pub genre: String,
    pub isbn: String,
    pub publisher: String,
}

impl FacetFilter {
    pub fn is_empty(&self) -> bool {
        self.author.is_empty()
            && self.title.is_empty()
            && self.genre.is_empty()
            && self.isbn.is_empty()
            && self.publisher.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_deserializes_with_missing_fields() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "title": "1984",
            "author": ["George Orwell"],
            "score": 0.91
        }))
        .unwrap();

        assert_eq!(book.id, "b1");
        assert_eq!(book.title, "1984");
        assert_eq!(book.author_line(), "George Orwell");
        assert_eq!(book.score, 0.91);
        assert_eq!(book.genre, "");
        assert_eq!(book.search_times, 0);
        assert_eq!(book.edition, 0);
    }

    #[test]
    fn filter_emptiness() {
        let mut filter = FacetFilter::default();
        assert!(filter.is_empty());

        filter.author = "Orwell".to_string();
        assert!(!filter.is_empty());
    }
}
