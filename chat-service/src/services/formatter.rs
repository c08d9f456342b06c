use crate::models::book::BookRecord;
use crate::models::catalog::MAX_RECOMMENDATIONS;
use crate::utils::text::join_with_or;

pub const EMPTY_MESSAGE_PROMPT: &str = "Please ask me something about books!";
pub const HELP_MESSAGE: &str = "I can help you find books! Try:\n1. Ask about a specific book \n2. Get recommendations \n3. Search for books by title";
pub const TITLE_LOOKUP_APOLOGY: &str = "Sorry, I had trouble finding information about that book.";

const MAX_SUBJECTS: usize = 5;

/// Which lookup failed, for picking the apology text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupContext<'a> {
    Title,
    Genre(&'a str),
}

pub fn format_book_details(record: &BookRecord) -> String {
    let year = record.first_publish_year.as_deref().unwrap_or_default();

    let mut response = format!(
        "'{}' by {} ({}). ",
        record.title,
        record.authors.join(", "),
        year
    );

    if !record.subjects.is_empty() {
        let subjects: Vec<&str> = record
            .subjects
            .iter()
            .take(MAX_SUBJECTS)
            .map(String::as_str)
            .collect();
        response.push_str(&format!(
            "This book is categorized as {}. ",
            subjects.join(", ")
        ));
    }

    response
}

pub fn format_recommendations(genre: &str, records: &[BookRecord]) -> String {
    if records.is_empty() {
        return format!("I couldn't find any {} books at the moment.", genre);
    }

    let entries: Vec<String> = records
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|book| format!("'{}' by {}", book.title, book.first_author()))
        .collect();

    format!(
        "Here are some popular {} books you might enjoy: {}",
        genre,
        entries.join("; ")
    )
}

pub fn format_not_found_title(title: &str) -> String {
    format!("I couldn't find detailed information about {}.", title)
}

pub fn format_catalog_error(context: LookupContext<'_>) -> String {
    match context {
        LookupContext::Title => TITLE_LOOKUP_APOLOGY.to_string(),
        LookupContext::Genre(genre) => {
            format!("Sorry, I had trouble finding {} book recommendations.", genre)
        }
    }
}

/// Clarification asked when a recommendation names none of `genres`.
pub fn format_genre_prompt(genres: &[String]) -> String {
    format!(
        "What genre of books do you enjoy? I can recommend {} books!",
        join_with_or(genres)
    )
}
