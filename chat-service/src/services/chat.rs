use crate::models::catalog::{BookCatalog, CatalogError};
use crate::services::formatter::{
    format_book_details, format_catalog_error, format_genre_prompt, format_not_found_title,
    format_recommendations, LookupContext, EMPTY_MESSAGE_PROMPT, HELP_MESSAGE,
};
use crate::services::intent::{classify, Intent};
use tracing::{debug, warn};

/// Answers one chat message. Catalog failures become apology text; this
/// never returns an error.
pub async fn respond(
    catalog: &(dyn BookCatalog + Send + Sync),
    genres: &[String],
    message: &str,
) -> String {
    let intent = classify(message, genres);
    debug!("Classified message as {:?}", intent);

    match intent {
        Intent::Empty => EMPTY_MESSAGE_PROMPT.to_string(),
        Intent::DescribeBook { title } => describe_book(catalog, &title).await,
        Intent::RecommendGenre { genre } => recommend_genre(catalog, &genre).await,
        Intent::RecommendPrompt => format_genre_prompt(genres),
        Intent::Unrecognized => HELP_MESSAGE.to_string(),
    }
}

async fn describe_book(catalog: &(dyn BookCatalog + Send + Sync), title: &str) -> String {
    match catalog.find_by_title(title).await {
        Ok(record) => format_book_details(&record),
        Err(CatalogError::NotFound) => format_not_found_title(title),
        Err(CatalogError::Unavailable(cause)) => {
            warn!("Title lookup for '{}' failed: {}", title, cause);
            format_catalog_error(LookupContext::Title)
        }
    }
}

async fn recommend_genre(catalog: &(dyn BookCatalog + Send + Sync), genre: &str) -> String {
    match catalog.find_by_subject(genre).await {
        Ok(records) => format_recommendations(genre, &records),
        Err(CatalogError::NotFound) => format_recommendations(genre, &[]),
        Err(CatalogError::Unavailable(cause)) => {
            warn!("Subject lookup for '{}' failed: {}", genre, cause);
            format_catalog_error(LookupContext::Genre(genre))
        }
    }
}
