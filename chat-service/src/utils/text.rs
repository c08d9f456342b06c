/// Lowercases and trims a raw user message.
pub fn normalize_message(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Deletes every occurrence of each phrase, in the order given, then trims.
pub fn remove_phrases(text: &str, phrases: &[&str]) -> String {
    phrases
        .iter()
        .fold(text.to_string(), |acc, phrase| acc.replace(phrase, ""))
        .trim()
        .to_string()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Joins items as an English list: "a", "a or b", "a, b, or c".
pub fn join_with_or(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_message("  Tell Me About Dune \n"), "tell me about dune");
        assert_eq!(normalize_message("   "), "");
    }

    #[test]
    fn remove_phrases_deletes_every_occurrence() {
        let out = remove_phrases("describe describe dune what is", &["describe", "what is"]);
        assert_eq!(out, "dune");
    }

    #[test]
    fn word_count_splits_on_any_whitespace() {
        assert_eq!(word_count("dune\tbook  now"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn join_with_or_uses_oxford_comma() {
        let items: Vec<String> = ["fantasy", "mystery", "horror"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(join_with_or(&items), "fantasy, mystery, or horror");
        assert_eq!(join_with_or(&items[..2]), "fantasy or mystery");
        assert_eq!(join_with_or(&items[..1]), "fantasy");
    }
}
