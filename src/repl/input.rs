//! Input tokenizer for the command loop.

/// Lowercases `text` and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_splits_and_lowercases() {
        assert_eq!(clean_input("  Hello  World  "), vec!["hello", "world"]);
        assert_eq!(clean_input("Charmander Bulbasaur PIKACHU"), vec![
            "charmander",
            "bulbasaur",
            "pikachu"
        ]);
    }

    #[test]
    fn test_clean_input_blank() {
        assert!(clean_input("").is_empty());
        assert!(clean_input(" \t\n").is_empty());
    }
}
