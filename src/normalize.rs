use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

const HONORIFICS: [&str; 4] = ["dr", "mr", "mrs", "ms"];

/// Reduce a title to its comparison form: lowercase, no diacritics, no punctuation,
/// single spaces, honorific tokens (`dr`, `mr`, `mrs`, `ms`) dropped.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped: String = lowered
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();
    stripped
        .split_whitespace()
        .filter(|w| !HONORIFICS.contains(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split an already-normalized title into its words.
pub fn words(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_punctuation_and_spacing() {
        assert_eq!(normalize("  The  Tell-Tale   Heart! "), "the tell tale heart");
        assert_eq!(normalize("Salem's Lot"), "salem s lot");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Drácula"), "dracula");
        assert_eq!(normalize("Cemitério Maldito"), "cemiterio maldito");
        assert_eq!(normalize("À Espera de um Milagre"), "a espera de um milagre");
    }

    #[test]
    fn drops_standalone_honorifics_only() {
        assert_eq!(
            normalize("The Strange Case of Dr. Jekyll and Mr. Hyde"),
            "the strange case of jekyll and hyde"
        );
        assert_eq!(normalize("Dracula"), "dracula");
        assert_eq!(normalize("Mrs"), "");
        assert_eq!(normalize("Drums of Msumbi"), "drums of msumbi");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("—?!"), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "The Shining",
            "Frankenstein; or, The Modern Prometheus",
            "Herbert West–Reanimator",
            "Dr Jekyll and Mr Hyde",
            "It: A Coisa",
            "  ÉTÉ   d'Ōsaka ",
            "İstanbul Ghost Stories",
            "mr. dr. ms. mrs.",
            "snake_case_title",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn words_splits_normalized_form() {
        assert_eq!(words("the dunwich horror"), vec!["the", "dunwich", "horror"]);
        assert!(words("").is_empty());
    }
}
