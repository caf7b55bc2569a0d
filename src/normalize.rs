use std::sync::OnceLock;

use regex::Regex;

/// Russian alphabet, including `ё`/`Ё`.
const CYRILLIC_RUN: &str = "[а-яА-ЯёЁ]+";

fn cyrillic_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CYRILLIC_RUN).expect("static regex is valid"))
}

/// Keeps only the runs of Cyrillic letters in `text`, joined by single spaces and lowercased.
/// Digits, punctuation and Latin text are dropped.
pub fn normalize(text: &str) -> String {
    cyrillic_run()
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Joins normalized page texts into the corpus, keeping their order.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_latin_digits_and_punctuation() {
        assert_eq!(normalize("Привет, мир! 123 Hello"), "привет мир");
    }

    #[test]
    fn no_cyrillic_is_empty() {
        assert_eq!(normalize("Hello, world! 42"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn keeps_yo() {
        assert_eq!(normalize("ЁЖИК и ёлка"), "ёжик и ёлка");
    }

    #[test]
    fn collapses_whitespace_between_runs() {
        assert_eq!(normalize("  один\n\tдва -- три...  "), "один два три");
    }

    #[test]
    fn splits_runs_on_non_cyrillic() {
        assert_eq!(normalize("пол-литра"), "пол литра");
        assert_eq!(normalize("абвXгде"), "абв где");
    }

    #[test]
    fn is_idempotent() {
        let inputs = ["Привет, мир! 123 Hello", "ЁЖИК и ёлка", "no cyrillic", "Тест\nтЕсТ"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn join_pages_keeps_order() {
        assert_eq!(join_pages(&["раз", "два", "три"]), "раз два три");
        assert_eq!(join_pages::<&str>(&[]), "");
    }
}
