use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical form of a client name, used for matching only (never display):
/// accents decomposed and dropped, surrounding whitespace trimmed, upper-cased.
/// Idempotent. Empty values pass through unchanged.
pub fn client_name(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let stripped: String = raw.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case_folds() {
        assert_eq!(client_name("joão"), "JOAO");
        assert_eq!(client_name("  Márcia da Conceição  "), "MARCIA DA CONCEICAO");
        assert_eq!(client_name("Ângelo Çelik"), "ANGELO CELIK");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["joão ", "MARIA", "  pédro", "Açaí & Cia LTDA", ""] {
            let once = client_name(raw);
            assert_eq!(client_name(&once), once);
        }
    }

    #[test]
    fn test_empty_passes_through() {
        assert_eq!(client_name(""), "");
    }

    #[test]
    fn test_plain_ascii_untouched_beyond_case() {
        assert_eq!(client_name("acme ltda"), "ACME LTDA");
        assert_eq!(client_name("ACME LTDA"), "ACME LTDA");
    }
}
