//! Text normalization for answer comparison.

/// Punctuation removed (not replaced by a space) during normalization.
const STRIPPED_PUNCTUATION: [char; 5] = ['.', ',', '!', '?', ';'];

/// Canonicalize text for comparison.
///
/// Lowercases, trims, strips the punctuation characters `. , ! ? ;`,
/// and collapses whitespace runs into single spaces. Total over all
/// inputs (`normalize("")` is `""`) and idempotent.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  MILO  "), "milo");
    }

    #[test]
    fn strips_punctuation_without_inserting_spaces() {
        assert_eq!(normalize("Milo!"), "milo");
        assert_eq!(normalize("zwart, en wit."), "zwart en wit");
        assert_eq!(normalize("mevrouw;de?vries"), "mevrouwdevries");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("de   kat \t zit\n op  de mat"), "de kat zit op de mat");
    }

    #[test]
    fn keeps_other_punctuation() {
        assert_eq!(normalize("zwart-wit"), "zwart-wit");
        assert_eq!(normalize("'s ochtends"), "'s ochtends");
    }

    #[test]
    fn empty_and_punctuation_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!.,;"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn idempotent() {
        for input in ["Milo!", "  De Kat  heet   Milo. ", "zwart en wit", "", "hoi !"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn case_insensitive_equivalence() {
        assert_eq!(normalize("Milo!"), normalize("milo"));
        assert_eq!(normalize("Milo!"), "milo");
    }
}
