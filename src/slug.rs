//! URL slugs for categories, products and blog posts.

/// Whitespace as browsers match it with `\s`: Unicode `White_Space` plus the
/// byte order mark, minus next-line (U+0085).
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Lowercases `text`, drops everything except ASCII letters, digits,
/// whitespace and `-`, trims, then turns each whitespace run into `-` and
/// collapses repeated hyphens.
///
/// Leading or trailing hyphens that were in the input are kept.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_space(c) || c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    for c in kept.trim_matches(is_space).chars() {
        let c = if is_space(c) { '-' } else { c };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_spaces() {
        assert_eq!(slugify("  Adhesive Solutions!! "), "adhesive-solutions");
        assert_eq!(slugify("Tile & Stone Care"), "tile-stone-care");
    }

    #[test]
    fn collapses_hyphen_runs() {
        assert_eq!(slugify("water -- proofing"), "water-proofing");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(slugify("Café Crème 2"), "caf-crme-2");
    }

    #[test]
    fn keeps_edge_hyphens() {
        assert_eq!(slugify("-sealants-"), "-sealants-");
    }

    #[test]
    fn is_idempotent() {
        for input in ["Concrete Admixtures", "  a  b  ", "x--y", "Grout #1"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn byte_order_mark_separates_words() {
        assert_eq!(slugify("a\u{feff}b"), "a-b");
        assert_eq!(slugify("\u{feff}primer\u{feff}"), "primer");
        assert_eq!(slugify("a\u{85}b"), "ab");
        assert_eq!(slugify("a\u{a0}b\u{3000}c"), "a-b-c");
    }
}
