//! Lookup-key normalization for user-supplied names

/// Lowercase and drop everything outside `[a-z0-9]`
///
/// "Mr. Mime", "mr-mime" and "MRMIME" all become "mrmime". Accented letters
/// are folded first so "Flabébé" matches "flabebe".
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .map(fold_accent)
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'é' | 'è' | 'ê' | 'É' => 'e',
        'á' | 'à' | 'â' => 'a',
        'ó' | 'ô' => 'o',
        'í' => 'i',
        'ú' => 'u',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_case() {
        assert_eq!(normalize_name("Mr. Mime"), "mrmime");
        assert_eq!(normalize_name("mr-mime"), "mrmime");
        assert_eq!(normalize_name("MRMIME"), "mrmime");
        assert_eq!(normalize_name("  Porygon-Z "), "porygonz");
    }

    #[test]
    fn test_accents_fold() {
        assert_eq!(normalize_name("Flabébé"), "flabebe");
        assert_eq!(normalize_name("Pokémon"), "pokemon");
    }

    #[test]
    fn test_idempotent() {
        for name in ["Mr. Mime", "Type: Null", "Farfetch'd", "Ho-Oh"] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn test_nothing_left() {
        assert_eq!(normalize_name("?!"), "");
    }
}
