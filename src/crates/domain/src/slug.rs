use unidecode::unidecode;

/// Derives a URL-safe slug from a display name.
///
/// Accents are transliterated to ASCII, letters lowercased, and any run
/// of non-alphanumeric characters collapses into a single `-`. The
/// result carries no leading or trailing separator. Pure and
/// deterministic; uniqueness is the caller's concern.
pub fn slugify(name: &str) -> String {
    let ascii = unidecode(name);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_joins_words() {
        assert_eq!(slugify("Pop"), "pop");
        assert_eq!(slugify("Synth Pop"), "synth-pop");
        assert_eq!(slugify("  Wildest   Dreams  "), "wildest-dreams");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("R&B / Soul"), "r-b-soul");
        assert_eq!(slugify("...Ready for It?"), "ready-for-it");
        assert_eq!(slugify("I Knew You Were Trouble."), "i-knew-you-were-trouble");
    }

    #[test]
    fn test_transliterates_accents() {
        assert_eq!(slugify("Beyoncé"), "beyonce");
        assert_eq!(slugify("Sigur Rós"), "sigur-ros");
    }

    #[test]
    fn test_deterministic() {
        let name = "Shake It Off (Taylor's Version)";
        assert_eq!(slugify(name), slugify(name));
        assert_eq!(slugify(name), "shake-it-off-taylor-s-version");
    }

    #[test]
    fn test_degenerate_names() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("1989"), "1989");
    }
}
