/// A path segment that addresses a single entity either by primary key
/// or by slug. Which backing column each variant queries is decided by
/// the resource's own column mapping; the classification rule lives
/// here so GetByIdent and Delete share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ident {
    Id(i64),
    Slug(String),
}

impl Ident {
    /// Segments shaped like the native id format resolve to the
    /// primary key; everything else is treated as a slug.
    pub fn resolve(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(id) => Ident::Id(id),
            Err(_) => Ident::Slug(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_segment_is_primary_key() {
        assert_eq!(Ident::resolve("42"), Ident::Id(42));
        assert_eq!(Ident::resolve("0"), Ident::Id(0));
    }

    #[test]
    fn test_non_numeric_segment_is_slug() {
        assert_eq!(Ident::resolve("pop"), Ident::Slug("pop".into()));
        assert_eq!(
            Ident::resolve("synth-pop"),
            Ident::Slug("synth-pop".into())
        );
        // mixed content does not parse as an id
        assert_eq!(Ident::resolve("12b"), Ident::Slug("12b".into()));
    }
}
