/// Case-insensitive substring test used by every list filter in the dashboard.
///
/// The needle is used as typed; only an empty one matches everything.
pub fn matches_any(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_but_keeps_spaces() {
        assert!(matches_any("ENG", &["John Doe", "Engineering"]));
        assert!(matches_any("", &["anything"]));
        assert!(!matches_any(" doe ", &["John Doe"]));
        assert!(matches_any("n d", &["John Doe"]));
        assert!(!matches_any("finance", &["John Doe", "Engineering"]));
    }

    #[test]
    fn handles_accented_text() {
        assert!(matches_any("análisis", &["Análisis_enero.xlsx"]));
        assert!(matches_any("ANÁLISIS", &["Análisis_enero.xlsx"]));
    }
}
