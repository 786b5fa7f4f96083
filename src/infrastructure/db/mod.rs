pub mod memory;
pub mod pool;
pub mod seed;

/// `ILIKE` pattern matching `term` anywhere, with wildcards taken literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn wraps_term_in_wildcards() {
        assert_eq!(contains_pattern("Han"), "%Han%");
    }

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }
}
