//! Path segment normalization.

/// Restores `%2F` (either case) to `/` and replaces spaces with `%20`.
///
/// Not a general percent-encoder: reserved characters pass through unchanged.
pub fn encode_path(path: &str) -> String {
    path.replace("%2F", "/")
        .replace("%2f", "/")
        .replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_slash_either_case() {
        assert_eq!(encode_path("a%2Fb%2fc"), "a/b/c");
    }

    #[test]
    fn spaces() {
        assert_eq!(encode_path("my file name.txt"), "my%20file%20name.txt");
    }

    #[test]
    fn existing_escapes_untouched() {
        assert_eq!(encode_path("already%20escaped%3F"), "already%20escaped%3F");
    }

    #[test]
    fn empty() {
        assert_eq!(encode_path(""), "");
    }
}
