/// Drop a leading encoded quote the way WSA-style query strings expect.
///
/// `%27+...` becomes `+...` and `%27%20...` becomes `%20...`. Only the start
/// of the string is inspected; any later `%27` is left alone.
pub fn wsa_plus(encoded: &str) -> String {
    if let Some(rest) = encoded.strip_prefix("%27+") {
        return format!("+{rest}");
    }
    if encoded.starts_with("%27%20") {
        return encoded["%27".len()..].to_string();
    }
    encoded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_quote_plus_becomes_plus() {
        assert_eq!(
            wsa_plus("%27+UNION+SELECT+%40%40version%2C+NULL%23"),
            "+UNION+SELECT+%40%40version%2C+NULL%23"
        );
    }

    #[test]
    fn leading_quote_percent20_keeps_space_escape() {
        assert_eq!(wsa_plus("%27%20foo"), "%20foo");
    }

    #[test]
    fn only_the_prefix_is_rewritten() {
        assert_eq!(wsa_plus("abc%27+def"), "abc%27+def");
        assert_eq!(wsa_plus("%27+a%27+b"), "+a%27+b");
    }

    #[test]
    fn bare_quote_is_untouched() {
        assert_eq!(wsa_plus("%27abc"), "%27abc");
        assert_eq!(wsa_plus("%27"), "%27");
        assert_eq!(wsa_plus(""), "");
    }
}
