use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use super::encode::SpaceMode;

/// Decode a query component.
///
/// Malformed escapes (a `%` not followed by two hex digits) are copied
/// through untouched rather than rejected. Byte sequences that are not valid
/// UTF-8 after decoding become U+FFFD. In [`SpaceMode::Plus`] every literal
/// `+` is read as a space before escapes are resolved, so `%2B` still yields
/// `+`.
pub fn decode(encoded: &str, space: SpaceMode) -> String {
    let input: Cow<'_, str> = match space {
        SpaceMode::Plus => Cow::Owned(encoded.replace('+', " ")),
        SpaceMode::Percent20 => Cow::Borrowed(encoded),
    };
    percent_decode_str(&input).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encode::{SafeSet, encode};

    #[test]
    fn recovers_sql_payload() {
        assert_eq!(
            decode("%27+UNION+SELECT+@@version,+NULL%23", SpaceMode::Plus),
            "' UNION SELECT @@version, NULL#"
        );
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(decode("%2c%2C", SpaceMode::Plus), ",,");
    }

    #[test]
    fn plus_is_literal_without_plus_mode() {
        assert_eq!(decode("a+b%20c", SpaceMode::Percent20), "a+b c");
        assert_eq!(decode("a+b%20c", SpaceMode::Plus), "a b c");
    }

    #[test]
    fn encoded_plus_stays_plus() {
        assert_eq!(decode("1%2B1", SpaceMode::Plus), "1+1");
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(decode("100%", SpaceMode::Plus), "100%");
        assert_eq!(decode("%4", SpaceMode::Plus), "%4");
        assert_eq!(decode("%zz%41", SpaceMode::Plus), "%zzA");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode("a%FFb", SpaceMode::Plus), "a\u{FFFD}b");
    }

    #[test]
    fn empty_input_decodes_to_empty() {
        assert_eq!(decode("", SpaceMode::Plus), "");
        assert_eq!(decode("", SpaceMode::Percent20), "");
    }

    #[test]
    fn round_trips_under_matching_modes() {
        let samples = [
            "' UNION SELECT @@version, NULL#",
            "a+b=c&d",
            "100% sure?",
            "path/to:thing (x)",
            "",
        ];
        for mode in [SpaceMode::Plus, SpaceMode::Percent20] {
            for safe in [SafeSet::empty(), SafeSet::pretty()] {
                for s in samples {
                    assert_eq!(decode(&encode(s, mode, &safe), mode), s, "{s:?} {mode:?}");
                }
            }
        }
    }
}
