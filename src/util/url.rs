/// Append `param=encoded_value` to `base`.
///
/// Uses `&` when `base` already carries a `?` anywhere, `?` otherwise.
/// Neither `base` nor `param` is validated or escaped.
pub fn build_query_url(base: &str, param: &str, encoded_value: &str) -> String {
    let joiner = if base.contains('?') { '&' } else { '?' };
    format!("{base}{joiner}{param}={encoded_value}")
}
