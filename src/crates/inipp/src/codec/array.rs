//! Delimited array values

/// Split a stored value into its elements, verbatim
///
/// Elements are not trimmed. Empty input yields no elements at all rather
/// than a single empty one.
pub fn split_array(text: &str, separator: char) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split(separator).map(str::to_string).collect()
}

/// Join elements with a separator, verbatim
pub fn join_array<S: AsRef<str>>(values: &[S], separator: char) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}
