//! Helpers for building HTML `class` attribute values.

/// Join class names into a single `class` attribute value.
///
/// Each part is trimmed and empty parts (including `None`) are dropped, so
/// callers can pass optional, caller-supplied class names without checking
/// them first.
pub fn combine_class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
