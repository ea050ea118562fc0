//! Character-indexed string slicing
//!
//! Caret and selection positions reported by the host count characters, not
//! bytes. These helpers convert them without splitting a multi-byte character.

/// Byte offset of the `chars`-th character, clamped to the end of `s`.
///
/// # Examples
/// ```
/// # use description_editor::utils::string_utils::char_byte_offset;
/// assert_eq!(char_byte_offset("héllo", 2), 3);
/// assert_eq!(char_byte_offset("hi", 10), 2);
/// ```
#[inline]
#[must_use]
pub fn char_byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

/// Slice `length` characters of `s` starting at character `start`.
///
/// Ranges past the end are clamped, so this never panics.
///
/// # Examples
/// ```
/// # use description_editor::utils::string_utils::slice_chars;
/// assert_eq!(slice_chars("⠀über", 1, 3), "übe");
/// assert_eq!(slice_chars("abc", 2, 100), "c");
/// assert_eq!(slice_chars("abc", 5, 1), "");
/// ```
#[must_use]
pub fn slice_chars(s: &str, start: usize, length: usize) -> &str {
    let from = char_byte_offset(s, start);
    let to = char_byte_offset(s, start.saturating_add(length));
    &s[from..to]
}
