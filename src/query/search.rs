use crate::core::Item;
use caseless::default_case_fold_str;

/// Case-insensitive substring test. An empty needle matches everything.
///
/// Non-ASCII input is compared under full Unicode case folding, so final
/// sigma matches any sigma and "ß" matches "ss".
#[inline]
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if text.is_ascii() && needle.is_ascii() {
        return text
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }
    default_case_fold_str(text).contains(&default_case_fold_str(needle))
}

/// Does `query` appear in the item's name or description?
#[inline]
pub fn item_matches(item: &Item, query: &str) -> bool {
    contains_ignore_case(&item.name, query) || contains_ignore_case(&item.description, query)
}
