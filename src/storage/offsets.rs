//! Offset-set edits over ordered sequences.
//!
//! Offsets behave like a set: duplicates collapse and order of the input
//! does not matter. Offsets past the end are dropped.

use std::collections::BTreeSet;

fn in_range(offsets: impl IntoIterator<Item = usize>, len: usize) -> BTreeSet<usize> {
    offsets.into_iter().filter(|&offset| offset < len).collect()
}

/// Remove every element named by `offsets`. Returns how many were removed.
pub fn remove_offsets<T>(items: &mut Vec<T>, offsets: impl IntoIterator<Item = usize>) -> usize {
    let offsets = in_range(offsets, items.len());
    for &offset in offsets.iter().rev() {
        items.remove(offset);
    }
    offsets.len()
}

/// Move the elements at `from` as one block to `to`.
///
/// The block keeps its relative order and is inserted at `to` in the
/// sequence left after taking it out (clamped to that sequence's length),
/// so moving `{0}` to `2` in `[A, B, C, D]` gives `[B, C, A, D]`.
/// Returns `false` when no offset was in range.
pub fn move_offsets<T>(items: &mut Vec<T>, from: impl IntoIterator<Item = usize>, to: usize) -> bool {
    let offsets = in_range(from, items.len());
    if offsets.is_empty() {
        return false;
    }

    let mut block = Vec::with_capacity(offsets.len());
    for &offset in offsets.iter().rev() {
        block.push(items.remove(offset));
    }
    block.reverse();

    let at = to.min(items.len());
    items.splice(at..at, block);
    true
}
