use std::ops::RangeInclusive;

/// Turns a pair of possibly negative, possibly out of bounds list indices into the inclusive range
/// of positions they cover in a sequence of `len` elements.
///
/// Negative indices count from the end (`-1` is the last element). Both ends are then clamped
/// into the sequence, so `0..=99` over three elements covers all three and `5..=10` covers only
/// the last one. `None` means the selection is empty: an empty sequence, or a clamped start past
/// the clamped end.
pub fn normalize(start: i64, end: i64, len: usize) -> Option<RangeInclusive<usize>> {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    if len == 0 {
        return None;
    }

    let last = len - 1;
    let start = if start < 0 { len + start } else { start }.clamp(0, last);
    let end = if end < 0 { len + end } else { end }.clamp(0, last);

    if start > end {
        return None;
    }

    Some(start as usize..=end as usize)
}
