use std::ops::Range;

/// Split rows `0..rows` into `parts` contiguous bands of `rows / parts` rows;
/// the last band takes the remainder. Bands may be empty when `rows < parts`.
pub fn partition_rows(rows: usize, parts: usize) -> Vec<Range<usize>> {
    assert!(parts > 0, "partition_rows: zero parts");
    let chunk = rows / parts;
    (0..parts)
        .map(|i| {
            let start = i * chunk;
            let end = if i + 1 == parts { rows } else { start + chunk };
            start..end
        })
        .collect()
}
