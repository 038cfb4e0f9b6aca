/// Size of the featured block in the athlete leaderboard.
pub const DEFAULT_FEATURED: usize = 5;

/// An ordered table split into a bounded prefix and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub featured: Vec<T>,
    pub remaining: Vec<T>,
}

impl<T> Partitioned<T> {
    /// Joins both halves back into the original order.
    pub fn into_rows(self) -> Vec<T> {
        let mut rows = self.featured;
        rows.extend(self.remaining);
        rows
    }
}

/// Splits `rows` at index `n`; a short table leaves `remaining` empty and
/// `n == 0` leaves `featured` empty.
pub fn partition<T>(mut rows: Vec<T>, n: usize) -> Partitioned<T> {
    let remaining = rows.split_off(n.min(rows.len()));
    Partitioned {
        featured: rows,
        remaining,
    }
}
