use log::debug;

use crate::{Coordinate, Path};

/// How a [PathFinder](crate::PathFinder) reuses cached paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Only the oldest cached path is consulted. If it does not contain both endpoints the query
    /// is searched from scratch, even when a later entry would have contained them. If the start
    /// comes after the end in that path, the (empty) slice between them is returned.
    #[default]
    Compatible,
    /// Every cached path is consulted in insertion order, and only an entry in which the start
    /// precedes or equals the end counts as a hit.
    Scan,
}

/// Append-only list of the paths a [PathFinder](crate::PathFinder) has returned.
#[derive(Clone, Debug, Default)]
pub struct PathCache {
    paths: Vec<Path>,
}

impl PathCache {
    pub fn new() -> PathCache {
        PathCache::default()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The cached paths, oldest first.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn lookup(&self, mode: CacheMode, start: &Coordinate, end: &Coordinate) -> Option<Path> {
        match mode {
            CacheMode::Compatible => self.lookup_first(start, end),
            CacheMode::Scan => self.lookup_any(start, end),
        }
    }

    /// Slice of the oldest entry from `start` to `end`, inclusive. Empty if `end` comes first.
    pub fn lookup_first(&self, start: &Coordinate, end: &Coordinate) -> Option<Path> {
        let path = self.paths.first()?;
        let (start_ix, end_ix) = endpoint_indices(path, start, end)?;
        debug!("Existing path found for {:?} -> {:?}", start, end);
        if start_ix > end_ix {
            Some(Vec::new())
        } else {
            Some(path[start_ix..=end_ix].to_vec())
        }
    }

    /// Slice of the oldest entry that visits `start` no later than `end`.
    pub fn lookup_any(&self, start: &Coordinate, end: &Coordinate) -> Option<Path> {
        self.paths.iter().enumerate().find_map(|(i, path)| {
            let (start_ix, end_ix) = endpoint_indices(path, start, end)?;
            if start_ix > end_ix {
                return None;
            }
            debug!(
                "Existing path found for {:?} -> {:?} in cache entry {}",
                start, end, i
            );
            Some(path[start_ix..=end_ix].to_vec())
        })
    }
}

fn endpoint_indices(
    path: &[Coordinate],
    start: &Coordinate,
    end: &Coordinate,
) -> Option<(usize, usize)> {
    let start_ix = path.iter().position(|p| p == start)?;
    let end_ix = path.iter().position(|p| p == end)?;
    Some((start_ix, end_ix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    fn cache_of(paths: Vec<Path>) -> PathCache {
        let mut cache = PathCache::new();
        for path in paths {
            cache.push(path);
        }
        cache
    }

    fn diagonal(n: i32) -> Path {
        (0..n).map(|i| coord(i, i)).collect()
    }

    #[test]
    fn empty_cache_never_hits() {
        let cache = PathCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.lookup_first(&coord(0, 0), &coord(0, 0)), None);
        assert_eq!(cache.lookup_any(&coord(0, 0), &coord(0, 0)), None);
    }

    #[test]
    fn first_entry_slice() {
        let cache = cache_of(vec![diagonal(5)]);
        assert_eq!(
            cache.lookup_first(&coord(1, 1), &coord(3, 3)),
            Some(vec![coord(1, 1), coord(2, 2), coord(3, 3)])
        );
        assert_eq!(
            cache.lookup_first(&coord(2, 2), &coord(2, 2)),
            Some(vec![coord(2, 2)])
        );
    }

    #[test]
    fn reversed_endpoints_give_empty_slice() {
        let cache = cache_of(vec![diagonal(5)]);
        assert_eq!(cache.lookup_first(&coord(4, 4), &coord(0, 0)), Some(vec![]));
        assert_eq!(cache.lookup_any(&coord(4, 4), &coord(0, 0)), None);
    }

    #[test]
    fn later_entries_only_consulted_when_scanning() {
        let cache = cache_of(vec![diagonal(3), vec![coord(0, 5), coord(1, 5), coord(2, 5)]]);
        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.lookup(CacheMode::Compatible, &coord(0, 5), &coord(2, 5)),
            None
        );
        assert_eq!(
            cache.lookup(CacheMode::Scan, &coord(0, 5), &coord(2, 5)),
            Some(vec![coord(0, 5), coord(1, 5), coord(2, 5)])
        );
    }

    #[test]
    fn missing_endpoint_is_a_miss() {
        let cache = cache_of(vec![diagonal(3)]);
        assert_eq!(cache.lookup_first(&coord(0, 0), &coord(0, 1)), None);
        assert_eq!(cache.lookup_first(&coord(0, 1), &coord(0, 0)), None);
    }
}
