use std::ops::Range;

/// Which renderer owns a run of instances.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum BatchKind {
    Shape,
    Text,
}

/// A contiguous run of instances drawn by one renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Batch {
    pub kind: BatchKind,
    pub range: Range<u32>,
}

/// Records `start..end` of `kind`, merging with the previous batch when it
/// is the same kind and the ranges touch.
pub(crate) fn extend_batches(batches: &mut Vec<Batch>, kind: BatchKind, start: u32, end: u32) {
    if start >= end {
        return;
    }
    if let Some(last) = batches.last_mut() {
        if last.kind == kind && last.range.end == start {
            last.range.end = end;
            return;
        }
    }
    batches.push(Batch { kind, range: start..end });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_same_kind_runs_merge() {
        let mut batches = Vec::new();
        extend_batches(&mut batches, BatchKind::Shape, 0, 1);
        extend_batches(&mut batches, BatchKind::Shape, 1, 2);
        extend_batches(&mut batches, BatchKind::Shape, 2, 5);
        assert_eq!(batches, vec![Batch { kind: BatchKind::Shape, range: 0..5 }]);
    }

    #[test]
    fn kind_change_opens_a_new_batch() {
        let mut batches = Vec::new();
        extend_batches(&mut batches, BatchKind::Shape, 0, 2);
        extend_batches(&mut batches, BatchKind::Text, 0, 7);
        extend_batches(&mut batches, BatchKind::Shape, 2, 3);
        assert_eq!(
            batches,
            vec![
                Batch { kind: BatchKind::Shape, range: 0..2 },
                Batch { kind: BatchKind::Text, range: 0..7 },
                Batch { kind: BatchKind::Shape, range: 2..3 },
            ]
        );
    }

    #[test]
    fn empty_runs_are_ignored() {
        let mut batches = Vec::new();
        extend_batches(&mut batches, BatchKind::Shape, 0, 1);
        // text that produced no glyphs must not split the shape run
        extend_batches(&mut batches, BatchKind::Text, 0, 0);
        extend_batches(&mut batches, BatchKind::Shape, 1, 2);
        assert_eq!(batches, vec![Batch { kind: BatchKind::Shape, range: 0..2 }]);
    }
}
