use std::ops::Range;

/// A SELECT keyword found in the token stream: the unit of evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectSite {
    pub position: usize,
    pub depth: usize,
}

/// Half-open token range `[start, stop)` belonging to one clause, scoped to
/// the depth of the SELECT that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseSpan {
    start: usize,
    stop: usize,
    depth: usize,
}

impl ClauseSpan {
    pub fn new(start: usize, stop: usize, depth: usize) -> Self {
        Self {
            start,
            stop: stop.max(start),
            depth,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn stop(&self) -> usize {
        self.stop
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.stop
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }
}
