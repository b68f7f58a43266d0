use crate::canvas::Canvas;

/// An immutable copy of the canvas, dimensions included.
#[derive(Clone, PartialEq)]
pub struct Snapshot {
    canvas: Canvas,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("size", &self.canvas.size())
            .finish()
    }
}

impl Snapshot {
    pub fn capture(canvas: &Canvas) -> Self {
        Self {
            canvas: canvas.clone(),
        }
    }

    pub fn size(&self) -> [usize; 2] {
        self.canvas.size()
    }

    pub fn as_canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Replaces the whole canvas, size included, with the captured content.
    pub fn restore(self, canvas: &mut Canvas) {
        *canvas = self.canvas;
    }
}

/// Stack of snapshots taken before each undoable operation.
///
/// There is no redo: popping is permanent. The history is unbounded unless a
/// limit is set with [`UndoHistory::with_limit`], in which case the oldest
/// snapshot is evicted once the limit is exceeded.
#[derive(Debug, Default)]
pub struct UndoHistory {
    /// Oldest first, most recent last.
    undo_stack: Vec<Snapshot>,
    limit: Option<usize>,
}

impl UndoHistory {
    /// Creates an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that keeps at most `limit` snapshots.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Deep-copies the canvas and appends it.
    pub fn push_snapshot(&mut self, canvas: &Canvas) {
        self.undo_stack.push(Snapshot::capture(canvas));
        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
                log::debug!("Evicted {} old undo snapshot(s)", excess);
            }
        }
    }

    /// Removes and returns the most recent snapshot, or `None` when empty.
    pub fn pop_snapshot(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop()
    }

    /// Restores the most recent snapshot into `canvas`. Returns `false` and
    /// leaves the canvas untouched when the history is empty.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        match self.pop_snapshot() {
            Some(snapshot) => {
                snapshot.restore(canvas);
                true
            }
            None => false,
        }
    }

    /// Returns true if there are snapshots that can be restored
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
