//! Save/restore stack for following offset tables.
//!
//! Containers store most sub-structures as "offset from a known base". The
//! decoder reads an offset, jumps there, reads the sub-structure, then comes
//! back to the next table entry. [`OffsetStack`] keeps the return positions
//! explicitly so sibling entries stay flat loops instead of recursion.

use std::ops::{Deref, DerefMut};

use crate::Result;
use crate::stream::StreamCursor;

/// A [`StreamCursor`] plus a LIFO stack of saved positions.
///
/// Derefs to the wrapped cursor so reads can be issued directly on the stack.
#[derive(Debug)]
pub struct OffsetStack<'c, 'a> {
    cursor: &'c mut StreamCursor<'a>,
    saved: Vec<usize>,
}

impl<'c, 'a> OffsetStack<'c, 'a> {
    pub fn new(cursor: &'c mut StreamCursor<'a>) -> Self {
        Self {
            cursor,
            saved: Vec::new(),
        }
    }

    /// Remember the current position, then seek to `position`.
    pub fn push_and_seek(&mut self, position: usize) {
        self.saved.push(self.cursor.tell());
        self.cursor.seek(position);
    }

    /// Seek back to the most recently saved position and forget it.
    ///
    /// Returns the restored position, or [`None`] if nothing was saved.
    pub fn pop(&mut self) -> Option<usize> {
        let position = self.saved.pop()?;
        self.cursor.seek(position);
        Some(position)
    }

    /// Number of positions currently saved.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Run `f` at `position`, then return to where the cursor was.
    ///
    /// The matching pop happens whether `f` succeeds or fails.
    pub fn scoped<T, F>(&mut self, position: usize, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.push_and_seek(position);
        let result = f(self);
        self.pop();
        result
    }
}

impl<'a> Deref for OffsetStack<'_, 'a> {
    type Target = StreamCursor<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.cursor
    }
}

impl DerefMut for OffsetStack<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cursor
    }
}
