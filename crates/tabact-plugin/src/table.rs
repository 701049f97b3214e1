//! Host table binding.
//!
//! The controller never owns row data. It reads the current selection and
//! asks the host to change it through `TableAdapter`, and it is driven by
//! `TableEvent`s the host forwards.

use std::collections::BTreeSet;

/// What the controller needs from the host table.
pub trait TableAdapter {
    /// Row data handed to predicates and actions.
    type Row: Clone;

    /// Key used by the host to address a row, e.g. a row index.
    type RowId;

    /// Stable id of the table, used to derive element ids.
    fn table_id(&self) -> &str;

    /// Data of the currently selected rows, in table order.
    fn selected_rows(&self) -> Vec<Self::Row>;

    /// Add a row to the selection. Returns false if `id` is not a data row.
    fn select_row(&mut self, id: &Self::RowId) -> bool;

    fn deselect_all(&mut self);
}

/// Table events the host forwards to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<Id> {
    /// A row was added to the selection.
    Selected,
    /// A row was removed from the selection.
    Deselected,
    /// Secondary click on a table cell, at page coordinates.
    RightClick { row: Id, x: f32, y: f32 },
    /// Primary click anywhere outside an open context menu.
    ClickOutside,
}

/// Table kept entirely in memory, addressed by row index.
#[derive(Debug, Clone)]
pub struct MemoryTable<R> {
    id: String,
    rows: Vec<R>,
    selected: BTreeSet<usize>,
}

impl<R> MemoryTable<R> {
    pub fn new(id: impl Into<String>, rows: Vec<R>) -> Self {
        Self {
            id: id.into(),
            rows,
            selected: BTreeSet::new(),
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Select the row at `index`. Out of range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.selected.insert(index);
        true
    }

    pub fn deselect(&mut self, index: usize) -> bool {
        self.selected.remove(&index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }
}

impl<R: Clone> TableAdapter for MemoryTable<R> {
    type Row = R;
    type RowId = usize;

    fn table_id(&self) -> &str {
        &self.id
    }

    fn selected_rows(&self) -> Vec<R> {
        self.selected
            .iter()
            .filter_map(|index| self.rows.get(*index).cloned())
            .collect()
    }

    fn select_row(&mut self, id: &usize) -> bool {
        self.select(*id)
    }

    fn deselect_all(&mut self) {
        self.selected.clear();
    }
}
