/// Maps a table's columns to positions in a prepared statement.
///
/// One slot per schema column, in schema order. `None` marks a column with no
/// position in the statement at hand; the decoder substitutes the column
/// default for such slots and the binder skips them.
///
/// The same shape serves both directions of the native API, which count
/// differently: result mappings hold 0-based result-set positions, parameter
/// mappings hold 1-based bind positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndices {
    slots: Vec<Option<usize>>,
}

impl ColumnIndices {
    pub fn new(slots: Vec<Option<usize>>) -> Self {
        Self { slots }
    }

    /// The canonical result mapping: column `i` at position `i`.
    pub fn identity(len: usize) -> Self {
        Self {
            slots: (0..len).map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The position mapped for the column at `index`, if any.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    /// Iterates the slots in schema order.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }

    /// How many columns have a position.
    pub fn present(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
