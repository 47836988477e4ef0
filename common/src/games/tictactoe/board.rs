use super::types::{Cell, Mark, Variant};

/// Fixed-length grid of cells, indexed row-major. The length never changes
/// after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    variant: Variant,
    cells: Vec<Cell>,
}

impl Board {
    pub fn empty(variant: Variant) -> Self {
        Self {
            variant,
            cells: vec![Cell::Empty; variant.cell_count()],
        }
    }

    /// Returns `None` when `cells` does not have the variant's length.
    pub fn from_cells(variant: Variant, cells: Vec<Cell>) -> Option<Self> {
        if cells.len() != variant.cell_count() {
            return None;
        }
        Some(Self { variant, cells })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Marked(mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_variant_length() {
        assert_eq!(Board::empty(Variant::Classic3x3).cells().len(), 9);
        assert_eq!(Board::empty(Variant::Extended4x4).cells().len(), 16);
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(Board::from_cells(Variant::Classic3x3, vec![Cell::Empty; 16]).is_none());
        assert!(Board::from_cells(Variant::Extended4x4, vec![Cell::Empty; 16]).is_some());
    }

    #[test]
    fn test_board_is_full_only_when_every_cell_is_marked() {
        let mut board = Board::empty(Variant::Classic3x3);
        for index in 0..8 {
            board.place(index, if index % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(!board.is_full());
        board.place(8, Mark::X);
        assert!(board.is_full());
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        assert_eq!(Board::empty(Variant::Classic3x3).get(9), None);
    }
}
