use crate::game::{Board, Cell, CELLS};

/// Encode a board as the model's feature vector of length 9.
///
/// X maps to 1.0, O to -1.0, empty cells to 0.0, in board order (left to
/// right, top to bottom). The regressor expects exactly this layout.
pub fn encode_board(board: &Board) -> [f32; CELLS] {
    let mut features = [0.0f32; CELLS];
    for (index, slot) in features.iter_mut().enumerate() {
        *slot = match board.get(index) {
            Cell::X => 1.0,
            Cell::O => -1.0,
            Cell::Empty => 0.0,
        };
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty_board() {
        let features = encode_board(&Board::new());
        assert_eq!(features, [0.0; CELLS]);
    }

    #[test]
    fn test_encode_marks() {
        let mut board = Board::new();
        board.place(0, Cell::X).unwrap();
        board.place(4, Cell::O).unwrap();
        board.place(8, Cell::X).unwrap();

        let features = encode_board(&board);
        assert_eq!(
            features,
            [1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }
}
