use tictactoe_engine::tictactoe::{Board, Cell, PlayerNames, Scoreboard};

pub fn render_board(board: &Board) -> String {
    let edge = board.edge();
    let mut out = String::from("   ");
    for col in 1..=edge {
        out.push_str(&format!(" {} ", col));
        if col < edge {
            out.push(' ');
        }
    }
    out.push('\n');

    let separator = vec!["---"; edge].join("+");
    for row in 0..edge {
        out.push_str(&format!("{:>2} ", row + 1));
        let cells: Vec<String> = (0..edge)
            .map(|col| {
                let symbol = match board.get(row * edge + col) {
                    Some(Cell::Marked(mark)) => mark.to_string(),
                    _ => ".".to_string(),
                };
                format!(" {} ", symbol)
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row + 1 < edge {
            out.push_str("   ");
            out.push_str(&separator);
            out.push('\n');
        }
    }
    out
}

pub fn render_scoreboard(scores: &Scoreboard, names: &PlayerNames) -> String {
    format!(
        "{} (X): {} | {} (O): {} | Draws: {}",
        names.x, scores.x_wins, names.o, scores.o_wins, scores.draws
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::tictactoe::GridSize;

    #[test]
    fn test_render_three_by_three() {
        let board = Board::from_layout(GridSize::Three, "X.O .X. ..O").unwrap();
        let expected = "    1   2   3 \n 1  X | . | O \n   ---+---+---\n 2  . | X | . \n   ---+---+---\n 3  . | . | O \n";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_render_has_one_line_per_row_plus_separators() {
        let board = Board::new(GridSize::Five);
        assert_eq!(render_board(&board).lines().count(), 1 + 5 + 4);
    }

    #[test]
    fn test_render_scoreboard() {
        let scores = Scoreboard { x_wins: 2, o_wins: 1, draws: 3 };
        let names = PlayerNames::default();
        assert_eq!(
            render_scoreboard(&scores, &names),
            "Player 1 (X): 2 | Player 2 (O): 1 | Draws: 3"
        );
    }
}
