//! Fixed text layouts for the board and the statistics block.

use tictactoe_engine::{Board, Player, Position, Square, Statistics};
use tracing::instrument;

/// Draws the board with empty squares showing their cell number.
#[instrument(level = "trace", skip(board))]
pub fn render_board(board: &Board) -> String {
    let cell = |pos: Position| match board.get(pos) {
        Square::Empty => char::from(b'0' + pos.number() as u8),
        Square::Occupied(player) => player.marker(),
    };

    let mut out = String::from("\n");
    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        out.push_str("\t   |   |   \n");
        out.push_str(&format!(
            "\t {} | {} | {} \n",
            cell(cells[0]),
            cell(cells[1]),
            cell(cells[2])
        ));
        if row < 2 {
            out.push_str("\t___|___|___\n");
        }
    }
    out.push_str("\t   |   |   \n\n");
    out
}

/// Draws the cumulative statistics block.
#[instrument(level = "trace", skip(stats))]
pub fn render_stats(stats: &Statistics) -> String {
    format!(
        "\n========================================\n\
         \x20       GAME STATISTICS ({} Rounds)\n\
         ----------------------------------------\n\
         Player X (You) Wins: {}\n\
         Player O (AI) Wins:  {}\n\
         Draws:               {}\n\
         ========================================\n",
        stats.rounds_played(),
        stats.wins(Player::X),
        stats.wins(Player::O),
        stats.draws(),
    )
}
