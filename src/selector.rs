use tracing::trace;

use crate::board::Board;
use crate::types::{Player, Position};

/// Picks a move for `player` with a two-step greedy heuristic:
/// minimize the opponent's mobility after the move, then tie-break by the
/// number of stones captured immediately. Remaining ties keep the first
/// candidate in row-major order.
///
/// Returns `None` when the player has no legal move.
///
/// This looks exactly one reply ahead and only at the opponent's move
/// count; it is a cheap "deny options" heuristic, not a minimax search.
pub fn select_move(board: &Board, player: Player) -> Option<Position> {
    let candidates = board.legal_moves(player);
    if candidates.is_empty() {
        return None;
    }

    let mut best_move = None;
    let mut min_opponent_mobility = usize::MAX;
    let mut best_flip_count = 0;

    for candidate in &candidates {
        let hypothetical = board.apply(candidate.pos, player, &candidate.flips);
        let opponent_mobility = hypothetical.legal_moves(player.opponent()).len();

        trace!(
            row = candidate.pos.row,
            col = candidate.pos.col,
            flips = candidate.flips.len(),
            opponent_mobility,
            "evaluated candidate"
        );

        // Strict inequalities on both criteria keep earlier candidates on ties.
        if opponent_mobility < min_opponent_mobility {
            best_move = Some(candidate.pos);
            min_opponent_mobility = opponent_mobility;
            best_flip_count = candidate.flips.len();
        } else if opponent_mobility == min_opponent_mobility
            && candidate.flips.len() > best_flip_count
        {
            best_move = Some(candidate.pos);
            best_flip_count = candidate.flips.len();
        }
    }

    best_move
}
