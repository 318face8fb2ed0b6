use crate::board::Cell;

/// Errors surfaced by game operations.
///
/// The conditions that matter to callers are explicit variants rather than
/// silent no-ops, so tests and drivers can tell "moved" from "refused".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("piece selection {index} does not resolve for {player} ({available} pieces)")]
    InvalidSelection {
        player: &'static str,
        index: usize,
        available: usize,
    },

    #[error("piece {index} is not in its house")]
    PieceNotInHouse { index: usize },

    #[error("advancing {steps} from cell {from} runs past the end of the path")]
    OutOfRange { from: Cell, steps: u8 },
}
