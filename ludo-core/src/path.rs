use crate::board::Cell;
use crate::error::GameError;

/// The shared outer loop, in traversal order. Every color walks this same
/// table after leaving its house; the branch from the loop into a color's
/// private home lane is not modeled by separate data. The final entry is
/// doubled in the source data and is kept that way.
pub const PATH_ORDER: [Cell; 52] = [
    217, 202, 187, 172, 157, 142, 126, 125, 124, 123, 122, 121, 106, 91, 92, 93, 94, 95, 96, 82,
    67, 52, 37, 22, 7, 8, 9, 24, 39, 54, 69, 84, 100, 101, 102, 103, 104, 105, 120, 135, 134, 133,
    132, 131, 130, 144, 159, 174, 189, 204, 219, 219,
];

/// Resolve the cell reached by advancing `steps` along the path from `from`.
///
/// `Ok(None)` means `from` is not on the path at all (the caller decides how
/// to report that). Walking past the final entry is a hard boundary.
pub fn advance(from: Cell, steps: u8) -> Result<Option<Cell>, GameError> {
    let Some(at) = PATH_ORDER.iter().position(|&c| c == from) else {
        return Ok(None);
    };
    let target = at + steps as usize;
    if target >= PATH_ORDER.len() {
        return Err(GameError::OutOfRange { from, steps });
    }
    Ok(Some(PATH_ORDER[target]))
}
