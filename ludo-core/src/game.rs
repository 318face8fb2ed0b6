use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{self, Cell, Color, CELL_COUNT};
use crate::error::GameError;
use crate::path;

/// Turn rotation order. Distinct from the registry order below.
pub const PLAYER_ORDER: [Color; 4] = [Color::Green, Color::Red, Color::Blue, Color::Yellow];

/// Per-color starting setup: four house cells and the home lane-entry cell a
/// piece returns to when captured. Registry order: green, red, yellow, blue.
const SETUPS: [(Color, [Cell; 4], Cell); 4] = [
    (Color::Green, [33, 34, 48, 49], 92),
    (Color::Red, [42, 43, 57, 58], 24),
    (Color::Yellow, [168, 169, 183, 184], 202),
    (Color::Blue, [177, 178, 192, 193], 134),
];

const PIECES_PER_COLOR: u8 = 4;

/// One token. Positions are mutated only through [`Game`] so the capture
/// scan always sees a consistent registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    house_position: Cell,
    position: Cell,
    home: Cell,
    in_house: bool,
}

impl Piece {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// The starting cell inside this color's house area.
    pub fn house_position(&self) -> Cell {
        self.house_position
    }

    /// The lane-entry cell reached on release and after being captured.
    pub fn home(&self) -> Cell {
        self.home
    }

    pub fn in_house(&self) -> bool {
        self.in_house
    }
}

/// An opposing piece displaced by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub color: Color,
    pub from: Cell,
    pub sent_to: Cell,
}

/// Result of a path-based move that did not error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        from: Cell,
        to: Cell,
        capture: Option<Capture>,
    },
    /// The piece's current cell is not on the traversal table, so nothing
    /// moved. Pieces still in their house land here.
    NotOnPath { at: Cell },
}

/// One game session. Owns the piece registry, house counters, and turn
/// state; there is no process-global state, so sessions are independent.
pub struct Game {
    pieces: Vec<Piece>,
    house_counts: [u8; 4],
    current_player: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        let mut pieces = Vec::with_capacity(SETUPS.len() * PIECES_PER_COLOR as usize);
        for (color, houses, home) in SETUPS {
            for house in houses {
                pieces.push(Piece {
                    color,
                    house_position: house,
                    position: house,
                    home,
                    in_house: true,
                });
            }
        }
        Game {
            pieces,
            house_counts: [PIECES_PER_COLOR; 4],
            current_player: 0,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn current_player(&self) -> Color {
        PLAYER_ORDER[self.current_player]
    }

    /// Pieces of `color` still waiting in their house.
    pub fn house_count(&self, color: Color) -> u8 {
        match PLAYER_ORDER.iter().position(|&c| c == color) {
            Some(i) => self.house_counts[i],
            None => 0,
        }
    }

    /// Uniform roll in [1, 6]. A six conventionally permits releasing a
    /// house piece; enforcement is left to the caller.
    pub fn roll_dice(&mut self) -> u8 {
        let rolled = rand::thread_rng().gen_range(1..=6);
        if rolled == 6 {
            info!("{} rolled a 6: a house piece may be released", self.current_player().name());
        } else {
            info!("{} rolled a {rolled}", self.current_player().name());
        }
        rolled
    }

    /// Advance the turn to the next color in rotation. Unconditional; there
    /// is no check that the current player acted.
    pub fn next_turn(&mut self) -> Color {
        self.current_player = (self.current_player + 1) % PLAYER_ORDER.len();
        let color = self.current_player();
        info!("it is now {}'s turn", color.name());
        color
    }

    /// Unconditionally place a piece on a cell. No range validation and no
    /// capture scan; release and path moves go through [`Self::move_piece_to`].
    fn place_piece(&mut self, idx: usize, cell: Cell) {
        self.pieces[idx].position = cell;
    }

    /// Move a piece onto `target`, displacing the first other-colored
    /// occupant (registry order) back to its own home cell. Same-color
    /// occupants are never displaced, and at most one piece is.
    fn move_piece_to(&mut self, idx: usize, target: Cell) -> Option<Capture> {
        let mover_color = self.pieces[idx].color;
        let captured = self
            .pieces
            .iter()
            .position(|p| p.position == target && p.color != mover_color);
        let capture = captured.map(|hit| {
            let home = self.pieces[hit].home;
            let color = self.pieces[hit].color;
            self.place_piece(hit, home);
            info!("{} piece sent back home", color.name());
            Capture {
                color,
                from: target,
                sent_to: home,
            }
        });
        self.place_piece(idx, target);
        capture
    }

    /// Release a house piece onto its home lane-entry cell. The landing is
    /// capture-aware like any other move.
    pub fn release_from_house(&mut self, idx: usize) -> Result<Option<Capture>, GameError> {
        if !self.pieces[idx].in_house {
            warn!("release requested for piece {idx}, which is not in its house");
            return Err(GameError::PieceNotInHouse { index: idx });
        }
        let home = self.pieces[idx].home;
        let capture = self.move_piece_to(idx, home);
        self.pieces[idx].in_house = false;
        let color = self.pieces[idx].color;
        if let Some(i) = PLAYER_ORDER.iter().position(|&c| c == color) {
            self.house_counts[i] = self.house_counts[i].saturating_sub(1);
        }
        Ok(capture)
    }

    /// Walk a piece `steps` cells along the shared path.
    pub fn advance_piece(&mut self, idx: usize, steps: u8) -> Result<MoveOutcome, GameError> {
        let from = self.pieces[idx].position;
        match path::advance(from, steps)? {
            Some(to) => {
                let capture = self.move_piece_to(idx, to);
                Ok(MoveOutcome::Moved { from, to, capture })
            }
            None => {
                warn!("cell {from} is not on the path; piece {idx} did not move");
                Ok(MoveOutcome::NotOnPath { at: from })
            }
        }
    }

    /// Move the current player's `piece_index`-th piece (positional within
    /// that color's pieces, registry order) by `steps`.
    pub fn move_current(&mut self, piece_index: usize, steps: u8) -> Result<MoveOutcome, GameError> {
        let player = self.current_player();
        let owned: Vec<usize> = self
            .pieces
            .iter()
            .enumerate()
            .filter(|(_, p)| p.color == player)
            .map(|(i, _)| i)
            .collect();
        let Some(&idx) = owned.get(piece_index) else {
            return Err(GameError::InvalidSelection {
                player: player.name(),
                index: piece_index,
                available: owned.len(),
            });
        };
        self.advance_piece(idx, steps)
    }

    /// Full view for the render boundary: every cell's color plus every
    /// piece's color and position.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: (1..=CELL_COUNT).map(board::color_of).collect(),
            pieces: self
                .pieces
                .iter()
                .map(|p| PieceSnapshot {
                    color: p.color,
                    position: p.position,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub color: Color,
    pub position: Cell,
}

/// Immutable view of one fully-applied game state, indexed cell 1 first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cells: Vec<Color>,
    pub pieces: Vec<PieceSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece_index(game: &Game, color: Color, nth: usize) -> usize {
        game.pieces()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.color == color)
            .map(|(i, _)| i)
            .nth(nth)
            .unwrap()
    }

    #[test]
    fn setup_has_four_disjoint_houses_per_color() {
        let game = Game::new();
        assert_eq!(game.pieces().len(), 16);
        let mut seen = std::collections::HashSet::new();
        for (color, houses, _) in SETUPS {
            assert_eq!(houses.len(), 4);
            for h in houses {
                assert!(seen.insert(h), "house cell {h} reused by {color:?}");
            }
        }
        for color in PLAYER_ORDER {
            assert_eq!(game.house_count(color), 4);
        }
    }

    #[test]
    fn release_moves_to_home_and_decrements_counter() {
        let mut game = Game::new();
        let idx = piece_index(&game, Color::Green, 0);
        assert_eq!(game.pieces()[idx].position(), 33);

        let capture = game.release_from_house(idx).unwrap();
        assert!(capture.is_none());
        assert_eq!(game.pieces()[idx].position(), 92);
        assert!(!game.pieces()[idx].in_house());
        assert_eq!(game.house_count(Color::Green), 3);
    }

    #[test]
    fn second_release_is_refused() {
        let mut game = Game::new();
        let idx = piece_index(&game, Color::Green, 0);
        game.release_from_house(idx).unwrap();
        assert_eq!(
            game.release_from_house(idx),
            Err(GameError::PieceNotInHouse { index: idx })
        );
        // The refusal left the counter alone.
        assert_eq!(game.house_count(Color::Green), 3);
    }

    #[test]
    fn landing_on_an_opponent_captures_it() {
        let mut game = Game::new();
        let green = piece_index(&game, Color::Green, 0);
        let red = piece_index(&game, Color::Red, 0);

        // Park a red piece on the cell three steps past the green entry.
        game.place_piece(red, 95);
        game.release_from_house(green).unwrap();

        let outcome = game.advance_piece(green, 3).unwrap();
        let MoveOutcome::Moved { from, to, capture } = outcome else {
            panic!("expected a move, got {outcome:?}");
        };
        assert_eq!(from, 92);
        assert_eq!(to, 95);
        assert_eq!(
            capture,
            Some(Capture {
                color: Color::Red,
                from: 95,
                sent_to: 24,
            })
        );
        assert_eq!(game.pieces()[red].position(), 24);
        assert_eq!(game.pieces()[green].position(), 95);
    }

    #[test]
    fn same_color_occupant_is_never_displaced() {
        let mut game = Game::new();
        let first = piece_index(&game, Color::Green, 0);
        let second = piece_index(&game, Color::Green, 1);

        game.place_piece(second, 95);
        game.release_from_house(first).unwrap();
        let outcome = game.advance_piece(first, 3).unwrap();

        let MoveOutcome::Moved { to, capture, .. } = outcome else {
            panic!("expected a move, got {outcome:?}");
        };
        assert_eq!(to, 95);
        assert_eq!(capture, None);
        // Both green pieces now share the cell; neither went home.
        assert_eq!(game.pieces()[second].position(), 95);
    }

    #[test]
    fn piece_off_the_path_reports_not_on_path() {
        let mut game = Game::new();
        let idx = piece_index(&game, Color::Green, 0);
        // Still in its house at cell 33, which the path table never visits.
        let outcome = game.advance_piece(idx, 4).unwrap();
        assert_eq!(outcome, MoveOutcome::NotOnPath { at: 33 });
        assert_eq!(game.pieces()[idx].position(), 33);
    }

    #[test]
    fn advancing_past_the_path_end_errors_without_moving() {
        let mut game = Game::new();
        let idx = piece_index(&game, Color::Green, 0);
        game.place_piece(idx, 204);
        assert_eq!(
            game.advance_piece(idx, 6),
            Err(GameError::OutOfRange { from: 204, steps: 6 })
        );
        assert_eq!(game.pieces()[idx].position(), 204);
    }

    #[test]
    fn turn_rotation_has_period_four() {
        let mut game = Game::new();
        let start = game.current_player();
        assert_eq!(start, Color::Green);
        assert_eq!(game.next_turn(), Color::Red);
        assert_eq!(game.next_turn(), Color::Blue);
        assert_eq!(game.next_turn(), Color::Yellow);
        assert_eq!(game.next_turn(), start);
    }

    #[test]
    fn move_current_rejects_bad_selections() {
        let mut game = Game::new();
        let err = game.move_current(9, 3).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidSelection {
                player: "green",
                index: 9,
                available: 4,
            }
        );
    }

    #[test]
    fn move_current_resolves_within_the_players_pieces() {
        let mut game = Game::new();
        let idx = piece_index(&game, Color::Green, 1);
        game.release_from_house(idx).unwrap();
        // Selection 1 is the second green piece, now sitting on cell 92.
        let outcome = game.move_current(1, 2).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: 92,
                to: 94,
                capture: None,
            }
        );
    }

    #[test]
    fn dice_rolls_stay_in_range_and_cover_all_faces() {
        let mut game = Game::new();
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let roll = game.roll_dice();
            assert!((1..=6).contains(&roll));
            seen[roll as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "faces observed: {seen:?}");
    }

    #[test]
    fn snapshot_covers_every_cell_and_piece() {
        let game = Game::new();
        let snap = game.snapshot();
        assert_eq!(snap.cells.len(), 225);
        assert_eq!(snap.pieces.len(), 16);
        assert_eq!(snap.cells[0], Color::Green);
        assert!(snap.pieces.iter().any(|p| p.position == 33));
    }
}
