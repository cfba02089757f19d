use burn::prelude::*;
use burn::tensor::TensorData;

use crate::game::{GameState, EDGE, NUM_CELLS};

/// Number of feature planes per position.
pub const PLANES: usize = 4;

/// Length of one flat encoding.
pub const ENCODED_LEN: usize = PLANES * NUM_CELLS;

/// Encode a game state as a tensor of shape [4, 8, 8] (player-relative).
///
/// Channel 0: Current player's discs
/// Channel 1: Opponent's discs
/// Channel 2: 1.0 at the last placed disc (all zero before the first move)
/// Channel 3: all 1.0 when the disc count is even, else all 0.0
///
/// Rows are presented bottom-up: tensor row `r` is board row `7 - r`.
pub fn encode_state<B: Backend>(state: &GameState, device: &B::Device) -> Tensor<B, 3> {
    let data = encode_state_flat(state);
    Tensor::<B, 1>::from_data(TensorData::from(data.as_slice()), device).reshape([
        PLANES, EDGE, EDGE,
    ])
}

/// Encode multiple game states as a batched tensor of shape [batch, 4, 8, 8].
pub fn encode_states_batch<B: Backend>(states: &[GameState], device: &B::Device) -> Tensor<B, 4> {
    let batch_size = states.len();
    let mut flat = Vec::with_capacity(batch_size * ENCODED_LEN);
    for state in states {
        flat.extend_from_slice(&encode_state_flat(state));
    }
    Tensor::<B, 1>::from_data(TensorData::from(flat.as_slice()), device).reshape([
        batch_size, PLANES, EDGE, EDGE,
    ])
}

/// Offset of board cell `(row, col)` inside `plane` of a flat encoding.
fn offset(plane: usize, row: usize, col: usize) -> usize {
    plane * NUM_CELLS + (EDGE - 1 - row) * EDGE + col
}

/// Produce the flat [256] f32 array for a single state encoding.
pub fn encode_state_flat(state: &GameState) -> [f32; ENCODED_LEN] {
    let mut data = [0.0f32; ENCODED_LEN];
    let board = state.board();
    let current_cell = state.current_player().to_cell();
    let opponent_cell = state.current_player().other().to_cell();

    for row in 0..EDGE {
        for col in 0..EDGE {
            let cell = board.get_at(row, col);
            if cell == current_cell {
                data[offset(0, row, col)] = 1.0;
            } else if cell == opponent_cell {
                data[offset(1, row, col)] = 1.0;
            }
        }
    }

    if let Some(last) = state.last_move() {
        data[offset(2, last / EDGE, last % EDGE)] = 1.0;
    }

    if board.disc_count() % 2 == 0 {
        data[3 * NUM_CELLS..].fill(1.0);
    }

    data
}
