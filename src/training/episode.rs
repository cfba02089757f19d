use crate::ai::state_encoding::{encode_state_flat, ENCODED_LEN};
use crate::ai::Agent;
use crate::error::SelfPlayError;
use crate::game::{Action, GameOutcome, GameState, Player};
use crate::training::metrics::EpisodeResult;

/// One recorded position: encoded state, the agent's move distribution, and
/// the final outcome seen from the player to move.
#[derive(Debug, Clone)]
pub struct TrainingExample {
    pub state: [f32; ENCODED_LEN],
    pub move_probs: Vec<f32>,
    pub player: Player,
    /// +1.0 if `player` went on to win, -1.0 if they lost, 0.0 on a tie.
    pub z: f32,
}

/// Result of playing a single self-play episode.
pub struct EpisodeTrace {
    pub examples: Vec<TrainingExample>,
    pub result: EpisodeResult,
}

/// Outcome value from `player`'s perspective.
pub fn outcome_value(outcome: GameOutcome, player: Player) -> f32 {
    match outcome {
        GameOutcome::Winner(winner) if winner == player => 1.0,
        GameOutcome::Winner(_) => -1.0,
        GameOutcome::Tie => 0.0,
    }
}

/// Print the board and the side to move.
pub fn print_position(state: &GameState) {
    print!("{}", state.board());
    let score = state.score();
    println!(
        "to move: {} ({}) | B {} - W {}",
        state.current_player().name(),
        state.current_player().marker(),
        score.player1,
        score.player2
    );
    println!();
}

/// Apply `action`, mapping a rejection to a [`SelfPlayError`].
fn step(state: &mut GameState, action: Action) -> Result<(), SelfPlayError> {
    state
        .apply_move_mut(action)
        .map(|_| ())
        .map_err(|source| SelfPlayError::IllegalAction { action, source })
}

/// Play one game between two agents. `player1` plays Player1's discs.
pub fn play_game(
    player1: &mut dyn Agent,
    player2: &mut dyn Agent,
    start_player: Player,
    show: bool,
) -> Result<EpisodeResult, SelfPlayError> {
    let mut state = GameState::new(start_player);
    let mut game_length = 0;
    let mut passes = 0;

    if show {
        print_position(&state);
    }

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Player1 => &mut *player1,
            Player::Player2 => &mut *player2,
        };
        let action = agent.select_action(&state, false);
        step(&mut state, action)?;
        game_length += 1;
        if action == Action::Pass {
            passes += 1;
        }
        if show {
            print_position(&state);
        }
    }

    let outcome = state.winner().ok_or(SelfPlayError::MissingOutcome)?;
    if show {
        match outcome {
            GameOutcome::Winner(p) => println!("Game end. Winner is {}", p.name()),
            GameOutcome::Tie => println!("Game end. Tie"),
        }
    }

    Ok(EpisodeResult {
        outcome,
        game_length,
        passes,
        score: state.score(),
    })
}

/// Play one self-play episode. Agent plays both sides, and every position
/// it faced becomes a [`TrainingExample`].
pub fn play_self_play_episode(
    agent: &mut dyn Agent,
    start_player: Player,
    show: bool,
) -> Result<EpisodeTrace, SelfPlayError> {
    let mut state = GameState::new(start_player);
    let mut records: Vec<([f32; ENCODED_LEN], Vec<f32>, Player)> = Vec::new();
    let mut passes = 0;

    while !state.is_terminal() {
        let probs = agent.action_probs(&state);
        let action = agent.select_action(&state, true);
        records.push((encode_state_flat(&state), probs, state.current_player()));
        step(&mut state, action)?;
        if action == Action::Pass {
            passes += 1;
        }
        if show {
            print_position(&state);
        }
    }

    let outcome = state.winner().ok_or(SelfPlayError::MissingOutcome)?;
    let game_length = records.len();
    let examples = records
        .into_iter()
        .map(|(encoded, move_probs, player)| TrainingExample {
            state: encoded,
            move_probs,
            player,
            z: outcome_value(outcome, player),
        })
        .collect();

    Ok(EpisodeTrace {
        examples,
        result: EpisodeResult {
            outcome,
            game_length,
            passes,
            score: state.score(),
        },
    })
}

/// Derive a deterministic seed for a given episode index.
pub fn episode_seed(base_seed: u64, episode_index: usize) -> u64 {
    // FNV-1a style mixing
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    let index = episode_index as u64;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}
