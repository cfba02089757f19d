use crate::game::{Action, GameState, ACTION_SPACE};

/// Universal interface for all move-selecting agents.
///
/// The engine treats an agent as an opaque policy: it receives a position
/// and returns a placement or a pass.
pub trait Agent {
    /// Select an action given the current game state.
    /// When `training` is true, the agent may explore; otherwise it exploits.
    /// Must return a member of `state.legal_actions()`. When that holds no
    /// placement (a forced pass or a finished game) the answer is
    /// `Action::Pass`; the engine rejects it with `MoveError::GameOver` once
    /// the game is over.
    fn select_action(&mut self, state: &GameState, training: bool) -> Action;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Move-probability distribution over the flat action space
    /// (`ACTION_SPACE` entries, pass last). Defaults to uniform over the
    /// legal actions.
    fn action_probs(&mut self, state: &GameState) -> Vec<f32> {
        uniform_probs(state)
    }

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}

/// Uniform distribution over `state.legal_actions()`; all zero when the game
/// is over.
pub fn uniform_probs(state: &GameState) -> Vec<f32> {
    let mut probs = vec![0.0f32; ACTION_SPACE];
    let actions = state.legal_actions();
    if actions.is_empty() {
        return probs;
    }
    let p = 1.0 / actions.len() as f32;
    for action in actions {
        probs[action.index()] = p;
    }
    probs
}
