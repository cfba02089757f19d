use std::collections::VecDeque;

use crate::game::{GameOutcome, Player, Score};

/// Result of a single game.
#[derive(Debug, Clone)]
pub struct EpisodeResult {
    pub outcome: GameOutcome,
    /// Number of actions played, passes included.
    pub game_length: usize,
    pub passes: usize,
    pub score: Score,
}

impl EpisodeResult {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Tie => None,
        }
    }
}

/// Largest rolling window kept in memory.
pub const MAX_WINDOW: usize = 10_000;

/// Self-play statistics with rolling window computations.
pub struct SelfPlayMetrics {
    episode_results: VecDeque<EpisodeResult>,
    capacity: usize,
    // Lifetime counts, never capped
    total_episodes: usize,
    player1_wins: usize,
    player2_wins: usize,
    ties: usize,
}

impl SelfPlayMetrics {
    /// Keep the last `capacity` episodes, clamped to `1..=MAX_WINDOW`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_WINDOW);
        SelfPlayMetrics {
            episode_results: VecDeque::with_capacity(capacity),
            capacity,
            total_episodes: 0,
            player1_wins: 0,
            player2_wins: 0,
            ties: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record_episode(&mut self, result: EpisodeResult) {
        self.total_episodes += 1;
        match result.outcome {
            GameOutcome::Winner(Player::Player1) => self.player1_wins += 1,
            GameOutcome::Winner(Player::Player2) => self.player2_wins += 1,
            GameOutcome::Tie => self.ties += 1,
        }
        self.episode_results.push_back(result);
        if self.episode_results.len() > self.capacity {
            self.episode_results.pop_front();
        }
    }

    fn rate(&self, last_n: usize, pred: impl Fn(&EpisodeResult) -> bool) -> f32 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .filter(|r| pred(r))
            .count();
        hits as f32 / n as f32
    }

    /// Win rate for `player` in the last N episodes.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner() == Some(player))
    }

    /// Tie rate in the last N episodes.
    pub fn tie_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.outcome == GameOutcome::Tie)
    }

    /// Average game length over the last N episodes.
    pub fn average_game_length(&self, last_n: usize) -> f32 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.game_length)
            .sum();
        total as f32 / n as f32
    }

    /// Average number of passes per game over the last N episodes.
    pub fn average_passes(&self, last_n: usize) -> f32 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.passes)
            .sum();
        total as f32 / n as f32
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    /// Win rate for `player` over every recorded episode.
    pub fn lifetime_win_rate(&self, player: Player) -> f32 {
        let wins = match player {
            Player::Player1 => self.player1_wins,
            Player::Player2 => self.player2_wins,
        };
        self.lifetime_rate(wins)
    }

    pub fn lifetime_tie_rate(&self) -> f32 {
        self.lifetime_rate(self.ties)
    }

    fn lifetime_rate(&self, hits: usize) -> f32 {
        if self.total_episodes == 0 {
            return 0.0;
        }
        hits as f32 / self.total_episodes as f32
    }
}

impl Default for SelfPlayMetrics {
    fn default() -> Self {
        Self::new()
    }
}
