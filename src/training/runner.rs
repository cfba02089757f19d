use crate::config::SelfPlayConfig;
use crate::error::SelfPlayError;
use crate::game::Player;
use crate::training::episode::{episode_seed, play_self_play_episode};
use crate::training::metrics::SelfPlayMetrics;

/// Totals for a finished self-play run.
pub struct SelfPlaySummary {
    pub metrics: SelfPlayMetrics,
    pub examples: usize,
}

/// Runs a batch of self-play games with one agent kind.
pub struct SelfPlayRunner {
    config: SelfPlayConfig,
    start_player: Player,
}

impl SelfPlayRunner {
    pub fn new(config: SelfPlayConfig, start_player: Player) -> Self {
        SelfPlayRunner {
            config,
            start_player,
        }
    }

    /// Play `num_games` self-play games, printing progress every
    /// `log_interval` games.
    pub fn run(&self) -> Result<SelfPlaySummary, SelfPlayError> {
        let num_games = self.config.num_games;
        let window = self.config.log_interval.max(1);
        let mut metrics = SelfPlayMetrics::with_capacity(window);
        let mut examples = 0;

        println!(
            "Starting {} self-play games with the {:?} agent ({} moves first)...",
            num_games,
            self.config.agent,
            self.start_player.name()
        );
        println!("-------------------------------------------");

        for game in 1..=num_games {
            let seed = self.config.seed.map(|base| episode_seed(base, game));
            let mut agent = self.config.agent.build(seed);
            let trace =
                play_self_play_episode(agent.as_mut(), self.start_player, self.config.show_board)?;
            examples += trace.examples.len();
            metrics.record_episode(trace.result);

            if game % window == 0 {
                println!(
                    "Game {}/{} | P1 win({}): {:.1}% | P2 win: {:.1}% | tie: {:.1}% | avg_len: {:.1} | passes: {:.2}",
                    game,
                    num_games,
                    window,
                    metrics.win_rate(Player::Player1, window) * 100.0,
                    metrics.win_rate(Player::Player2, window) * 100.0,
                    metrics.tie_rate(window) * 100.0,
                    metrics.average_game_length(window),
                    metrics.average_passes(window),
                );
            }
        }

        println!("-------------------------------------------");
        println!(
            "Self-play complete. Games: {} | examples: {} | P1 win: {:.1}% | P2 win: {:.1}% | tie: {:.1}%",
            metrics.total_episodes(),
            examples,
            metrics.lifetime_win_rate(Player::Player1) * 100.0,
            metrics.lifetime_win_rate(Player::Player2) * 100.0,
            metrics.lifetime_tie_rate() * 100.0,
        );

        Ok(SelfPlaySummary { metrics, examples })
    }
}
