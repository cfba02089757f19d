use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ml_reversi::config::{AgentKind, AppConfig};
use ml_reversi::game::{GameOutcome, Player};
use ml_reversi::training::episode::{episode_seed, play_game};
use ml_reversi::training::metrics::SelfPlayMetrics;
use ml_reversi::training::runner::SelfPlayRunner;

/// Run Reversi self-play games and report outcome statistics.
#[derive(Parser)]
#[command(name = "selfplay", about = "Play Reversi self-play games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the base seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the self-play agent
    #[arg(long, value_enum)]
    agent: Option<AgentKind>,

    /// Play the agent (as Player1) against this opponent instead of itself
    #[arg(long, value_enum)]
    opponent: Option<AgentKind>,

    /// Print every position
    #[arg(long)]
    show: bool,

    /// Print a config file with all defaults and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.self_play.num_games = games;
    }
    if let Some(seed) = cli.seed {
        app_config.self_play.seed = Some(seed);
    }
    if let Some(agent) = cli.agent {
        app_config.self_play.agent = agent;
    }
    if cli.show {
        app_config.self_play.show_board = true;
    }
    app_config.validate().context("validating overridden config")?;

    let start_player = app_config.game.first_player()?;

    match cli.opponent {
        Some(opponent) => run_match(&app_config, opponent, start_player),
        None => {
            let runner = SelfPlayRunner::new(app_config.self_play.clone(), start_player);
            runner.run().context("self-play run failed")?;
            Ok(())
        }
    }
}

/// Agent-vs-opponent games; the agent always holds Player1.
fn run_match(config: &AppConfig, opponent: AgentKind, start_player: Player) -> Result<()> {
    let settings = &config.self_play;
    let mut metrics = SelfPlayMetrics::new();

    println!(
        "{:?} (Player1) vs {:?} (Player2), {} games",
        settings.agent, opponent, settings.num_games
    );

    for game in 1..=settings.num_games {
        let seed = settings.seed.map(|base| episode_seed(base, game));
        let mut p1 = settings.agent.build(seed);
        let mut p2 = opponent.build(seed.map(|s| s.wrapping_add(1)));
        let result = play_game(p1.as_mut(), p2.as_mut(), start_player, settings.show_board)
            .with_context(|| format!("game {game}"))?;
        if settings.show_board {
            let verdict = match result.outcome {
                GameOutcome::Winner(p) => p.name(),
                GameOutcome::Tie => "Tie",
            };
            println!(
                "Game {game}: {verdict} (B {} - W {})",
                result.score.player1, result.score.player2
            );
        }
        metrics.record_episode(result);
    }

    let window = metrics.capacity();
    println!("-------------------------------------------");
    println!(
        "Player1 {:.1}% | Player2 {:.1}% | tie {:.1}% | avg_len({}) {:.1}",
        metrics.lifetime_win_rate(Player::Player1) * 100.0,
        metrics.lifetime_win_rate(Player::Player2) * 100.0,
        metrics.lifetime_tie_rate() * 100.0,
        window,
        metrics.average_game_length(window),
    );
    Ok(())
}
