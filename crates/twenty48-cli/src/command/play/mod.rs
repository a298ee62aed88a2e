use std::path::PathBuf;

use twenty48_engine::{GameSession, SpawnSeed};

use crate::{command::play::screen::GameScreen, store::BestScoreStore, tui::Tui};

mod screen;

/// Well-known location of the single persisted scalar (the best score).
const DEFAULT_BEST_FILE: &str = "./data/best_score.json";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Spawn seed as 32 hex characters, for a reproducible session
    #[clap(long)]
    seed: Option<SpawnSeed>,
    /// File the best score is persisted to
    #[clap(long, default_value = DEFAULT_BEST_FILE)]
    best_file: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            best_file: PathBuf::from(DEFAULT_BEST_FILE),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed, best_file } = arg;

    let store = BestScoreStore::new(best_file.clone());
    let best = store.load()?.unwrap_or(0);

    let session = match seed {
        Some(seed) => GameSession::with_seed(*seed),
        None => GameSession::new(),
    }
    .with_best(best);

    let mut screen = GameScreen::new(session, store);
    Tui::new().run(&mut screen)
}
