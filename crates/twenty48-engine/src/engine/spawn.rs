use std::{num::ParseIntError, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::Board;

/// Probability that a freshly spawned tile is a 4 instead of a 2.
const FOUR_TILE_PROBABILITY: f64 = 0.1;

/// Seed for deterministic tile spawning.
///
/// A 128-bit value that fully determines the spawner's placement and value
/// choices. The same seed always produces the same game, enabling:
///
/// - Reproducible sessions for debugging
/// - Deterministic testing
///
/// The textual form is a 32-character hex string, used both by serde and
/// by [`FromStr`] (which is what the command line parses).
///
/// # Example
///
/// ```
/// use twenty48_engine::{SpawnSeed, TileSpawner};
/// use rand::Rng as _;
///
/// // Generate a random seed
/// let seed: SpawnSeed = rand::rng().random();
///
/// // Two spawners with the same seed place the same tiles
/// let spawner1 = TileSpawner::with_seed(seed);
/// let spawner2 = TileSpawner::with_seed(seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSeed(u128);

/// Failure to parse a [`SpawnSeed`] from its hex form.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseSpawnSeedError {
    #[display("expected 32 hex characters, got {_0}")]
    Length(#[error(not(source))] usize),
    #[display("invalid hex: {_0}")]
    Digit(ParseIntError),
}

impl FromStr for SpawnSeed {
    type Err = ParseSpawnSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSpawnSeedError::Length(s.len()));
        }
        let value = u128::from_str_radix(s, 16).map_err(ParseSpawnSeedError::Digit)?;
        Ok(Self(value))
    }
}

impl Serialize for SpawnSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:032x}", self.0))
    }
}

impl<'de> Deserialize<'de> for SpawnSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        hex.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid seed {hex:?}: {e}")))
    }
}

/// Allows generating random `SpawnSeed` values with `rng.random()`.
impl Distribution<SpawnSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SpawnSeed {
        SpawnSeed(rng.random())
    }
}

/// Places new tiles into empty board cells.
///
/// Owns the only randomness in the engine. The generator is explicit and
/// seedable rather than ambient so that spawn placement and value choice
/// are reproducible under test.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: Pcg32,
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSpawner {
    /// Creates a spawner seeded from the OS random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but fully deterministic for the given seed.
    #[must_use]
    pub fn with_seed(seed: SpawnSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0.to_be_bytes()),
        }
    }

    /// Spawns one tile into a uniformly chosen empty cell.
    ///
    /// The new tile is a 2 nine times out of ten and a 4 otherwise. A
    /// board with no empty cells comes back unchanged. The input board is
    /// taken by value and the caller's copy is never touched.
    #[must_use]
    pub fn spawn(&mut self, board: Board) -> Board {
        let empties = board.empty_cells();
        if empties.is_empty() {
            return board;
        }
        let (row, col) = empties[self.rng.random_range(0..empties.len())];
        let value = if self.rng.random_bool(FOUR_TILE_PROBABILITY) {
            4
        } else {
            2
        };
        let mut next = board;
        next.set_tile(row, col, value);
        next
    }
}
