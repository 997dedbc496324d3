//! Loading game records from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use scorekeeper::domain::Schedule;
use scorekeeper::{AppError, Game};
use tracing::debug;

/// Read a JSON game record and check it is structurally sound.
///
/// Rule violations inside rounds are not errors here; they surface when the
/// game is checked or scored.
pub fn load_game(path: &Path) -> Result<(Game, Schedule), AppError> {
    let reader = BufReader::new(File::open(path)?);
    let game: Game = serde_json::from_reader(reader)?;
    let schedule = game.validate_shape()?;
    debug!(
        path = %path.display(),
        players = game.players.len(),
        rounds = game.rounds.len(),
        "loaded game record"
    );
    Ok((game, schedule))
}
