use core::ops::RangeInclusive;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

use crate::*;

/// The mark the automated opponent plays; the human always opens as X
pub const BOT_MARK: Mark = Mark::O;

/// Default bot "thinking" pause, purely cosmetic
pub const DEFAULT_THINK_DELAY_MS: RangeInclusive<u64> = 500..=1000;

/// Who sits on the O side
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsBot,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::PlayerVsPlayer
    }
}

/// Win counts for the session. They survive board resets and are only
/// cleared by starting a new game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    pub const fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
        log::debug!("score update: X {} - O {}", self.x, self.o);
    }
}

/// A full play session: the live board, the mode, the running scores and the
/// bot scheduling state. This is the only surface the presentation layer
/// talks to; every input that the rules refuse is swallowed into `NoChange`
/// so an illegal click never surfaces as an error.
///
/// The bot's move is not played inline: `apply_move` arms a deadline and
/// `poll` plays the move once the deadline has passed. While the deadline is
/// armed no other move is accepted. The presentation layer is expected to
/// call `poll` from its periodic tick.
pub struct Session {
    game: Game,
    mode: GameMode,
    scores: Scores,
    bot_ready_at: Option<Instant>,
    think_delay_ms: RangeInclusive<u64>,
    rng: SmallRng,
}

impl Session {
    pub fn new(mode: GameMode, seed: u64) -> Self {
        Self {
            game: Game::new(),
            mode,
            scores: Default::default(),
            bot_ready_at: None,
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Override the bot's thinking pause, mostly useful to make tests and
    /// simulations run without waiting
    pub fn with_think_delay_ms(mut self, range: RangeInclusive<u64>) -> Self {
        self.think_delay_ms = range;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Whether a bot move is armed and human input is locked out
    pub fn bot_pending(&self) -> bool {
        self.bot_ready_at.is_some()
    }

    /// Place the current player's mark, ignoring the input while a bot move
    /// is pending, on occupied or out-of-range cells, and after the game
    /// ended
    pub fn apply_move(&mut self, cell: Cell) -> MoveOutcome {
        if self.bot_pending() {
            log::trace!("move at {} ignored, bot turn pending", cell);
            return MoveOutcome::NoChange;
        }
        let outcome = match self.game.apply(cell) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::trace!("move at {} ignored: {}", cell, err);
                return MoveOutcome::NoChange;
            }
        };
        self.settle(outcome);
        outcome
    }

    /// Play the armed bot move if its deadline has passed. Returns `NoChange`
    /// until then; the lock is always released once the move is played, even
    /// when it ends the game.
    pub fn poll(&mut self) -> MoveOutcome {
        let Some(ready_at) = self.bot_ready_at else {
            return MoveOutcome::NoChange;
        };
        if Instant::now() < ready_at {
            return MoveOutcome::NoChange;
        }
        self.bot_ready_at = None;

        let cell = bot::select_move(self.game.board(), BOT_MARK, &mut self.rng);
        let outcome = match self.game.apply(cell) {
            Ok(outcome) => outcome,
            // the lock kept the board unchanged since scheduling, so the
            // selected cell is free and the game still in progress
            Err(err) => {
                log::warn!("bot move at {} refused: {}", cell, err);
                return MoveOutcome::NoChange;
            }
        };
        self.settle(outcome);
        outcome
    }

    /// Record a win exactly once per finished board and arm the bot's
    /// deadline when it is its turn to play
    fn settle(&mut self, outcome: MoveOutcome) {
        if let MoveOutcome::Won { winner, .. } = outcome {
            self.scores.record_win(winner);
        }
        if matches!(outcome, MoveOutcome::Placed)
            && self.mode == GameMode::PlayerVsBot
            && self.game.current_player() == BOT_MARK
        {
            let delay = self.rng.random_range(self.think_delay_ms.clone());
            self.bot_ready_at = Some(Instant::now() + Duration::from_millis(delay));
            log::debug!("bot thinking for {}ms", delay);
        }
    }

    /// Fresh board, X to move, any pending bot move cancelled. Scores stay.
    pub fn reset(&mut self) {
        self.game = Game::new();
        self.bot_ready_at = None;
        log::debug!("board reset");
    }

    /// Clear the scores and reset the board
    pub fn new_game(&mut self) {
        self.scores = Default::default();
        self.reset();
    }

    /// Switch who plays O. Always restarts the current board, never switches
    /// mid-game.
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::debug!("mode change: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
        self.reset();
    }
}
