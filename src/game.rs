//! Turn orchestration for a single game
//!
//! [`GameController`] owns the board for the lifetime of a game. A human move
//! goes through [`GameController::place`]: the stone is placed, the game is
//! checked for a five or a full board, and if the engine is to move next it
//! replies before `place` returns. Everything a front end needs to redraw is
//! reported as [`GameEvent`]s and readable through the accessors.

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::PlaceError;
use crate::rules::{check_win, WinLine};

/// Final or running state of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win { winner: Stone, line: WinLine },
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Controller state as seen by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    WaitingFor(Stone),
    Won(Stone),
    Draw,
}

/// Something that happened during a call into the controller
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A stone was accepted onto the board
    StonePlaced { pos: Pos, stone: Stone },
    /// The engine replied with this move
    AiMoved { pos: Pos, result: MoveResult },
    /// The game ended
    GameOver(Outcome),
}

/// Owns the board and enforces turn order for one game.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    config: GameConfig,
    engine: AIEngine,
    to_move: Stone,
    outcome: Outcome,
    /// Position and side to move the history is replayed from on undo
    start_board: Board,
    start_to_move: Stone,
    history: Vec<(Pos, Stone)>,
    last_ai_result: Option<MoveResult>,
}

impl GameController {
    /// Start a new game. If the engine moves first, it has already played
    /// its opening move when this returns.
    pub fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        Self::from_position(Board::new(), config.first_player, config)
    }

    /// Resume from an arbitrary position, e.g. for analysis or tests.
    ///
    /// A position that already holds a five (or fills the board) starts out
    /// finished. If `to_move` is the engine's side, the engine has already
    /// replied when this returns. Undo never goes behind this position.
    pub fn from_position(board: Board, to_move: Stone, config: GameConfig) -> Self {
        let config = config.sanitized();
        let engine = AIEngine::new(config.engine.clone());
        let outcome = scan_outcome(&board);
        let mut controller = Self {
            start_board: board.clone(),
            start_to_move: to_move,
            board,
            to_move,
            config,
            engine,
            outcome,
            history: Vec::new(),
            last_ai_result: None,
        };
        controller.run_ai_turn(&mut Vec::new());
        controller
    }

    /// Reset board and turn state, keeping the configuration.
    pub fn new_game(&mut self) -> Vec<GameEvent> {
        self.board = Board::new();
        self.to_move = self.config.first_player;
        self.start_board = self.board.clone();
        self.start_to_move = self.to_move;
        self.outcome = Outcome::Ongoing;
        self.history.clear();
        self.last_ai_result = None;
        tracing::info!(first = self.to_move.name(), "new game");

        let mut events = Vec::new();
        self.run_ai_turn(&mut events);
        events
    }

    /// Place a stone for `stone` at `pos`.
    ///
    /// Rejected placements leave the game untouched. On success the engine's
    /// reply, if it is the engine's turn, is included in the returned events.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<Vec<GameEvent>, PlaceError> {
        if self.outcome.is_terminal() {
            return Err(PlaceError::GameOver);
        }
        if stone != self.to_move {
            return Err(PlaceError::NotYourTurn {
                expected: self.to_move,
                got: stone,
            });
        }

        let mut events = Vec::new();
        self.apply(pos, stone, &mut events)?;
        self.run_ai_turn(&mut events);
        Ok(events)
    }

    /// Place a stone for whichever side is to move.
    pub fn play(&mut self, pos: Pos) -> Result<Vec<GameEvent>, PlaceError> {
        self.place(pos, self.to_move)
    }

    /// Take back the last human move (and the engine's reply to it).
    ///
    /// Returns false when there is nothing to take back.
    pub fn undo_turn(&mut self) -> bool {
        let Some(&(_, last_stone)) = self.history.last() else {
            return false;
        };

        let mut keep = self.history.len() - 1;
        if self.is_ai(last_stone) && keep > 0 {
            keep -= 1;
        }
        // The engine's first move stays when it moved first.
        let min_keep = usize::from(self.is_ai(self.start_to_move));
        keep = keep.max(min_keep);
        if keep >= self.history.len() {
            return false;
        }

        let replay: Vec<(Pos, Stone)> = self.history.drain(..keep).collect();
        self.board = self.start_board.clone();
        self.history.clear();
        self.outcome = Outcome::Ongoing;
        self.last_ai_result = None;
        self.to_move = self.start_to_move;

        for (pos, stone) in replay {
            if self.board.place(pos, stone).is_ok() {
                self.history.push((pos, stone));
                self.to_move = stone.opponent();
            }
        }
        tracing::debug!(moves = self.history.len(), "took back moves");
        true
    }

    fn is_ai(&self, stone: Stone) -> bool {
        self.config.ai_player == Some(stone)
    }

    /// Place, record, then check for a five or a full board.
    fn apply(&mut self, pos: Pos, stone: Stone, events: &mut Vec<GameEvent>) -> Result<(), PlaceError> {
        self.board.place(pos, stone)?;
        self.history.push((pos, stone));
        events.push(GameEvent::StonePlaced { pos, stone });
        tracing::trace!(stone = stone.name(), %pos, "stone placed");

        if let Some(line) = check_win(&self.board, pos) {
            self.finish(Outcome::Win { winner: stone, line }, events);
        } else if self.board.is_full() {
            self.finish(Outcome::Draw, events);
        } else {
            self.to_move = stone.opponent();
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) {
        match &outcome {
            Outcome::Win { winner, .. } => {
                tracing::info!(winner = winner.name(), moves = self.history.len(), "game won");
            }
            Outcome::Draw => tracing::info!(moves = self.history.len(), "game drawn"),
            Outcome::Ongoing => {}
        }
        self.outcome = outcome.clone();
        events.push(GameEvent::GameOver(outcome));
    }

    /// Let the engine move if it is its turn and the game is still running.
    fn run_ai_turn(&mut self, events: &mut Vec<GameEvent>) {
        if self.outcome.is_terminal() || !self.is_ai(self.to_move) {
            return;
        }

        let color = self.to_move;
        let result = self.engine.choose_move(&mut self.board, color);
        let Some(pos) = result.best_move else {
            tracing::warn!(color = color.name(), "engine found no move");
            return;
        };

        self.last_ai_result = Some(result.clone());
        match self.apply(pos, color, events) {
            Ok(()) => events.push(GameEvent::AiMoved { pos, result }),
            Err(err) => tracing::error!(%err, %pos, "engine chose an illegal move"),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn status(&self) -> GameStatus {
        match &self.outcome {
            Outcome::Ongoing => GameStatus::WaitingFor(self.to_move),
            Outcome::Win { winner, .. } => GameStatus::Won(*winner),
            Outcome::Draw => GameStatus::Draw,
        }
    }

    pub fn win_line(&self) -> Option<&[Pos]> {
        match &self.outcome {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Whether a human may place a stone right now
    pub fn is_human_turn(&self) -> bool {
        !self.outcome.is_terminal() && !self.is_ai(self.to_move)
    }
}

/// Outcome of a position as found, without knowing the move order.
fn scan_outcome(board: &Board) -> Outcome {
    for (pos, stone) in board.occupied() {
        if let Some(line) = check_win(board, pos) {
            return Outcome::Win { winner: stone, line };
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
