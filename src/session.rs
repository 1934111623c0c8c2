//! Single-game session: human versus the computer opponent.
//!
//! The core engine is pure and holds no global state, so everything stateful
//! lives here: the current board, whether a game is running, and the
//! opponent's RNG. A transport layer owns one `GameSession` per game and
//! serializes access to it; the session itself offers no locking because it
//! is a plain `&mut self` object.
//!
//! ## Turn policy
//!
//! The human always plays [`Side::First`] ("X") and the opponent
//! [`Side::Second`] ("O"). After every human move the opponent replies if it
//! can; if the human then has no legal move while the opponent still does,
//! the opponent keeps moving (the human's turn is skipped) until the human
//! can move again or the game ends. The rules engine only reports empty
//! legal-move sets; this skipping policy exists nowhere but here.

use serde::Serialize;

use crate::core::{Board, Coord, Grid, Side};
use crate::error::Error;
use crate::opponent::{GreedyPolicy, MovePolicy};
use crate::rules::{apply_move, is_terminal, legal_moves, outcome, score, GameOutcome, Score};

/// The side the human plays.
pub const HUMAN: Side = Side::First;

/// The side the computer plays.
pub const OPPONENT: Side = Side::Second;

/// Who makes the first move of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Starter {
    Human,
    Opponent,
}

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// No game running (fresh session, or after `restart`).
    Idle,
    /// A game is running and the human is to move.
    HumanToMove,
    /// The game reached a terminal board.
    Over,
}

/// What happened in response to one human move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The board after the human move and all opponent replies.
    pub board: Board,
    /// Every move the opponent made in reply, in order. More than one means
    /// the human's turn was skipped in between.
    pub opponent_moves: Vec<Coord>,
    /// Legal moves now available to the human.
    pub legal: Vec<Coord>,
    /// Current stone counts.
    pub score: Score,
    /// `Some` if the game just ended.
    pub outcome: Option<GameOutcome>,
}

/// Serializable snapshot of the session for a transport layer.
///
/// The board is the wire grid: 0 = empty, 1 = human (X), 2 = opponent (O),
/// row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub board: Grid,
    pub running: bool,
    pub legal: Vec<Coord>,
    pub score: Score,
    pub over: bool,
}

/// A human-versus-computer game.
///
/// ## Example
///
/// ```
/// use othello_engine::session::{GameSession, Starter};
///
/// let mut session = GameSession::new(42);
/// session.start(Starter::Human);
///
/// let opening = session.legal_moves_for_human()[0];
/// let report = session.play(opening).unwrap();
/// assert_eq!(report.opponent_moves.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    opponent: GreedyPolicy,
}

impl GameSession {
    /// Create a session with a seeded opponent. No game is running until
    /// [`start`](Self::start) is called.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_policy(GreedyPolicy::new(seed))
    }

    /// Create a session around a specific opponent policy.
    #[must_use]
    pub fn with_policy(opponent: GreedyPolicy) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::Idle,
            opponent,
        }
    }

    /// Begin a fresh game. When the opponent starts, it makes its opening
    /// move immediately and the human is then to move.
    pub fn start(&mut self, starter: Starter) {
        self.board = Board::new();
        self.phase = Phase::HumanToMove;

        if starter == Starter::Opponent {
            if let Some(coord) = self.opponent.select_move(&self.board, OPPONENT) {
                self.board = apply_move(&self.board, coord, OPPONENT)
                    .expect("policy selects only legal moves");
            }
        }
    }

    /// Submit the human's move.
    ///
    /// Fails with [`Error::GameNotStarted`] before `start`,
    /// [`Error::GameOver`] after the game ends, and [`Error::IllegalMove`]
    /// for a bad coordinate - in every failure case the stored board is
    /// untouched. On success the opponent replies (possibly multiple times,
    /// skipping the human), and the report describes the new position.
    pub fn play(&mut self, coord: Coord) -> Result<TurnReport, Error> {
        match self.phase {
            Phase::Idle => return Err(Error::GameNotStarted),
            Phase::Over => return Err(Error::GameOver),
            Phase::HumanToMove => {}
        }

        let mut board = apply_move(&self.board, coord, HUMAN)?;
        let mut opponent_moves = Vec::new();

        // Opponent replies until the human can move again or nobody can.
        loop {
            match self.opponent.select_move(&board, OPPONENT) {
                Some(reply) => {
                    board = apply_move(&board, reply, OPPONENT)
                        .expect("policy selects only legal moves");
                    opponent_moves.push(reply);
                }
                None => break,
            }
            if !legal_moves(&board, HUMAN).is_empty() {
                break;
            }
        }

        self.board = board;
        let finished = is_terminal(&self.board);
        self.phase = if finished { Phase::Over } else { Phase::HumanToMove };

        Ok(TurnReport {
            board: self.board,
            opponent_moves,
            legal: legal_moves(&self.board, HUMAN),
            score: score(&self.board),
            outcome: outcome(&self.board),
        })
    }

    /// Drop back to the not-started state with a fresh board.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.phase = Phase::Idle;
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a game is running (started and not yet over).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::HumanToMove
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Legal moves for the human on the current board. Empty when no game
    /// is running.
    #[must_use]
    pub fn legal_moves_for_human(&self) -> Vec<Coord> {
        if self.is_running() {
            legal_moves(&self.board, HUMAN)
        } else {
            Vec::new()
        }
    }

    /// Current stone counts.
    #[must_use]
    pub fn score(&self) -> Score {
        score(&self.board)
    }

    /// Snapshot for serialization to a client.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.board.to_grid(),
            running: self.is_running(),
            legal: self.legal_moves_for_human(),
            score: self.score(),
            over: self.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_play_before_start_fails() {
        let mut session = GameSession::new(1);
        assert_eq!(session.play(at(2, 3)), Err(Error::GameNotStarted));
    }

    #[test]
    fn test_opponent_opens_when_starting() {
        let mut session = GameSession::new(1);
        session.start(Starter::Opponent);

        // One opponent stone placed, one human stone flipped.
        assert_eq!(session.score(), Score { first: 1, second: 4 });
        assert!(session.is_running());
    }

    #[test]
    fn test_human_opens_when_starting() {
        let mut session = GameSession::new(1);
        session.start(Starter::Human);

        assert_eq!(session.board(), &Board::new());
        assert_eq!(
            session.legal_moves_for_human(),
            vec![at(2, 3), at(3, 2), at(4, 5), at(5, 4)]
        );
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let mut session = GameSession::new(1);
        session.start(Starter::Human);
        let before = *session.board();

        let err = session.play(at(0, 0)).unwrap_err();
        assert_eq!(
            err,
            Error::IllegalMove {
                coord: at(0, 0),
                side: HUMAN
            }
        );
        assert_eq!(session.board(), &before);
        assert!(session.is_running());
    }

    #[test]
    fn test_opponent_replies_to_human_move() {
        let mut session = GameSession::new(1);
        session.start(Starter::Human);

        let report = session.play(at(2, 3)).unwrap();
        assert_eq!(report.opponent_moves.len(), 1);
        assert_eq!(report.score.first + report.score.second, 6);
        assert!(report.outcome.is_none());
    }

    #[test]
    fn test_restart_goes_idle() {
        let mut session = GameSession::new(1);
        session.start(Starter::Human);
        session.play(at(2, 3)).unwrap();

        session.restart();
        assert!(!session.is_running());
        assert!(!session.is_over());
        assert_eq!(session.board(), &Board::new());
        assert!(session.legal_moves_for_human().is_empty());
    }

    #[test]
    fn test_view_serializes() {
        let mut session = GameSession::new(1);
        session.start(Starter::Human);

        let view = session.view();
        assert!(view.running);
        assert!(!view.over);
        assert_eq!(view.board[3][4], 1);
        assert_eq!(view.legal.len(), 4);

        // The snapshot is plain data for a transport layer.
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"running\":true"));
    }
}
