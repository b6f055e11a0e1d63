use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::{EngineError, MoveError};
use super::game_state::{GameSnapshot, MoveOutcome};
use super::history::MoveHistory;
use super::players::PlayerNames;
use super::patterns::patterns_for;
use super::scoreboard::Scoreboard;
use super::settings::EngineSettings;
use super::types::{Difficulty, GameStatus, GridSize, Mark, WinPattern};
use super::win_detector::check_win_with_line;

/// One tic-tac-toe session: the current board, its undo stack, running scores,
/// player names and an event log. All operations are synchronous and O(patterns).
pub struct GameEngine {
    board: Board,
    patterns: &'static [WinPattern],
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<WinPattern>,
    undo_stack: Vec<GameSnapshot>,
    scoreboard: Scoreboard,
    history: MoveHistory,
    names: PlayerNames,
    rng: SessionRng,
}

impl GameEngine {
    pub fn new(settings: &EngineSettings, rng: SessionRng) -> Self {
        let size = settings.grid_size;
        Self {
            board: Board::new(size),
            patterns: patterns_for(size),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            undo_stack: Vec::with_capacity(size.cell_count()),
            scoreboard: settings.initial_scores,
            history: MoveHistory::new(settings.history_capacity),
            names: PlayerNames::default(),
            rng,
        }
    }

    pub fn with_seed(settings: &EngineSettings, seed: u64) -> Self {
        Self::new(settings, SessionRng::new(seed))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid_size(&self) -> GridSize {
        self.board.size()
    }

    pub fn patterns(&self) -> &'static [WinPattern] {
        self.patterns
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn winning_line(&self) -> Option<WinPattern> {
        self.winning_line
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Undo is only offered while the game is still being played.
    pub fn can_undo(&self) -> bool {
        self.status.is_active() && !self.undo_stack.is_empty()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn player_names(&self) -> &PlayerNames {
        &self.names
    }

    pub fn set_player_name(&mut self, mark: Mark, name: &str) {
        self.names.set(mark, name);
    }

    /// Adds a front-end event (mode or difficulty change) to the history log.
    pub fn record_event(&mut self, message: &str) {
        self.history.record(message);
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_mark: self.current_mark,
            status: self.status,
            winning_line: self.winning_line,
        }
    }

    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if !self.status.is_active() {
            return MoveOutcome::Rejected(MoveError::GameInactive);
        }

        let snapshot = self.snapshot();
        let mark = self.current_mark;
        if let Err(e) = self.board.place(index, mark) {
            return MoveOutcome::Rejected(e);
        }
        self.undo_stack.push(snapshot);

        let (row, col) = self.board.coordinates(index);
        self.history.record(format!("{} placed at {},{}", mark, row + 1, col + 1));

        if let Some((winner, line)) = check_win_with_line(&self.board, self.patterns) {
            self.status = GameStatus::Won(winner);
            self.winning_line = Some(line);
            self.scoreboard.record_win(winner);
            self.history.record(format!("{} wins!", self.names.label(winner)));
            log!("{} won on {} with cells {:?}", winner, self.grid_size(), line.cells());
            return MoveOutcome::Win(winner);
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            self.scoreboard.record_draw();
            self.history.record("It's a draw!");
            log!("Game on {} ended in a draw", self.grid_size());
            return MoveOutcome::Draw;
        }

        self.current_mark = mark.opponent();
        MoveOutcome::Continue
    }

    /// Restores the state before the last accepted move. A finished game
    /// cannot be undone; it has to be reset.
    pub fn try_undo(&mut self) -> Result<(), EngineError> {
        if !self.status.is_active() {
            return Err(EngineError::Move(MoveError::GameInactive));
        }
        let snapshot = self.undo_stack.pop().ok_or(EngineError::EmptyUndoStack)?;

        self.board = snapshot.board;
        self.current_mark = snapshot.current_mark;
        self.status = snapshot.status;
        self.winning_line = snapshot.winning_line;

        self.history.record("Move undone");
        log!("Move undone, {} moves left to undo", self.undo_stack.len());
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Fresh empty board of `size`; X moves first. Scores are kept.
    pub fn reset(&mut self, size: GridSize) {
        if size != self.grid_size() {
            self.history.record(format!("Grid size set to {}", size));
        }

        self.board = Board::new(size);
        self.patterns = patterns_for(size);
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.undo_stack = Vec::with_capacity(size.cell_count());

        self.history.record("Game restarted");
        log!("Board reset to {}", size);
    }

    pub fn restart(&mut self) {
        self.reset(self.grid_size());
    }

    pub fn new_game(&mut self) {
        self.scoreboard = Scoreboard::default();
        self.restart();
        self.history.record("Started a new game");
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Bot choice for the mark whose turn it is. Does not change the board.
    pub fn select_bot_move(&mut self, difficulty: Difficulty) -> Option<usize> {
        let input = BotInput {
            board: &self.board,
            patterns: self.patterns,
            current_mark: self.current_mark,
        };
        calculate_move(difficulty, &input, &mut self.rng)
    }

    /// Selects and applies a bot move. `None` when the board has no empty cell.
    pub fn play_bot_move(&mut self, difficulty: Difficulty) -> Option<(usize, MoveOutcome)> {
        let index = self.select_bot_move(difficulty)?;
        Some((index, self.apply_move(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: GridSize) -> GameEngine {
        let settings = EngineSettings { grid_size: size, ..EngineSettings::default() };
        GameEngine::with_seed(&settings, 42)
    }

    fn play(engine: &mut GameEngine, moves: &[usize]) -> MoveOutcome {
        let mut outcome = MoveOutcome::Continue;
        for &index in moves {
            outcome = engine.apply_move(index);
            assert!(outcome.is_accepted(), "move {} rejected: {:?}", index, outcome);
        }
        outcome
    }

    #[test]
    fn test_new_engine_state() {
        let engine = engine(GridSize::Three);
        assert_eq!(engine.current_mark(), Mark::X);
        assert!(engine.is_active());
        assert!(!engine.can_undo());
        assert_eq!(engine.board().len(), 9);
        assert_eq!(engine.patterns().len(), 8);
    }

    #[test]
    fn test_marks_alternate() {
        let mut engine = engine(GridSize::Four);
        assert_eq!(engine.apply_move(0), MoveOutcome::Continue);
        assert_eq!(engine.current_mark(), Mark::O);
        assert_eq!(engine.apply_move(5), MoveOutcome::Continue);
        assert_eq!(engine.current_mark(), Mark::X);
        assert_eq!(engine.board().count(Mark::X), 1);
        assert_eq!(engine.board().count(Mark::O), 1);
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut engine = engine(GridSize::Three);
        engine.apply_move(4);
        let before = engine.snapshot();

        assert_eq!(
            engine.apply_move(4),
            MoveOutcome::Rejected(MoveError::CellOccupied { index: 4 })
        );
        assert_eq!(
            engine.apply_move(9),
            MoveOutcome::Rejected(MoveError::InvalidIndex { index: 9, cell_count: 9 })
        );
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_top_row_wins_for_x() {
        let mut engine = engine(GridSize::Three);
        let outcome = play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(outcome, MoveOutcome::Win(Mark::X));
        assert_eq!(engine.status(), GameStatus::Won(Mark::X));
        assert_eq!(engine.winning_line(), Some(WinPattern([0, 1, 2])));
        assert_eq!(engine.scoreboard().x_wins, 1);
        assert_eq!(engine.current_mark(), Mark::X);
        assert_eq!(engine.apply_move(8), MoveOutcome::Rejected(MoveError::GameInactive));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut engine = engine(GridSize::Three);
        // X O X / X O O / O X X
        let outcome = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(outcome, MoveOutcome::Draw);
        assert!(!engine.is_active());
        assert_eq!(engine.scoreboard().draws, 1);
    }

    #[test]
    fn test_three_in_a_row_wins_on_larger_board() {
        let mut engine = engine(GridSize::Five);
        let outcome = play(&mut engine, &[6, 0, 12, 1, 18]);
        assert_eq!(outcome, MoveOutcome::Win(Mark::X));
        assert_eq!(engine.winning_line(), Some(WinPattern([6, 12, 18])));
    }

    #[test]
    fn test_undo_round_trip_for_every_cell() {
        for size in GridSize::ALL {
            for index in 0..size.cell_count() {
                let mut engine = engine(size);
                let before = engine.snapshot();
                assert!(engine.apply_move(index).is_accepted());
                assert!(engine.undo());
                assert_eq!(engine.snapshot(), before);
            }
        }
    }

    #[test]
    fn test_undo_after_win_is_rejected() {
        let mut engine = engine(GridSize::Three);
        play(&mut engine, &[0, 3, 1, 4, 2]);
        let finished = engine.snapshot();
        assert!(!engine.can_undo());

        assert_eq!(engine.try_undo(), Err(EngineError::Move(MoveError::GameInactive)));
        assert!(!engine.undo());
        assert_eq!(engine.snapshot(), finished);
        assert!(!engine.is_active());
        assert_eq!(engine.scoreboard().x_wins, 1);
    }

    #[test]
    fn test_undo_after_draw_is_rejected() {
        let mut engine = engine(GridSize::Three);
        play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(!engine.undo());
        assert_eq!(engine.status(), GameStatus::Draw);
        assert_eq!(engine.scoreboard().draws, 1);
    }

    #[test]
    fn test_win_entry_uses_player_name() {
        let mut engine = engine(GridSize::Three);
        engine.set_player_name(Mark::X, "Ada");
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert!(engine.history().last().unwrap().ends_with("] Ada (X) wins!"));
        engine.record_event("Bot difficulty set to easy");
        assert!(engine.history().last().unwrap().ends_with("] Bot difficulty set to easy"));
    }

    #[test]
    fn test_undo_on_empty_stack() {
        let mut engine = engine(GridSize::Three);
        assert_eq!(engine.try_undo(), Err(EngineError::EmptyUndoStack));
        assert!(!engine.undo());
        play(&mut engine, &[0]);
        assert!(engine.undo());
        assert!(!engine.undo());
    }

    #[test]
    fn test_reset_keeps_scores_and_clears_undo() {
        let mut engine = engine(GridSize::Three);
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.reset(GridSize::Four);

        assert_eq!(engine.grid_size(), GridSize::Four);
        assert_eq!(engine.board().len(), 16);
        assert_eq!(engine.patterns().len(), 24);
        assert_eq!(engine.current_mark(), Mark::X);
        assert!(engine.is_active());
        assert!(!engine.can_undo());
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.scoreboard().x_wins, 1);
    }

    #[test]
    fn test_new_game_zeroes_scores() {
        let settings = EngineSettings {
            initial_scores: Scoreboard { x_wins: 3, o_wins: 2, draws: 1 },
            ..EngineSettings::default()
        };
        let mut engine = GameEngine::with_seed(&settings, 7);
        assert_eq!(engine.scoreboard().games_played(), 6);
        play(&mut engine, &[0]);
        engine.new_game();
        assert_eq!(*engine.scoreboard(), Scoreboard::default());
        assert!(engine.board().is_empty());
        assert!(engine.history().last().unwrap().ends_with("Started a new game"));
    }

    #[test]
    fn test_history_records_moves() {
        let mut engine = engine(GridSize::Four);
        play(&mut engine, &[5]);
        assert!(engine.history().last().unwrap().ends_with("X placed at 2,2"));
        engine.undo();
        assert!(engine.history().last().unwrap().ends_with("Move undone"));
        engine.clear_history();
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_hard_bot_prefers_own_win() {
        let mut engine = engine(GridSize::Three);
        // X: 0, 1, 6   O: 3, 4; O to move
        play(&mut engine, &[0, 3, 1, 4, 6]);
        assert_eq!(engine.current_mark(), Mark::O);
        assert_eq!(engine.select_bot_move(Difficulty::Hard), Some(5));
    }

    #[test]
    fn test_select_bot_move_does_not_mutate_board() {
        let mut engine = engine(GridSize::Three);
        let before = engine.snapshot();
        engine.select_bot_move(Difficulty::Easy);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_bots_only_choose_legal_cells_through_full_games() {
        for size in GridSize::ALL {
            for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                for seed in 0..10 {
                    let settings = EngineSettings { grid_size: size, ..EngineSettings::default() };
                    let mut engine = GameEngine::with_seed(&settings, seed);
                    while engine.is_active() {
                        let index = engine.select_bot_move(difficulty).unwrap();
                        assert!(index < size.cell_count());
                        assert!(engine.board().get(index).unwrap().is_empty());
                        let x = engine.board().count(Mark::X);
                        let o = engine.board().count(Mark::O);
                        assert!(x == o || x == o + 1);
                        assert!(engine.apply_move(index).is_accepted());
                    }
                    assert_eq!(engine.scoreboard().games_played(), 1);
                }
            }
        }
    }

    #[test]
    fn test_play_bot_move_on_full_board() {
        let mut engine = engine(GridSize::Three);
        play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(engine.select_bot_move(Difficulty::Hard), None);
        assert_eq!(engine.play_bot_move(Difficulty::Hard), None);
    }

    #[test]
    fn test_bot_move_after_win_is_rejected() {
        let mut engine = engine(GridSize::Three);
        play(&mut engine, &[0, 3, 1, 4, 2]);
        let (_, outcome) = engine.play_bot_move(Difficulty::Easy).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected(MoveError::GameInactive));
    }
}
