use rand::Rng;

use crate::character::Script;
use crate::inventory::{FilterError, Inventory};
use crate::quiz::{Question, QuizError, QuizMode, generate_questions};

/// Seconds granted per question before it is scored as a timeout.
pub const QUESTION_TIME_LIMIT: u32 = 15;
/// Ticks the answered question stays on screen before advancing.
pub const REVEAL_DELAY: u32 = 2;

/// The fixed set of selectable quiz lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum QuestionCount {
    Five,
    Ten,
    Fifteen,
    Twenty,
    Thirty,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 5] = [
        QuestionCount::Five,
        QuestionCount::Ten,
        QuestionCount::Fifteen,
        QuestionCount::Twenty,
        QuestionCount::Thirty,
    ];

    pub fn value(self) -> usize {
        match self {
            QuestionCount::Five => 5,
            QuestionCount::Ten => 10,
            QuestionCount::Fifteen => 15,
            QuestionCount::Twenty => 20,
            QuestionCount::Thirty => 30,
        }
    }

    pub fn from_value(value: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|count| count.value() == value)
    }
}

/// Everything the setup screen accumulates before a quiz starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub script: Script,
    pub mode: QuizMode,
    pub question_count: QuestionCount,
    pub selected_rows: Vec<String>,
}

impl SessionConfig {
    /// The defaults the practice screen opens with.
    pub fn new(script: Script) -> Self {
        let inventory = Inventory::for_script(script);
        let selected_rows = inventory.basic_row_labels().into_iter().take(2).collect();

        Self {
            script,
            mode: QuizMode::SoundToGlyph,
            question_count: QuestionCount::Ten,
            selected_rows,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Active,
    Results,
}

/// How the current question was resolved, shown during the reveal delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// Chosen option index; `None` when the countdown ran out.
    pub selected: Option<usize>,
    pub was_correct: bool,
    delay_left: u32,
}

impl Reveal {
    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }
}

/// Final tally exposed on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

impl Summary {
    pub fn percentage(&self) -> u32 {
        (self.score as f64 * 100.0 / self.total as f64).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveState {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    time_left: u32,
    reveal: Option<Reveal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Setup,
    Active(ActiveState),
    Results(Summary),
}

/// A single practice run: `Setup → Active → Results`, with retry and
/// reconfigure resets.
///
/// The session has no clock of its own. The owning view delivers one
/// [`tick`](QuizSession::tick) per time unit; a tick either counts the
/// question down or counts the reveal delay down. Events outside their phase
/// are ignored, so a countdown callback that fires after an explicit answer
/// (or after teardown of the run it belonged to) has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    config: SessionConfig,
    state: State,
}

impl QuizSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: State::Setup,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replaces the configuration while in `Setup`. Ignored once a quiz is
    /// running.
    pub fn set_config(&mut self, config: SessionConfig) {
        if matches!(self.state, State::Setup) {
            self.config = config;
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Setup => Phase::Setup,
            State::Active(_) => Phase::Active,
            State::Results(_) => Phase::Results,
        }
    }

    /// Validates the configuration, generates the question sequence, and
    /// enters `Active`. On error the session stays in `Setup`.
    ///
    /// # Errors
    /// * [`FilterError::EmptySelection`] when no rows are selected.
    /// * [`QuizError::InsufficientPool`] when the selected rows hold fewer
    ///   than four distinct characters.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        if !matches!(self.state, State::Setup) {
            return Ok(());
        }

        self.activate(rng)
    }

    /// Regenerates questions for the same configuration and returns to
    /// `Active`. Only valid from `Results`.
    pub fn retry<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        if !matches!(self.state, State::Results(_)) {
            return Ok(());
        }

        self.activate(rng)
    }

    /// Discards any progress and returns to `Setup`.
    pub fn reconfigure(&mut self) {
        self.state = State::Setup;
    }

    fn activate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        let inventory = Inventory::for_script(self.config.script);
        let pool = inventory.characters_in_rows(&self.config.selected_rows)?;
        let questions = generate_questions(
            rng,
            &pool,
            self.config.mode,
            self.config.question_count.value(),
        )?;

        self.state = State::Active(ActiveState {
            questions,
            current: 0,
            score: 0,
            time_left: QUESTION_TIME_LIMIT,
            reveal: None,
        });

        Ok(())
    }

    /// Submits an explicit answer for the current question. Ignored outside
    /// `Active` and once the question is already answered, so a racing
    /// timeout and click resolve to whichever arrived first.
    pub fn answer(&mut self, option_index: usize) {
        if let State::Active(active) = &mut self.state {
            if active.reveal.is_some() {
                return;
            }

            let was_correct = active.questions[active.current].is_correct(option_index);
            if was_correct {
                active.score += 1;
            }

            active.reveal = Some(Reveal {
                selected: Some(option_index),
                was_correct,
                delay_left: REVEAL_DELAY,
            });
        }
    }

    /// Advances the session clock by one time unit.
    pub fn tick(&mut self) {
        let finished = match &mut self.state {
            State::Active(active) => {
                match &mut active.reveal {
                    None => {
                        if active.time_left > 0 {
                            active.time_left -= 1;
                        }
                        if active.time_left == 0 {
                            // Timeout counts as an incorrect answer.
                            active.reveal = Some(Reveal {
                                selected: None,
                                was_correct: false,
                                delay_left: REVEAL_DELAY,
                            });
                        }
                        None
                    }
                    Some(reveal) => {
                        if reveal.delay_left > 0 {
                            reveal.delay_left -= 1;
                        }
                        if reveal.delay_left > 0 {
                            None
                        } else if active.current + 1 < active.questions.len() {
                            active.current += 1;
                            active.time_left = QUESTION_TIME_LIMIT;
                            active.reveal = None;
                            None
                        } else {
                            Some(Summary {
                                score: active.score,
                                total: active.questions.len(),
                            })
                        }
                    }
                }
            }
            _ => None,
        };

        if let Some(summary) = finished {
            self.state = State::Results(summary);
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.state {
            State::Active(active) => active.questions.get(active.current),
            _ => None,
        }
    }

    /// 1-based position of the current question.
    pub fn question_number(&self) -> Option<usize> {
        match &self.state {
            State::Active(active) => Some(active.current + 1),
            _ => None,
        }
    }

    pub fn total_questions(&self) -> usize {
        match &self.state {
            State::Setup => 0,
            State::Active(active) => active.questions.len(),
            State::Results(summary) => summary.total,
        }
    }

    pub fn score(&self) -> usize {
        match &self.state {
            State::Setup => 0,
            State::Active(active) => active.score,
            State::Results(summary) => summary.score,
        }
    }

    pub fn time_left(&self) -> Option<u32> {
        match &self.state {
            State::Active(active) => Some(active.time_left),
            _ => None,
        }
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        match &self.state {
            State::Active(active) => active.reveal.as_ref(),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<Summary> {
        match &self.state {
            State::Results(summary) => Some(*summary),
            _ => None,
        }
    }
}
