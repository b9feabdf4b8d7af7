pub mod character;
pub mod chart;
pub mod inventory;
pub mod quiz;
pub mod session;
pub mod wasm;

pub use character::{Character, Script};
pub use chart::ChartState;
pub use inventory::{BASIC_ROW_COUNT, FilterError, Inventory, KanaRow};
pub use quiz::{OPTION_COUNT, Question, QuizError, QuizMode, generate_questions};
pub use session::{
    Phase, QUESTION_TIME_LIMIT, QuestionCount, QuizSession, REVEAL_DELAY, Reveal, SessionConfig,
    SessionError, Summary,
};
