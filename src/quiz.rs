use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::character::Character;

/// Every question carries exactly four options: the correct character and
/// three distractors.
pub const OPTION_COUNT: usize = 4;

/// Quiz type describing which field of a character is the prompt and which is
/// the answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum QuizMode {
    /// Plays the character's sound and expects the glyph as the answer.
    SoundToGlyph,
    /// Shows the glyph and expects its sound as the answer.
    GlyphToSound,
    /// Shows the romaji and expects the glyph as the answer.
    RomajiToGlyph,
    /// Shows the glyph and expects the romaji as the answer.
    GlyphToRomaji,
}

impl QuizMode {
    pub const ALL: [QuizMode; 4] = [
        QuizMode::SoundToGlyph,
        QuizMode::GlyphToSound,
        QuizMode::RomajiToGlyph,
        QuizMode::GlyphToRomaji,
    ];

    pub fn title(self) -> &'static str {
        match self {
            QuizMode::SoundToGlyph => "Sound → Character",
            QuizMode::GlyphToSound => "Character → Sound",
            QuizMode::RomajiToGlyph => "Romaji → Character",
            QuizMode::GlyphToRomaji => "Character → Romaji",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuizMode::SoundToGlyph => "Listen to sound, pick character",
            QuizMode::GlyphToSound => "See character, pick sound",
            QuizMode::RomajiToGlyph => "Read romaji, pick character",
            QuizMode::GlyphToRomaji => "See character, pick romaji",
        }
    }

    pub fn prompt_for(self, correct: &Character) -> String {
        match self {
            QuizMode::SoundToGlyph => {
                format!("Which character makes the \"{}\" sound?", correct.romaji)
            }
            QuizMode::GlyphToSound => format!("What sound does \"{}\" make?", correct.glyph),
            QuizMode::RomajiToGlyph => {
                format!("Which character represents \"{}\"?", correct.romaji)
            }
            QuizMode::GlyphToRomaji => format!("What is the romaji for \"{}\"?", correct.glyph),
        }
    }

    /// The field compared against the correct answer, also the field shown on
    /// option buttons.
    pub fn answer_field(self, character: &Character) -> &str {
        match self {
            QuizMode::SoundToGlyph | QuizMode::RomajiToGlyph => &character.glyph,
            QuizMode::GlyphToSound | QuizMode::GlyphToRomaji => &character.romaji,
        }
    }
}

/// A single generated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub mode: QuizMode,
    /// Text shown as the question prompt.
    pub prompt: String,
    /// Answer options. Length is always [`OPTION_COUNT`], glyphs distinct.
    pub options: Vec<Character>,
    /// Index in `options` holding the correct character.
    pub correct_index: usize,
}

impl Question {
    pub fn correct(&self) -> &Character {
        &self.options[self.correct_index]
    }

    /// Exact string equality on the mode's answer-key field.
    pub fn is_correct(&self, option_index: usize) -> bool {
        match self.options.get(option_index) {
            Some(option) => {
                self.mode.answer_field(option) == self.mode.answer_field(self.correct())
            }
            None => false,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("requires at least {} distinct characters but only {available} selected", OPTION_COUNT)]
    InsufficientPool { available: usize },
    #[error("question count must be at least 1")]
    NoQuestionsRequested,
}

/// Generates `count` questions from the character pool.
///
/// The correct character is drawn with replacement across questions, so a
/// small pool repeats prompts rather than failing. Distractors are drawn
/// without replacement from the rest of the pool, which guarantees four
/// distinct options. Deterministic for a seeded RNG.
///
/// # Errors
/// * Returns [`QuizError::NoQuestionsRequested`] if `count` is zero.
/// * Returns [`QuizError::InsufficientPool`] if the pool holds fewer than
///   [`OPTION_COUNT`] distinct glyphs.
pub fn generate_questions<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[Character],
    mode: QuizMode,
    count: usize,
) -> Result<Vec<Question>, QuizError> {
    if count == 0 {
        return Err(QuizError::NoQuestionsRequested);
    }

    let mut seen = HashSet::new();
    let unique: Vec<&Character> = pool
        .iter()
        .filter(|character| seen.insert(character.glyph.as_str()))
        .collect();

    if unique.len() < OPTION_COUNT {
        return Err(QuizError::InsufficientPool {
            available: unique.len(),
        });
    }

    let mut questions = Vec::with_capacity(count);

    for _ in 0..count {
        let correct_pool_index = rng.gen_range(0..unique.len());
        let correct = unique[correct_pool_index];

        let candidates: Vec<&Character> = unique
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != correct_pool_index)
            .map(|(_, character)| *character)
            .collect();

        let mut options: Vec<Character> = candidates
            .choose_multiple(rng, OPTION_COUNT - 1)
            .map(|character| (*character).clone())
            .collect();
        options.push(correct.clone());
        options.shuffle(rng);

        let correct_index = options
            .iter()
            .position(|option| option.glyph == correct.glyph)
            .expect("correct option must exist after shuffle");

        questions.push(Question {
            mode,
            prompt: mode.prompt_for(correct),
            options,
            correct_index,
        });
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Script;
    use crate::inventory::Inventory;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn a_and_ka_rows() -> Vec<Character> {
        Inventory::for_script(Script::Hiragana)
            .characters_in_rows(&["あ行".to_string(), "か行".to_string()])
            .expect("rows exist")
    }

    #[test]
    fn generates_requested_number_of_questions() {
        let pool = a_and_ka_rows();
        let mut rng = StdRng::seed_from_u64(42);

        for mode in QuizMode::ALL {
            let questions =
                generate_questions(&mut rng, &pool, mode, 10).expect("pool is large enough");

            assert_eq!(questions.len(), 10);
            for question in &questions {
                assert_eq!(question.mode, mode);
                assert_eq!(question.options.len(), OPTION_COUNT);
                assert!(question.correct_index < OPTION_COUNT);
            }
        }
    }

    #[test]
    fn options_have_distinct_glyphs() {
        let pool = a_and_ka_rows();
        let mut rng = StdRng::seed_from_u64(7);

        let questions = generate_questions(&mut rng, &pool, QuizMode::RomajiToGlyph, 30)
            .expect("pool is large enough");

        for question in &questions {
            let mut glyphs = HashSet::new();
            for option in &question.options {
                assert!(glyphs.insert(option.glyph.clone()));
            }
        }
    }

    #[test]
    fn exactly_one_option_matches_the_answer_key() {
        let pool = a_and_ka_rows();
        let mut rng = StdRng::seed_from_u64(11);

        let questions = generate_questions(&mut rng, &pool, QuizMode::GlyphToRomaji, 20)
            .expect("pool is large enough");

        for question in &questions {
            let matching = (0..question.options.len())
                .filter(|&index| question.is_correct(index))
                .count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn four_member_pool_uses_the_whole_pool() {
        let pool: Vec<Character> = a_and_ka_rows().into_iter().take(4).collect();
        let mut rng = StdRng::seed_from_u64(3);

        let questions = generate_questions(&mut rng, &pool, QuizMode::SoundToGlyph, 8)
            .expect("four characters are enough");

        let pool_glyphs: HashSet<&str> = pool.iter().map(|c| c.glyph.as_str()).collect();
        for question in &questions {
            let option_glyphs: HashSet<&str> =
                question.options.iter().map(|c| c.glyph.as_str()).collect();
            assert_eq!(option_glyphs, pool_glyphs);
        }
    }

    #[test]
    fn duplicate_pool_entries_do_not_duplicate_options() {
        let mut pool = a_and_ka_rows();
        pool.extend(a_and_ka_rows());
        let mut rng = StdRng::seed_from_u64(5);

        let questions = generate_questions(&mut rng, &pool, QuizMode::GlyphToSound, 10)
            .expect("deduplicated pool is large enough");

        for question in &questions {
            let glyphs: HashSet<&str> = question.options.iter().map(|c| c.glyph.as_str()).collect();
            assert_eq!(glyphs.len(), OPTION_COUNT);
        }
    }

    #[test]
    fn prompt_references_the_expected_field() {
        let pool = a_and_ka_rows();
        let mut rng = StdRng::seed_from_u64(9);

        let questions = generate_questions(&mut rng, &pool, QuizMode::GlyphToSound, 5)
            .expect("pool is large enough");
        for question in &questions {
            assert_eq!(
                question.prompt,
                format!("What sound does \"{}\" make?", question.correct().glyph)
            );
        }

        let questions = generate_questions(&mut rng, &pool, QuizMode::RomajiToGlyph, 5)
            .expect("pool is large enough");
        for question in &questions {
            assert_eq!(
                question.prompt,
                format!(
                    "Which character represents \"{}\"?",
                    question.correct().romaji
                )
            );
        }
    }

    #[test]
    fn error_when_pool_is_too_small() {
        let pool: Vec<Character> = a_and_ka_rows().into_iter().take(3).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let error = generate_questions(&mut rng, &pool, QuizMode::SoundToGlyph, 5)
            .expect_err("three characters are not enough");

        assert_eq!(error, QuizError::InsufficientPool { available: 3 });
    }

    #[test]
    fn error_when_no_questions_requested() {
        let pool = a_and_ka_rows();
        let mut rng = StdRng::seed_from_u64(2);

        let error = generate_questions(&mut rng, &pool, QuizMode::GlyphToRomaji, 0)
            .expect_err("zero questions is invalid");

        assert_eq!(error, QuizError::NoQuestionsRequested);
    }
}
