use kanaquiz::{Inventory, QuizMode, Script, generate_questions};
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn a_row_supports_a_full_glyph_to_romaji_round() {
    let inventory = Inventory::for_script(Script::Hiragana);
    let pool = inventory
        .characters_in_rows(&["あ行".to_string()])
        .expect("あ行 exists");
    let mut rng = rand::rngs::StdRng::seed_from_u64(77);

    let questions = generate_questions(&mut rng, &pool, QuizMode::GlyphToRomaji, 5)
        .expect("five vowels are enough for four options");

    assert_eq!(questions.len(), 5);

    let glyphs: HashSet<&str> = ["あ", "い", "う", "え", "お"].into_iter().collect();
    let readings: HashSet<&str> = ["a", "i", "u", "e", "o"].into_iter().collect();

    for question in &questions {
        let correct = question.correct();
        assert!(glyphs.contains(correct.glyph.as_str()));
        assert!(readings.contains(correct.romaji.as_str()));
        assert!(question.is_correct(question.correct_index));
    }
}

#[test]
fn four_character_row_reuses_the_whole_pool() {
    let inventory = Inventory::for_script(Script::Katakana);
    let pool: Vec<_> = inventory
        .characters_in_rows(&["ア行".to_string()])
        .expect("ア行 exists")
        .into_iter()
        .take(4)
        .collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(8);

    let questions = generate_questions(&mut rng, &pool, QuizMode::SoundToGlyph, 6)
        .expect("four characters are the minimum pool");

    let pool_glyphs: HashSet<String> = pool.iter().map(|c| c.glyph.clone()).collect();
    for question in &questions {
        let option_glyphs: HashSet<String> =
            question.options.iter().map(|c| c.glyph.clone()).collect();
        assert_eq!(option_glyphs, pool_glyphs);
    }
}

#[test]
fn deterministic_generation_from_seed() {
    let inventory = Inventory::for_script(Script::Hiragana);
    let pool = inventory
        .characters_in_rows(&["か行".to_string(), "さ行".to_string()])
        .expect("rows exist");

    let mut first_rng = rand::rngs::StdRng::seed_from_u64(99);
    let mut second_rng = rand::rngs::StdRng::seed_from_u64(99);

    let first = generate_questions(&mut first_rng, &pool, QuizMode::RomajiToGlyph, 10)
        .expect("pool is large enough");
    let second = generate_questions(&mut second_rng, &pool, QuizMode::RomajiToGlyph, 10)
        .expect("pool is large enough");

    assert_eq!(first, second);
}

#[test]
fn dakuten_rows_are_quizzable() {
    let inventory = Inventory::for_script(Script::Hiragana);
    let pool = inventory
        .characters_in_rows(&["が行".to_string(), "ぱ行".to_string()])
        .expect("voiced rows exist");
    let mut rng = rand::rngs::StdRng::seed_from_u64(4);

    let questions = generate_questions(&mut rng, &pool, QuizMode::GlyphToSound, 10)
        .expect("voiced rows have ten characters");

    for question in &questions {
        assert!(pool.iter().any(|c| c.glyph == question.correct().glyph));
    }
}
