use std::fmt;

/// The two kana syllabaries. Their glyph sets are disjoint, so a glyph
/// identifies a character only together with its script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub fn label(self) -> &'static str {
        match self {
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single kana character used for charts and quiz questions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Character {
    /// The kana glyph itself.
    pub glyph: String,
    /// Romanized reading, lowercase.
    pub romaji: String,
    /// Example word gloss shown in chart tooltips, when one exists.
    #[serde(default)]
    pub example: Option<String>,
}

impl Character {
    pub fn new(glyph: &str, romaji: &str, example: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            romaji: romaji.to_string(),
            example: (!example.is_empty()).then(|| example.to_string()),
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.glyph, self.romaji)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drops_empty_example() {
        let character = Character::new("あ", "a", "");
        assert!(character.example.is_none());

        let character = Character::new("あ", "a", "あり (ant)");
        assert_eq!(character.example.as_deref(), Some("あり (ant)"));
    }

    #[test]
    fn display_combines_glyph_and_reading() {
        let character = Character::new("し", "shi", "しろ (white)");
        assert_eq!(format!("{}", character), "し (shi)");
    }

    #[test]
    fn example_defaults_to_none_on_missing_field() {
        let json = r#"{ "glyph": "ん", "romaji": "n" }"#;
        let parsed: Character =
            serde_json::from_str(json).expect("character should parse without example");

        assert!(parsed.example.is_none());
        assert_eq!(parsed.romaji, "n");
    }

    #[test]
    fn script_serializes_lowercase() {
        let json = serde_json::to_string(&Script::Katakana).expect("script should serialize");
        assert_eq!(json, "\"katakana\"");

        let decoded: Script =
            serde_json::from_str("\"hiragana\"").expect("script should round-trip");
        assert_eq!(decoded, Script::Hiragana);
    }
}
