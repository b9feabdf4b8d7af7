use std::collections::HashSet;

use crate::character::{Character, Script};

/// A traditional kana row: 3-5 characters sharing a consonant.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KanaRow {
    pub label: String,
    pub characters: Vec<Character>,
}

/// The full character table for one script, basic rows followed by the
/// dakuten/handakuten rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    script: Script,
    rows: Vec<KanaRow>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("select at least one character row")]
    EmptySelection,
    #[error("unknown character row: {label}")]
    UnknownRow { label: String },
}

impl Inventory {
    pub fn for_script(script: Script) -> Self {
        let rows = match script {
            Script::Hiragana => hiragana_rows(),
            Script::Katakana => katakana_rows(),
        };

        Self { script, rows }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn rows(&self) -> &[KanaRow] {
        &self.rows
    }

    /// Labels of the basic rows, the selectable units on the practice setup
    /// screen.
    pub fn basic_row_labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .take(BASIC_ROW_COUNT)
            .map(|row| row.label.clone())
            .collect()
    }

    pub fn row_labels(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.label.clone()).collect()
    }

    /// Every character in table order.
    pub fn characters(&self) -> Vec<Character> {
        self.rows
            .iter()
            .flat_map(|row| row.characters.iter().cloned())
            .collect()
    }

    pub fn find(&self, glyph: &str) -> Option<&Character> {
        self.rows
            .iter()
            .flat_map(|row| row.characters.iter())
            .find(|character| character.glyph == glyph)
    }

    /// Flattens the selected rows into a deduplicated character pool,
    /// preserving table order.
    ///
    /// # Errors
    /// * [`FilterError::EmptySelection`] when `labels` is empty.
    /// * [`FilterError::UnknownRow`] when a label does not name a row of this
    ///   script.
    pub fn characters_in_rows(&self, labels: &[String]) -> Result<Vec<Character>, FilterError> {
        if labels.is_empty() {
            return Err(FilterError::EmptySelection);
        }

        for label in labels {
            if !self.rows.iter().any(|row| &row.label == label) {
                return Err(FilterError::UnknownRow {
                    label: label.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        let mut pool = Vec::new();

        for row in &self.rows {
            if !labels.contains(&row.label) {
                continue;
            }

            for character in &row.characters {
                if seen.insert(character.glyph.clone()) {
                    pool.push(character.clone());
                }
            }
        }

        Ok(pool)
    }
}

/// Number of basic (unvoiced) rows per script; the remaining rows carry
/// dakuten and handakuten forms.
pub const BASIC_ROW_COUNT: usize = 10;

fn row(label: &str, entries: &[(&str, &str, &str)]) -> KanaRow {
    KanaRow {
        label: label.to_string(),
        characters: entries
            .iter()
            .map(|(glyph, romaji, example)| Character::new(glyph, romaji, example))
            .collect(),
    }
}

fn hiragana_rows() -> Vec<KanaRow> {
    vec![
        row(
            "あ行",
            &[
                ("あ", "a", "あり (ant)"),
                ("い", "i", "いえ (house)"),
                ("う", "u", "うみ (sea)"),
                ("え", "e", "えき (station)"),
                ("お", "o", "おに (demon)"),
            ],
        ),
        row(
            "か行",
            &[
                ("か", "ka", "かに (crab)"),
                ("き", "ki", "きつね (fox)"),
                ("く", "ku", "くも (cloud)"),
                ("け", "ke", "けんか (fight)"),
                ("こ", "ko", "こども (child)"),
            ],
        ),
        row(
            "さ行",
            &[
                ("さ", "sa", "さくら (cherry)"),
                ("し", "shi", "しろ (white)"),
                ("す", "su", "すし (sushi)"),
                ("せ", "se", "せんせい (teacher)"),
                ("そ", "so", "そら (sky)"),
            ],
        ),
        row(
            "た行",
            &[
                ("た", "ta", "たいよう (sun)"),
                ("ち", "chi", "ちいさい (small)"),
                ("つ", "tsu", "つき (moon)"),
                ("て", "te", "て (hand)"),
                ("と", "to", "とり (bird)"),
            ],
        ),
        row(
            "な行",
            &[
                ("な", "na", "なまえ (name)"),
                ("に", "ni", "にほん (Japan)"),
                ("ぬ", "nu", "ぬいぐるみ (doll)"),
                ("ね", "ne", "ねこ (cat)"),
                ("の", "no", "のど (throat)"),
            ],
        ),
        row(
            "は行",
            &[
                ("は", "ha", "はな (flower)"),
                ("ひ", "hi", "ひかり (light)"),
                ("ふ", "fu", "ふじ (Mt. Fuji)"),
                ("へ", "he", "へび (snake)"),
                ("ほ", "ho", "ほん (book)"),
            ],
        ),
        row(
            "ま行",
            &[
                ("ま", "ma", "まつり (festival)"),
                ("み", "mi", "みず (water)"),
                ("む", "mu", "むし (bug)"),
                ("め", "me", "め (eye)"),
                ("も", "mo", "もり (forest)"),
            ],
        ),
        row(
            "や行",
            &[
                ("や", "ya", "やま (mountain)"),
                ("ゆ", "yu", "ゆき (snow)"),
                ("よ", "yo", "よる (night)"),
            ],
        ),
        row(
            "ら行",
            &[
                ("ら", "ra", "らいおん (lion)"),
                ("り", "ri", "りんご (apple)"),
                ("る", "ru", "るーる (rule)"),
                ("れ", "re", "れんしゅう (practice)"),
                ("ろ", "ro", "ろうそく (candle)"),
            ],
        ),
        row(
            "わ行",
            &[
                ("わ", "wa", "わたし (I/me)"),
                ("を", "wo", "particle"),
                ("ん", "n", "ほん (book)"),
            ],
        ),
        row(
            "が行",
            &[
                ("が", "ga", "がっこう (school)"),
                ("ぎ", "gi", "ぎゅうにく (beef)"),
                ("ぐ", "gu", "ぐんじ (military)"),
                ("げ", "ge", "げつようび (Monday)"),
                ("ご", "go", "ごはん (rice)"),
            ],
        ),
        row(
            "ざ行",
            &[
                ("ざ", "za", "ざっし (magazine)"),
                ("じ", "ji", "じかん (time)"),
                ("ず", "zu", "みず (water)"),
                ("ぜ", "ze", "ぜんぶ (all)"),
                ("ぞ", "zo", "ぞう (elephant)"),
            ],
        ),
        row(
            "だ行",
            &[
                ("だ", "da", "だいがく (university)"),
                ("ぢ", "di", "はなぢ (nosebleed)"),
                ("づ", "du", "つづく (continue)"),
                ("で", "de", "でんしゃ (train)"),
                ("ど", "do", "どうぶつ (animal)"),
            ],
        ),
        row(
            "ば行",
            &[
                ("ば", "ba", "ばら (rose)"),
                ("び", "bi", "びじゅつ (art)"),
                ("ぶ", "bu", "ぶた (pig)"),
                ("べ", "be", "べんきょう (study)"),
                ("ぼ", "bo", "ぼうし (hat)"),
            ],
        ),
        row(
            "ぱ行",
            &[
                ("ぱ", "pa", "ぱん (bread)"),
                ("ぴ", "pi", "ぴんく (pink)"),
                ("ぷ", "pu", "ぷーる (pool)"),
                ("ぺ", "pe", "ぺん (pen)"),
                ("ぽ", "po", "ぽすと (post)"),
            ],
        ),
    ]
}

fn katakana_rows() -> Vec<KanaRow> {
    vec![
        row(
            "ア行",
            &[
                ("ア", "a", "アニメ (anime)"),
                ("イ", "i", "イチゴ (strawberry)"),
                ("ウ", "u", "ウサギ (rabbit)"),
                ("エ", "e", "エレベーター (elevator)"),
                ("オ", "o", "オレンジ (orange)"),
            ],
        ),
        row(
            "カ行",
            &[
                ("カ", "ka", "カメラ (camera)"),
                ("キ", "ki", "キリン (giraffe)"),
                ("ク", "ku", "クッキー (cookie)"),
                ("ケ", "ke", "ケーキ (cake)"),
                ("コ", "ko", "コーヒー (coffee)"),
            ],
        ),
        row(
            "サ行",
            &[
                ("サ", "sa", "サッカー (soccer)"),
                ("シ", "shi", "シャツ (shirt)"),
                ("ス", "su", "スープ (soup)"),
                ("セ", "se", "セーター (sweater)"),
                ("ソ", "so", "ソファー (sofa)"),
            ],
        ),
        row(
            "タ行",
            &[
                ("タ", "ta", "タクシー (taxi)"),
                ("チ", "chi", "チーズ (cheese)"),
                ("ツ", "tsu", "ツアー (tour)"),
                ("テ", "te", "テレビ (TV)"),
                ("ト", "to", "トマト (tomato)"),
            ],
        ),
        row(
            "ナ行",
            &[
                ("ナ", "na", "ナイフ (knife)"),
                ("ニ", "ni", "ニュース (news)"),
                ("ヌ", "nu", "ヌードル (noodle)"),
                ("ネ", "ne", "ネクタイ (necktie)"),
                ("ノ", "no", "ノート (notebook)"),
            ],
        ),
        row(
            "ハ行",
            &[
                ("ハ", "ha", "ハンバーガー (hamburger)"),
                ("ヒ", "hi", "ヒーロー (hero)"),
                ("フ", "fu", "フォーク (fork)"),
                ("ヘ", "he", "ヘリコプター (helicopter)"),
                ("ホ", "ho", "ホテル (hotel)"),
            ],
        ),
        row(
            "マ行",
            &[
                ("マ", "ma", "マウス (mouse)"),
                ("ミ", "mi", "ミルク (milk)"),
                ("ム", "mu", "ムービー (movie)"),
                ("メ", "me", "メニュー (menu)"),
                ("モ", "mo", "モニター (monitor)"),
            ],
        ),
        row(
            "ヤ行",
            &[
                ("ヤ", "ya", "ヤード (yard)"),
                ("ユ", "yu", "ユーザー (user)"),
                ("ヨ", "yo", "ヨーグルト (yogurt)"),
            ],
        ),
        row(
            "ラ行",
            &[
                ("ラ", "ra", "ライス (rice)"),
                ("リ", "ri", "リンゴ (apple)"),
                ("ル", "ru", "ルール (rule)"),
                ("レ", "re", "レストラン (restaurant)"),
                ("ロ", "ro", "ロボット (robot)"),
            ],
        ),
        row(
            "ワ行",
            &[
                ("ワ", "wa", "ワイン (wine)"),
                ("ヲ", "wo", "particle"),
                ("ン", "n", "アンパン (bread)"),
            ],
        ),
        row(
            "ガ行",
            &[
                ("ガ", "ga", "ガソリン (gasoline)"),
                ("ギ", "gi", "ギター (guitar)"),
                ("グ", "gu", "グループ (group)"),
                ("ゲ", "ge", "ゲーム (game)"),
                ("ゴ", "go", "ゴルフ (golf)"),
            ],
        ),
        row(
            "ザ行",
            &[
                ("ザ", "za", "ザッカー (soccer)"),
                ("ジ", "ji", "ジュース (juice)"),
                ("ズ", "zu", "ズボン (pants)"),
                ("ゼ", "ze", "ゼロ (zero)"),
                ("ゾ", "zo", "ゾーン (zone)"),
            ],
        ),
        row(
            "ダ行",
            &[
                ("ダ", "da", "ダンス (dance)"),
                ("ヂ", "di", "ラジオ (radio)"),
                ("ヅ", "du", "ヅキ (moon)"),
                ("デ", "de", "デスク (desk)"),
                ("ド", "do", "ドア (door)"),
            ],
        ),
        row(
            "バ行",
            &[
                ("バ", "ba", "バス (bus)"),
                ("ビ", "bi", "ビール (beer)"),
                ("ブ", "bu", "ブラシ (brush)"),
                ("ベ", "be", "ベッド (bed)"),
                ("ボ", "bo", "ボール (ball)"),
            ],
        ),
        row(
            "パ行",
            &[
                ("パ", "pa", "パン (bread)"),
                ("ピ", "pi", "ピザ (pizza)"),
                ("プ", "pu", "プール (pool)"),
                ("ペ", "pe", "ペン (pen)"),
                ("ポ", "po", "ポスト (post)"),
            ],
        ),
    ]
}
