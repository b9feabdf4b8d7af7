use std::collections::{HashMap, HashSet};

use crate::character::{Character, Script};
use crate::inventory::Inventory;

/// Ephemeral UI state for the character charts: active script tab, hover,
/// selection, learned tracking, and the romaji toggle.
///
/// Learned glyphs are kept per script, since the glyph namespaces are
/// disjoint; everything else is transient and resets on a tab switch.
#[derive(Debug, Clone)]
pub struct ChartState {
    inventory: Inventory,
    hovered: Option<String>,
    selected: Option<Character>,
    romaji_visible: bool,
    practicing: bool,
    learned: HashMap<Script, HashSet<String>>,
}

impl ChartState {
    pub fn new(script: Script) -> Self {
        Self {
            inventory: Inventory::for_script(script),
            hovered: None,
            selected: None,
            romaji_visible: true,
            practicing: false,
            learned: HashMap::new(),
        }
    }

    pub fn script(&self) -> Script {
        self.inventory.script()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Switches the active tab. Hover, selection, and practice mode reset;
    /// learned sets survive in their own script's namespace.
    pub fn set_script(&mut self, script: Script) {
        if script == self.script() {
            return;
        }

        self.inventory = Inventory::for_script(script);
        self.hovered = None;
        self.selected = None;
        self.practicing = false;
    }

    pub fn hover(&mut self, glyph: &str) {
        if self.inventory.find(glyph).is_some() {
            self.hovered = Some(glyph.to_string());
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Records the clicked character for the detail view. Returns it so the
    /// caller can also request audio playback.
    pub fn select(&mut self, glyph: &str) -> Option<&Character> {
        self.selected = self.inventory.find(glyph).cloned();
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Character> {
        self.selected.as_ref()
    }

    /// Set-membership flip: add when absent, remove when present. Unknown
    /// glyphs are ignored.
    pub fn toggle_learned(&mut self, glyph: &str) {
        if self.inventory.find(glyph).is_none() {
            return;
        }

        let learned = self.learned.entry(self.script()).or_default();
        if !learned.remove(glyph) {
            learned.insert(glyph.to_string());
        }
    }

    pub fn is_learned(&self, glyph: &str) -> bool {
        self.learned
            .get(&self.script())
            .is_some_and(|learned| learned.contains(glyph))
    }

    pub fn learned_count(&self) -> usize {
        self.learned
            .get(&self.script())
            .map_or(0, |learned| learned.len())
    }

    pub fn romaji_visible(&self) -> bool {
        self.romaji_visible
    }

    pub fn toggle_romaji(&mut self) {
        self.romaji_visible = !self.romaji_visible;
    }

    pub fn practicing(&self) -> bool {
        self.practicing
    }

    pub fn enter_practice(&mut self) {
        self.practicing = true;
    }

    pub fn exit_practice(&mut self) {
        self.practicing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_and_selection_resolve_against_the_inventory() {
        let mut chart = ChartState::new(Script::Hiragana);

        chart.hover("ね");
        assert_eq!(chart.hovered(), Some("ね"));

        chart.hover("ネ");
        assert_eq!(chart.hovered(), Some("ね"), "katakana glyph is not in this chart");

        let selected = chart.select("ふ").expect("ふ is in the chart").clone();
        assert_eq!(selected.romaji, "fu");
        assert_eq!(chart.selected(), Some(&selected));
    }

    #[test]
    fn toggle_learned_flips_membership() {
        let mut chart = ChartState::new(Script::Katakana);

        chart.toggle_learned("ア");
        chart.toggle_learned("イ");
        assert!(chart.is_learned("ア"));
        assert_eq!(chart.learned_count(), 2);

        chart.toggle_learned("ア");
        assert!(!chart.is_learned("ア"));
        assert_eq!(chart.learned_count(), 1);

        chart.toggle_learned("x");
        assert_eq!(chart.learned_count(), 1);
    }

    #[test]
    fn switching_scripts_resets_transient_state() {
        let mut chart = ChartState::new(Script::Hiragana);
        chart.hover("あ");
        chart.select("あ");
        chart.enter_practice();

        chart.set_script(Script::Katakana);

        assert_eq!(chart.script(), Script::Katakana);
        assert!(chart.hovered().is_none());
        assert!(chart.selected().is_none());
        assert!(!chart.practicing());
    }

    #[test]
    fn learned_sets_are_kept_per_script() {
        let mut chart = ChartState::new(Script::Hiragana);
        chart.toggle_learned("あ");
        chart.toggle_learned("か");

        chart.set_script(Script::Katakana);
        assert_eq!(chart.learned_count(), 0);
        chart.toggle_learned("ア");
        assert_eq!(chart.learned_count(), 1);

        chart.set_script(Script::Hiragana);
        assert_eq!(chart.learned_count(), 2);
        assert!(chart.is_learned("か"));
    }

    #[test]
    fn switching_to_the_same_script_is_a_no_op() {
        let mut chart = ChartState::new(Script::Hiragana);
        chart.select("め");
        chart.set_script(Script::Hiragana);
        assert!(chart.selected().is_some());
    }

    #[test]
    fn romaji_toggle_is_independent_of_tab_switches() {
        let mut chart = ChartState::new(Script::Hiragana);
        assert!(chart.romaji_visible());

        chart.toggle_romaji();
        assert!(!chart.romaji_visible());

        chart.set_script(Script::Katakana);
        assert!(!chart.romaji_visible());
    }
}
