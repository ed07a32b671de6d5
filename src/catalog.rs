//! Built-in catalog of card game variants and their display configuration.
//!
//! The catalog is constructed once at start-up and shared read-only through the
//! application state.

use std::collections::HashMap;

use serde::Serialize;

/// Selectable variant of a card game family.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Display hints shown next to the live score sheet.
///
/// Every field is optional so that an unconfigured variant serializes to `{}`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_tips: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scoring_info: Vec<&'static str>,
}

impl GameConfig {
    /// True when the variant carries no display hints.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Variant offered for game types the catalog does not know about.
const STANDARD_VARIANT: VariantDescriptor = VariantDescriptor {
    id: "basic",
    name: "Standard",
    description: "Standard rules",
};

/// Immutable lookup of variants and per-variant configuration.
#[derive(Debug, Clone)]
pub struct GameCatalog {
    game_types: Vec<&'static str>,
    variants: HashMap<&'static str, Vec<VariantDescriptor>>,
    configs: HashMap<&'static str, HashMap<&'static str, GameConfig>>,
    fallback: Vec<VariantDescriptor>,
}

impl GameCatalog {
    /// Catalog shipped with the binary.
    pub fn builtin() -> Self {
        let mut variants = HashMap::new();
        variants.insert(
            "bridge",
            vec![
                variant("draw", "Draw Bridge", "Two-player with card drawing phase"),
                variant(
                    "draw_discard",
                    "Draw and Discard",
                    "Choose to take or discard from stock",
                ),
                variant("double_dummy", "Double Dummy", "Four hands, two dummies exposed"),
                variant("single_dummy", "Single Dummy", "One dummy exposed before bidding"),
                variant("memory", "Memory Bridge", "No replacement cards, memory challenge"),
            ],
        );
        variants.insert(
            "rummy",
            vec![
                variant("basic", "Basic Rummy", "Classic rummy rules"),
                variant("gin", "Gin Rummy", "Two-player gin rummy"),
                variant("oklahoma", "Oklahoma Rummy", "Gin rummy with wild card"),
            ],
        );
        variants.insert(
            "canasta",
            vec![variant(
                "classic",
                "Classic Canasta",
                "Traditional four-player partnership",
            )],
        );

        let mut bridge_configs = HashMap::new();
        bridge_configs.insert(
            "draw",
            GameConfig {
                name: Some("Draw Bridge"),
                rules_url: Some("https://www.pagat.com/auctionwhist/honeymoon.html#draw"),
                quick_tips: vec![
                    "First 13 tricks at no trump - no need to follow suit",
                    "Winner draws first card, loser draws second",
                    "After drawing phase, bid like contract bridge",
                    "Final contract played with normal bridge rules",
                    "Scoring follows rubber bridge rules",
                ],
                scoring_info: vec![
                    "Overtricks: 20 points each (30 in NT)",
                    "Game: 100+ points below line",
                    "Small slam: 500 points (750 vulnerable)",
                    "Grand slam: 1000 points (1500 vulnerable)",
                ],
            },
        );
        let mut configs = HashMap::new();
        configs.insert("bridge", bridge_configs);

        Self {
            game_types: vec!["bridge", "rummy", "canasta"],
            variants,
            configs,
            fallback: vec![STANDARD_VARIANT],
        }
    }

    /// Game families shown on the landing page, in display order.
    pub fn game_types(&self) -> &[&'static str] {
        &self.game_types
    }

    /// Variants of a game type. Unknown types get a single standard variant.
    pub fn variants(&self, game_type: &str) -> &[VariantDescriptor] {
        self.variants
            .get(game_type)
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback)
    }

    /// The variant to pick without asking, when the game type only has one.
    pub fn sole_variant(&self, game_type: &str) -> Option<&VariantDescriptor> {
        match self.variants(game_type) {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Display configuration of a variant, empty when none is registered.
    pub fn config(&self, game_type: &str, variant: &str) -> GameConfig {
        self.configs
            .get(game_type)
            .and_then(|by_variant| by_variant.get(variant))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn variant(
    id: &'static str,
    name: &'static str,
    description: &'static str,
) -> VariantDescriptor {
    VariantDescriptor {
        id,
        name,
        description,
    }
}

/// Font Awesome icon class used to decorate a game type.
pub fn game_icon(game_type: &str) -> &'static str {
    match game_type {
        "bridge" => "fa-solid fa-diamond",
        "rummy" => "fa-solid fa-layer-group",
        "canasta" => "fa-solid fa-clone",
        "hearts" => "fa-solid fa-heart",
        "spades" => "fa-solid fa-spade",
        _ => "fa-solid fa-cards",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_and_rummy_offer_several_variants() {
        let catalog = GameCatalog::builtin();
        assert_eq!(catalog.variants("bridge").len(), 5);
        assert_eq!(catalog.variants("rummy").len(), 3);
        assert!(catalog.sole_variant("bridge").is_none());
        assert!(catalog.sole_variant("rummy").is_none());
    }

    #[test]
    fn canasta_has_a_single_variant() {
        let catalog = GameCatalog::builtin();
        assert_eq!(catalog.sole_variant("canasta").map(|v| v.id), Some("classic"));
    }

    #[test]
    fn unknown_game_type_falls_back_to_standard_rules() {
        let catalog = GameCatalog::builtin();
        assert_eq!(catalog.variants("euchre"), &[STANDARD_VARIANT]);
        assert_eq!(catalog.sole_variant("euchre").map(|v| v.id), Some("basic"));
    }

    #[test]
    fn only_draw_bridge_is_configured() {
        let catalog = GameCatalog::builtin();
        let draw = catalog.config("bridge", "draw");
        assert_eq!(draw.name, Some("Draw Bridge"));
        assert_eq!(draw.quick_tips.len(), 5);
        assert_eq!(draw.scoring_info.len(), 4);

        assert!(catalog.config("bridge", "memory").is_empty());
        assert!(catalog.config("rummy", "gin").is_empty());
        assert!(catalog.config("darts", "301").is_empty());
    }

    #[test]
    fn empty_config_serializes_to_an_empty_object() {
        let json = serde_json::to_value(GameConfig::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn icons_fall_back_for_unknown_types() {
        assert_eq!(game_icon("hearts"), "fa-solid fa-heart");
        assert_eq!(game_icon("cribbage"), "fa-solid fa-cards");
    }
}
