//! The fixed 78-card catalog.
//!
//! 22 major arcana plus 4 suits of 14 ranks, built once at startup and
//! shared immutably afterwards. Artwork resolution is delegated to an
//! [`ImageSource`]; a missing asset leaves the card imageless rather than
//! failing construction.

use serde::{Deserialize, Serialize};

use crate::assets::{ImageSource, NoImages};
use crate::language::Localized;

/// The four minor-arcana suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Wands (权杖).
    Wands,
    /// Cups (圣杯).
    Cups,
    /// Swords (宝剑).
    Swords,
    /// Pentacles (星币).
    Pentacles,
}

impl Suit {
    /// All suits in catalog order.
    pub fn all() -> &'static [Self] {
        &[Self::Wands, Self::Cups, Self::Swords, Self::Pentacles]
    }

    /// English suit name.
    pub fn name_en(self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }

    /// Chinese suit name.
    pub fn name_cn(self) -> &'static str {
        match self {
            Self::Wands => "权杖",
            Self::Cups => "圣杯",
            Self::Swords => "宝剑",
            Self::Pentacles => "星币",
        }
    }

    /// Lowercase segment used in card ids (`wands-01`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    /// Directory the suit's artwork lives under.
    fn asset_folder(self) -> &'static str {
        self.name_en()
    }

    /// File-name prefix of the suit's artwork. Pentacles files are
    /// abbreviated on disk.
    fn asset_prefix(self) -> &'static str {
        match self {
            Self::Pentacles => "Pents",
            other => other.name_en(),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_en())
    }
}

/// Major arcana: English name, Chinese name, artwork file name.
const MAJOR_ARCANA: &[(&str, &str, &str)] = &[
    ("The Fool", "愚者", "RWS_Tarot_00_Fool.jpg"),
    ("The Magician", "魔术师", "RWS_Tarot_01_Magician.jpg"),
    ("The High Priestess", "女祭司", "RWS_Tarot_02_High_Priestess.jpg"),
    ("The Empress", "皇后", "RWS_Tarot_03_Empress.jpg"),
    ("The Emperor", "皇帝", "RWS_Tarot_04_Emperor.jpg"),
    ("The Hierophant", "教皇", "RWS_Tarot_05_Hierophant.jpg"),
    ("The Lovers", "恋人", "RWS_Tarot_06_Lovers.jpg"),
    ("The Chariot", "战车", "RWS_Tarot_07_Chariot.jpg"),
    ("Strength", "力量", "RWS_Tarot_08_Strength.jpg"),
    ("The Hermit", "隐士", "RWS_Tarot_09_Hermit.jpg"),
    ("Wheel of Fortune", "命运之轮", "RWS_Tarot_10_Wheel_of_Fortune.jpg"),
    ("Justice", "正义", "RWS_Tarot_11_Justice.jpg"),
    ("The Hanged Man", "倒吊人", "RWS_Tarot_12_Hanged_Man.jpg"),
    ("Death", "死神", "RWS_Tarot_13_Death.jpg"),
    ("Temperance", "节制", "RWS_Tarot_14_Temperance.jpg"),
    ("The Devil", "恶魔", "RWS_Tarot_15_Devil.jpg"),
    ("The Tower", "高塔", "RWS_Tarot_16_Tower.jpg"),
    ("The Star", "星星", "RWS_Tarot_17_Star.jpg"),
    ("The Moon", "月亮", "RWS_Tarot_18_Moon.jpg"),
    ("The Sun", "太阳", "RWS_Tarot_19_Sun.jpg"),
    ("Judgement", "审判", "RWS_Tarot_20_Judgement.jpg"),
    ("The World", "世界", "RWS_Tarot_21_World.jpg"),
];

/// Minor ranks: English name, Chinese name, two-digit asset number.
const RANKS: &[(&str, &str, &str)] = &[
    ("Ace", "王牌", "01"),
    ("Two", "2", "02"),
    ("Three", "3", "03"),
    ("Four", "4", "04"),
    ("Five", "5", "05"),
    ("Six", "6", "06"),
    ("Seven", "7", "07"),
    ("Eight", "8", "08"),
    ("Nine", "9", "09"),
    ("Ten", "10", "10"),
    ("Page", "侍从", "11"),
    ("Knight", "骑士", "12"),
    ("Queen", "皇后", "13"),
    ("King", "国王", "14"),
];

/// A single tarot card.
///
/// Immutable after catalog construction; readings reference cards, they
/// never copy or mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, stable across runs (`major-00`, `cups-01`, ...).
    pub id: String,
    /// Display name.
    pub name: Localized,
    /// Encoded image reference, if the asset resolved.
    pub image: Option<String>,
    /// Upright meaning text.
    pub meaning_up: Localized,
    /// Reversed meaning text.
    pub meaning_rev: Localized,
}

/// An ordered, immutable card catalog.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard 78-card deck, resolving artwork through `images`.
    ///
    /// A card whose asset cannot be resolved is still included, imageless.
    pub fn standard(images: &dyn ImageSource) -> Self {
        let mut cards = Vec::with_capacity(78);

        for (index, &(name_en, name_cn, file)) in MAJOR_ARCANA.iter().enumerate() {
            let asset = format!("Major Arcana/{file}");
            cards.push(Card {
                id: format!("major-{index:02}"),
                name: Localized::new(name_en, name_cn),
                image: images.resolve(&asset),
                meaning_up: Localized::new("Major Arcana Archetype", "大阿卡纳原型"),
                meaning_rev: Localized::new("Blocked Archetype", "原型受阻"),
            });
        }

        for &suit in Suit::all() {
            for &(rank_en, rank_cn, number) in RANKS {
                let asset = format!(
                    "Minor Arcana/{}/{}{number}.jpg",
                    suit.asset_folder(),
                    suit.asset_prefix()
                );
                cards.push(Card {
                    id: format!("{}-{number}", suit.key()),
                    name: Localized::new(
                        &format!("{rank_en} of {}", suit.name_en()),
                        &format!("{}{rank_cn}", suit.name_cn()),
                    ),
                    image: images.resolve(&asset),
                    meaning_up: Localized::new(
                        &format!("Energy of {}", suit.name_en()),
                        &format!("{}的正位能量", suit.name_cn()),
                    ),
                    meaning_rev: Localized::new(
                        &format!("Inverted {}", suit.name_en()),
                        &format!("{}的逆位能量", suit.name_cn()),
                    ),
                });
            }
        }

        Self { cards }
    }

    /// Build the standard deck with no artwork.
    pub fn without_images() -> Self {
        Self::standard(&NoImages)
    }

    /// Build a deck from a caller-supplied catalog. Card ids are expected
    /// to be unique.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The cards, in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the catalog.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}
