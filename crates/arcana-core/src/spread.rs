//! Named positional spreads.
//!
//! A spread fixes how many cards are drawn and what each position stands
//! for. The built-in catalog is constructed once and shared read-only.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::language::Localized;

/// A named card layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    /// Catalog name, also used as the display name.
    pub name: String,
    /// Ordered position labels; one card is drawn per position.
    pub positions: Vec<Localized>,
    /// Short description of what the spread is for.
    pub description: Localized,
}

impl Spread {
    /// Number of cards drawn for this spread.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// All built-in spreads, in catalog order.
    pub fn all() -> &'static [Spread] {
        &BUILTIN
    }

    /// Look up a built-in spread by name.
    pub fn by_name(name: &str) -> Option<&'static Spread> {
        Self::all().iter().find(|s| s.name == name)
    }
}

fn loc(en: &str, cn: &str) -> Localized {
    Localized::new(en, cn)
}

static BUILTIN: LazyLock<Vec<Spread>> = LazyLock::new(|| {
    vec![
        Spread {
            name: "Single Card".to_string(),
            positions: vec![loc("Guidance", "指引")],
            description: loc("Quick insight or Yes/No.", "快速指引或是非题。"),
        },
        Spread {
            name: "Three Card (Time)".to_string(),
            positions: vec![
                loc("Past", "过去"),
                loc("Present", "现在"),
                loc("Future", "未来"),
            ],
            description: loc("Linear time flow analysis.", "时间流向分析。"),
        },
        Spread {
            name: "Three Card (Trinity)".to_string(),
            positions: vec![
                loc("Mind", "精神"),
                loc("Body", "身体"),
                loc("Spirit", "灵魂"),
            ],
            description: loc("Holistic self-analysis.", "身心灵全方位分析。"),
        },
        Spread {
            name: "The Lovers".to_string(),
            positions: vec![
                loc("You", "你"),
                loc("Them", "对方"),
                loc("Dynamic", "关系现状"),
                loc("Advice", "建议"),
            ],
            description: loc("Relationship analysis.", "关系分析。"),
        },
        Spread {
            name: "Celtic Cross".to_string(),
            positions: vec![
                loc("Present", "现状"),
                loc("Challenge", "挑战"),
                loc("Past", "过去"),
                loc("Recent Past", "近期"),
                loc("Goals", "目标"),
                loc("Future", "未来"),
                loc("Attitude", "态度"),
                loc("Environment", "环境"),
                loc("Hopes & Fears", "希望/恐惧"),
                loc("Outcome", "结果"),
            ],
            description: loc(
                "Comprehensive traditional spread.",
                "最传统的全方位深度分析。",
            ),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn five_builtin_spreads() {
        assert_eq!(Spread::all().len(), 5);
    }

    #[test]
    fn builtin_counts() {
        let counts: Vec<usize> = Spread::all().iter().map(Spread::count).collect();
        assert_eq!(counts, vec![1, 3, 3, 4, 10]);
    }

    #[test]
    fn every_position_label_has_both_languages() {
        for spread in Spread::all() {
            for position in &spread.positions {
                assert!(!position.en.is_empty(), "{}", spread.name);
                assert!(!position.cn.is_empty(), "{}", spread.name);
            }
            assert!(!spread.description.en.is_empty());
            assert!(!spread.description.cn.is_empty());
        }
    }

    #[test]
    fn by_name_finds_builtins() {
        assert_eq!(Spread::by_name("Single Card").unwrap().count(), 1);
        assert_eq!(Spread::by_name("Celtic Cross").unwrap().count(), 10);
        assert!(Spread::by_name("Horseshoe").is_none());
    }

    #[test]
    fn celtic_cross_labels_in_order() {
        let spread = Spread::by_name("Celtic Cross").unwrap();
        let labels: Vec<&str> = spread
            .positions
            .iter()
            .map(|p| p.text(Language::English))
            .collect();
        assert_eq!(
            labels,
            vec![
                "Present",
                "Challenge",
                "Past",
                "Recent Past",
                "Goals",
                "Future",
                "Attitude",
                "Environment",
                "Hopes & Fears",
                "Outcome",
            ]
        );
    }

    #[test]
    fn single_card_position_is_guidance() {
        let spread = Spread::by_name("Single Card").unwrap();
        assert_eq!(spread.positions[0].text(Language::English), "Guidance");
        assert_eq!(spread.positions[0].text(Language::Chinese), "指引");
    }
}
