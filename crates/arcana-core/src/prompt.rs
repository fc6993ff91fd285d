//! Prompt assembly for the language-model collaborator.
//!
//! Merges a reading's drawn spread with its persona into a system/user
//! message pair. Pure string assembly: the same reading and language always
//! render byte-identical output. Card meaning text is deliberately not part
//! of the payload; only position, name, and orientation are sent.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::language::Language;
use crate::reading::Reading;

/// A system/user message pair for one chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// System-level instruction: persona plus the fixed reading rules.
    pub system: String,
    /// User message: question, spread, and the drawn cards.
    pub user: String,
}

/// Assemble the prompt pair for a reading.
///
/// Fails with [`CoreError::InvalidReading`] when the question is empty or
/// the drawn-card count does not match the spread. Both indicate a caller
/// construction bug.
pub fn build_prompt(reading: &Reading<'_>, language: Language) -> CoreResult<Prompt> {
    if reading.question.trim().is_empty() {
        return Err(CoreError::InvalidReading("question is empty".to_string()));
    }
    if reading.cards.len() != reading.spread.count() {
        return Err(CoreError::InvalidReading(format!(
            "{} cards drawn for a {}-position spread",
            reading.cards.len(),
            reading.spread.count()
        )));
    }

    Ok(Prompt {
        system: render_system(reading, language),
        user: render_user(reading, language),
    })
}

fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::English => "Respond entirely in ENGLISH.",
        Language::Chinese => "Respond entirely in CHINESE.",
    }
}

fn render_system(reading: &Reading<'_>, language: Language) -> String {
    format!(
        "{}\n\nAdditional Instructions:\n\
         1. Analyze the cards drawn in the specific spread positions.\n\
         2. Synthesize a comprehensive meaning linking the cards together.\n\
         3. Respect strict Reversal meanings (Reversed = Internalized, blocked, or opposite energy).\n\
         4. {}",
        reading.style.persona.text(language),
        language_instruction(language)
    )
}

fn render_user(reading: &Reading<'_>, language: Language) -> String {
    let mut out = format!(
        "Question: {}\nSpread: {}\n\nCards Drawn:\n",
        reading.question, reading.spread.name
    );
    for drawn in &reading.cards {
        out.push_str(&format!(
            "- Position: {}, Card: {}, Orientation: {}\n",
            drawn.position.label.text(language),
            drawn.card.name.text(language),
            drawn.orientation.label(language)
        ));
    }
    out.push_str("\nInterpret the path laid out before the seeker.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::draw::{DrawnCard, Orientation, Position, draw};
    use crate::language::Localized;
    use crate::spread::Spread;
    use crate::style::Style;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// A reading with fixed cards and orientations, no randomness.
    fn fixed_reading(deck: &Deck) -> Reading<'_> {
        let spread = Spread::by_name("Three Card (Time)").unwrap();
        let style = Style::by_key("direct").unwrap();
        let picks = [
            ("major-00", Orientation::Upright),
            ("cups-01", Orientation::Reversed),
            ("swords-14", Orientation::Upright),
        ];
        let cards = picks
            .iter()
            .enumerate()
            .map(|(index, &(id, orientation))| DrawnCard {
                card: deck.card(id).unwrap(),
                orientation,
                position: Position {
                    index,
                    label: spread.positions[index].clone(),
                },
            })
            .collect();
        Reading::new("Should I change jobs?", spread, cards, style)
    }

    #[test]
    fn output_is_deterministic() {
        let deck = Deck::without_images();
        let reading = fixed_reading(&deck);
        let a = build_prompt(&reading, Language::English).unwrap();
        let b = build_prompt(&reading, Language::English).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn user_prompt_renders_exactly() {
        let deck = Deck::without_images();
        let reading = fixed_reading(&deck);
        let prompt = build_prompt(&reading, Language::English).unwrap();
        assert_eq!(
            prompt.user,
            "Question: Should I change jobs?\n\
             Spread: Three Card (Time)\n\
             \n\
             Cards Drawn:\n\
             - Position: Past, Card: The Fool, Orientation: Upright\n\
             - Position: Present, Card: Ace of Cups, Orientation: Reversed\n\
             - Position: Future, Card: King of Swords, Orientation: Upright\n\
             \n\
             Interpret the path laid out before the seeker."
        );
    }

    #[test]
    fn system_prompt_carries_persona_and_fixed_rules() {
        let deck = Deck::without_images();
        let reading = fixed_reading(&deck);
        let prompt = build_prompt(&reading, Language::English).unwrap();

        assert!(prompt.system.contains("no-nonsense tarot reader"));
        assert!(
            prompt
                .system
                .contains("1. Analyze the cards drawn in the specific spread positions.")
        );
        assert!(
            prompt
                .system
                .contains("2. Synthesize a comprehensive meaning linking the cards together.")
        );
        assert!(prompt.system.contains(
            "3. Respect strict Reversal meanings (Reversed = Internalized, blocked, or opposite energy)."
        ));
        assert!(prompt.system.ends_with("Respond entirely in ENGLISH."));
    }

    #[test]
    fn chinese_prompt_is_language_pure() {
        let deck = Deck::without_images();
        let reading = fixed_reading(&deck);
        let prompt = build_prompt(&reading, Language::Chinese).unwrap();

        assert!(prompt.system.ends_with("Respond entirely in CHINESE."));
        assert!(prompt.system.contains("不废话"));
        assert!(prompt.user.contains("- Position: 过去, Card: 愚者, Orientation: 正位"));
        assert!(prompt.user.contains("- Position: 现在, Card: 圣杯王牌, Orientation: 逆位"));
    }

    #[test]
    fn empty_question_is_rejected() {
        let deck = Deck::without_images();
        let mut reading = fixed_reading(&deck);
        reading.question = "   ".to_string();
        assert!(matches!(
            build_prompt(&reading, Language::English),
            Err(CoreError::InvalidReading(_))
        ));
    }

    #[test]
    fn card_count_mismatch_is_rejected() {
        let deck = Deck::without_images();
        let mut reading = fixed_reading(&deck);
        reading.cards.pop();
        assert!(matches!(
            build_prompt(&reading, Language::English),
            Err(CoreError::InvalidReading(_))
        ));
    }

    #[test]
    fn meaning_text_never_reaches_the_payload() {
        let deck = Deck::without_images();
        let reading = fixed_reading(&deck);
        let prompt = build_prompt(&reading, Language::English).unwrap();
        assert!(!prompt.user.contains("Major Arcana Archetype"));
        assert!(!prompt.user.contains("Energy of"));
        assert!(!prompt.system.contains("Major Arcana Archetype"));
    }

    #[test]
    fn drawn_reading_builds_for_every_spread_and_style() {
        let deck = Deck::without_images();
        let mut rng = StdRng::seed_from_u64(21);
        for spread in Spread::all() {
            for style in Style::all() {
                let cards = draw(spread, &deck, &mut rng).unwrap();
                let reading = Reading::new("What lies ahead?", spread, cards, style);
                for &language in Language::all() {
                    let prompt = build_prompt(&reading, language).unwrap();
                    assert!(prompt.user.contains("What lies ahead?"));
                    assert!(prompt.user.contains(&spread.name));
                }
            }
        }
    }

    #[test]
    fn custom_position_labels_render_verbatim() {
        let deck = Deck::without_images();
        let spread = Spread {
            name: "Mirror".to_string(),
            positions: vec![Localized::new("Reflection", "映照")],
            description: Localized::new("One card, one mirror.", "一牌一镜。"),
        };
        let style = Style::by_key("mystical").unwrap();
        let cards = vec![DrawnCard {
            card: deck.card("major-17").unwrap(),
            orientation: Orientation::Upright,
            position: Position {
                index: 0,
                label: spread.positions[0].clone(),
            },
        }];
        let reading = Reading::new("Who am I becoming?", &spread, cards, style);
        let prompt = build_prompt(&reading, Language::English).unwrap();
        assert!(
            prompt
                .user
                .contains("- Position: Reflection, Card: The Star, Orientation: Upright")
        );
    }
}
