//! Reading session orchestration.
//!
//! A session walks one user interaction through three stages: awaiting a
//! question, spread drawn, interpreted. Catalogs are shared immutable
//! reference data borrowed by the session; the session owns the reading
//! and the RNG. A UI layer is expected to serialize user actions, so at
//! most one transition is in flight at a time.

use rand::SeedableRng;
use rand::rngs::StdRng;

use arcana_core::{Deck, Language, Reading, Spread, Style, build_prompt, draw};

use crate::client::Oracle;
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No reading yet; waiting for a question and a spread choice.
    AwaitingQuestion,
    /// Cards are on the table; an interpretation can be requested.
    SpreadDrawn,
    /// The interpretation has been stored.
    Interpreted,
}

/// An interactive reading session over a shared card catalog.
pub struct ReadingSession<'a> {
    deck: &'a Deck,
    rng: StdRng,
    reading: Option<Reading<'a>>,
}

impl<'a> ReadingSession<'a> {
    /// Create a session over `deck`.
    pub fn new(deck: &'a Deck, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            deck,
            rng,
            reading: None,
        }
    }

    /// The session's current state.
    pub fn state(&self) -> SessionState {
        match &self.reading {
            None => SessionState::AwaitingQuestion,
            Some(reading) if reading.interpretation.is_none() => SessionState::SpreadDrawn,
            Some(_) => SessionState::Interpreted,
        }
    }

    /// The current reading, if one has been drawn.
    pub fn reading(&self) -> Option<&Reading<'a>> {
        self.reading.as_ref()
    }

    /// The interpretation text, once the session is interpreted.
    pub fn interpretation(&self) -> Option<&str> {
        self.reading
            .as_ref()
            .and_then(|reading| reading.interpretation.as_deref())
    }

    /// Commit to a question, a spread, and a style, and draw the cards.
    ///
    /// Only valid in [`SessionState::AwaitingQuestion`]; the question must
    /// be non-empty after trimming. Drawing itself cannot fail with the
    /// built-in deck and spreads.
    pub fn begin_reading(
        &mut self,
        question: &str,
        spread: &'a Spread,
        style: &'a Style,
    ) -> SessionResult<&Reading<'a>> {
        if self.reading.is_some() {
            return Err(SessionError::ReadingInProgress);
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(SessionError::EmptyQuestion);
        }

        let cards = draw(spread, self.deck, &mut self.rng)?;
        Ok(self
            .reading
            .insert(Reading::new(question, spread, cards, style)))
    }

    /// Ask the collaborator to interpret the drawn spread.
    ///
    /// Only valid in [`SessionState::SpreadDrawn`]. On failure the reading
    /// (question and cards) is untouched and the call may be retried
    /// without redrawing.
    pub async fn interpret(
        &mut self,
        oracle: &dyn Oracle,
        language: Language,
    ) -> SessionResult<&str> {
        let reading = self.reading.as_mut().ok_or(SessionError::NoReading)?;
        if reading.interpretation.is_some() {
            return Err(SessionError::AlreadyInterpreted);
        }

        let prompt = build_prompt(reading, language)?;
        let text = oracle.complete(&prompt).await?;
        Ok(reading.interpretation.insert(text))
    }

    /// Abandon the current reading and return to
    /// [`SessionState::AwaitingQuestion`].
    pub fn reset(&mut self) {
        self.reading = None;
    }
}
