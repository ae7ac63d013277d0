//! UI-agnostic deck state
//!
//! The deck is the ordered list of questions shown to the user plus a cursor,
//! and the short history of recently liked questions. Nothing here depends on
//! a UI framework or on the network; front-ends drive it through the
//! operations below.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use thiserror::Error;

use crate::seed::SEED_QUESTIONS;

/// Shown when the cursor sits past the last stored question.
pub const NO_MORE_QUESTIONS: &str = "No more questions.";

/// How many liked questions are kept as generation examples.
pub const MAX_LIKED: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("a replacement is already in flight for question {0}")]
    ReplaceInFlight(usize),
}

/// Position captured when a replacement request starts.
///
/// The generated question is written back to this slot, even if the cursor
/// has moved by the time the response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceTicket {
    index: usize,
    id: u64,
}

impl ReplaceTicket {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Sliding window of the most recently liked questions, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedHistory {
    items: VecDeque<String>,
}

impl LikedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question: String) {
        self.items.push_back(question);
        while self.items.len() > MAX_LIKED {
            self.items.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    questions: Vec<String>,
    cursor: usize,
    liked: LikedHistory,
    pending: Option<ReplaceTicket>,
    next_ticket: u64,
}

impl Deck {
    pub fn new(questions: Vec<String>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    /// Build a deck from the built-in seed list, optionally shuffled.
    pub fn seeded(shuffle: bool) -> Self {
        let mut questions: Vec<String> = SEED_QUESTIONS.iter().map(|q| q.to_string()).collect();
        if shuffle {
            questions.shuffle(&mut rand::thread_rng());
        }
        Self::new(questions)
    }

    pub fn current(&self) -> &str {
        self.questions
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or(NO_MORE_QUESTIONS)
    }

    /// True when the cursor is past the last stored question.
    pub fn at_end(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    pub fn skip(&mut self) {
        if self.at_end() {
            // Only reachable from an empty deck: the placeholder takes the cursor's slot.
            self.questions.push(String::new());
            return;
        }
        if self.cursor + 1 == self.questions.len() {
            self.questions.push(String::new());
        }
        self.cursor += 1;
    }

    /// Record the current question as liked, then skip. The end-of-deck
    /// sentinel and blank placeholders are never recorded.
    pub fn like(&mut self) {
        if let Some(question) = self.questions.get(self.cursor) {
            if !question.is_empty() {
                self.liked.push(question.clone());
            }
        }
        self.skip();
    }

    pub fn replace(&mut self, question: String) {
        self.write_at(self.cursor, question);
    }

    /// Mark the current position as awaiting a generated question.
    pub fn begin_replace(&mut self) -> Result<ReplaceTicket, DeckError> {
        if let Some(pending) = self.pending {
            return Err(DeckError::ReplaceInFlight(pending.index));
        }
        let ticket = ReplaceTicket {
            index: self.cursor,
            id: self.next_ticket,
        };
        self.next_ticket += 1;
        self.pending = Some(ticket);
        Ok(ticket)
    }

    /// Write a generated question back to the ticket's slot.
    ///
    /// Returns false and leaves the deck untouched for a ticket that is no
    /// longer pending.
    pub fn finish_replace(&mut self, ticket: ReplaceTicket, question: String) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.write_at(ticket.index, question);
        true
    }

    /// Drop a pending replacement after a failed request.
    pub fn cancel_replace(&mut self, ticket: ReplaceTicket) {
        if self.pending == Some(ticket) {
            self.pending = None;
        }
    }

    pub fn is_replacing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn liked(&self) -> &LikedHistory {
        &self.liked
    }

    fn write_at(&mut self, index: usize, question: String) {
        match self.questions.get_mut(index) {
            Some(slot) => *slot = question,
            // Writing at the sentinel position fills that slot.
            None => self.questions.push(question),
        }
    }
}
