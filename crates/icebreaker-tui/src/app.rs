use anyhow::{anyhow, Result};
use icebreaker_core::{Deck, ReplaceTicket};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::client::{QuestionClient, FETCH_FAILED};
use crate::tui::AppEvent;

/// Replacement request running in the background, with the slot it targets.
pub struct ReplaceTask {
    pub ticket: ReplaceTicket,
    pub handle: JoinHandle<Result<String>>,
}

pub struct App {
    // Core state
    pub should_quit: bool,

    // Questions and likes
    pub deck: Deck,

    // Replacement state
    pub client: QuestionClient,
    pub replace_task: Option<ReplaceTask>,
    pub error: Option<String>,
    notify: Option<UnboundedSender<AppEvent>>,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation
}

impl App {
    pub fn new(deck: Deck, client: QuestionClient) -> Self {
        Self {
            should_quit: false,
            deck,
            client,
            replace_task: None,
            error: None,
            notify: None,
            animation_frame: 0,
        }
    }

    /// Wake the run loop with `AppEvent::ReplaceDone` when a replacement
    /// request returns, instead of waiting for the next tick.
    pub fn with_notify(mut self, sender: UnboundedSender<AppEvent>) -> Self {
        self.notify = Some(sender);
        self
    }

    /// Actions are disabled while a replacement is in flight.
    pub fn is_loading(&self) -> bool {
        self.replace_task.is_some()
    }

    pub fn skip(&mut self) {
        if !self.is_loading() {
            self.deck.skip();
        }
    }

    pub fn like(&mut self) {
        if !self.is_loading() {
            self.deck.like();
        }
    }

    /// Ask the service for a replacement of the current question, using the
    /// liked questions as examples.
    pub fn start_replace(&mut self) {
        if self.is_loading() {
            return;
        }
        self.error = None;

        let ticket = match self.deck.begin_replace() {
            Ok(ticket) => ticket,
            Err(err) => {
                self.error = Some(err.to_string());
                return;
            }
        };

        let client = self.client.clone();
        let examples = self.deck.liked().to_vec();
        tracing::info!(index = ticket.index(), examples = examples.len(), "requesting replacement");
        let notify = self.notify.clone();
        let handle = tokio::spawn(async move {
            let result = client.generate(examples).await;
            if let Some(notify) = notify {
                let _ = notify.send(AppEvent::ReplaceDone);
            }
            result
        });
        self.replace_task = Some(ReplaceTask { ticket, handle });
    }

    /// Apply the replacement result if its task has already finished.
    pub async fn poll_replace(&mut self) {
        let finished = self
            .replace_task
            .as_ref()
            .is_some_and(|task| task.handle.is_finished());
        if finished {
            self.complete_replace().await;
        }
    }

    /// Wait for the in-flight replacement and apply its result.
    ///
    /// The task signals `ReplaceDone` just before returning, so the wait is
    /// short when called from that event.
    pub async fn complete_replace(&mut self) {
        if let Some(task) = self.replace_task.take() {
            let result = match task.handle.await {
                Ok(result) => result,
                Err(err) => {
                    tracing::error!("replacement task failed: {}", err);
                    Err(anyhow!(FETCH_FAILED))
                }
            };
            self.apply_replace(task.ticket, result);
        }
    }

    pub fn apply_replace(&mut self, ticket: ReplaceTicket, result: Result<String>) {
        match result {
            Ok(question) => {
                self.deck.finish_replace(ticket, question);
            }
            Err(err) => {
                self.deck.cancel_replace(ticket);
                self.error = Some(err.to_string());
            }
        }
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.is_loading() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }
}
