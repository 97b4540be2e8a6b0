//! Canned-response support chat.
//!
//! There is no language understanding here: each user message gets one reply
//! picked uniformly from the catalog script after a short random pause.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use mindcare_core::Clock;
use mindcare_core::catalog::ChatScript;
use mindcare_core::model::{ChatMessage, ChatRole, MessageId};

use crate::error::ChatError;

/// Shortest simulated typing pause.
pub const MIN_REPLY_DELAY: Duration = Duration::from_millis(1000);
/// Longest simulated typing pause.
pub const MAX_REPLY_DELAY: Duration = Duration::from_millis(3000);

/// Source of randomness for reply selection and pacing.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&self, len: usize) -> usize;

    /// Uniform duration in `min..=max`.
    fn duration_between(&self, min: Duration, max: Duration) -> Duration;
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn duration_between(&self, min: Duration, max: Duration) -> Duration {
        let min_ms = u64::try_from(min.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
        if max_ms <= min_ms {
            return min;
        }
        Duration::from_millis(rand::rng().random_range(min_ms..=max_ms))
    }
}

/// Waits out the simulated typing pause.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Real timer via `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// A reply chosen at submit time, to be delivered after `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub delay: Duration,
    text: String,
}

/// The user's message and the assistant's answer to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub user: ChatMessage,
    pub reply: ChatMessage,
}

/// Append-only transcript with simulated assistant replies.
#[derive(Clone)]
pub struct ChatSimulator {
    clock: Clock,
    random: Arc<dyn RandomSource>,
    delay: Arc<dyn Delay>,
    responses: Vec<String>,
    quick_replies: Vec<String>,
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: bool,
}

impl ChatSimulator {
    /// Transcript seeded with the script greeting, using real randomness and timers.
    #[must_use]
    pub fn new(script: &ChatScript, clock: Clock) -> Self {
        Self::with_sources(script, clock, Arc::new(ThreadRandom), Arc::new(TokioDelay))
    }

    #[must_use]
    pub fn with_sources(
        script: &ChatScript,
        clock: Clock,
        random: Arc<dyn RandomSource>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        let mut sim = Self {
            clock,
            random,
            delay,
            responses: script.responses.clone(),
            quick_replies: script.quick_replies.clone(),
            messages: Vec::new(),
            next_id: 1,
            pending: false,
        };
        sim.push(ChatRole::Assistant, script.greeting.clone());
        sim
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn quick_replies(&self) -> &[String] {
        &self.quick_replies
    }

    /// True between a submission and its reply.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn delay_handle(&self) -> Arc<dyn Delay> {
        Arc::clone(&self.delay)
    }

    /// Appends the user's message and picks the reply to deliver later.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyMessage` for blank input and
    /// `ChatError::ReplyPending` while a previous reply is outstanding.
    pub fn submit(&mut self, text: &str) -> Result<PendingReply, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.pending {
            return Err(ChatError::ReplyPending);
        }

        self.push(ChatRole::User, text.to_owned());
        self.pending = true;

        let reply = if self.responses.is_empty() {
            String::new()
        } else {
            self.responses[self.random.index(self.responses.len())].clone()
        };
        Ok(PendingReply {
            delay: self
                .random
                .duration_between(MIN_REPLY_DELAY, MAX_REPLY_DELAY),
            text: reply,
        })
    }

    /// Appends the assistant reply and clears the typing state.
    pub fn deliver(&mut self, reply: PendingReply) -> &ChatMessage {
        self.pending = false;
        self.push(ChatRole::Assistant, reply.text)
    }

    /// Forgets an outstanding reply, e.g. when the chat view goes away mid-pause.
    pub fn cancel_pending(&mut self) {
        self.pending = false;
    }

    /// Submit, wait out the pause, then deliver.
    ///
    /// Dropping the future during the pause appends nothing further; call
    /// [`ChatSimulator::cancel_pending`] before submitting again.
    ///
    /// # Errors
    ///
    /// Same as [`ChatSimulator::submit`].
    pub async fn respond(&mut self, text: &str) -> Result<ChatExchange, ChatError> {
        let pending = self.submit(text)?;
        let user = self.messages[self.messages.len() - 1].clone();
        self.delay.wait(pending.delay).await;
        let reply = self.deliver(pending).clone();
        Ok(ChatExchange { user, reply })
    }

    fn push(&mut self, role: ChatRole, text: String) -> &ChatMessage {
        let id = MessageId::new(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text,
            sent_at: self.clock.now(),
        });
        &self.messages[self.messages.len() - 1]
    }
}
