//! In-memory assistant transcript.
//!
//! Each prompt becomes a user message followed by an assistant message
//! carrying the simulation it produced. Nothing is persisted.

use ecomind_simulation::reply::{WELCOME_MESSAGE, format_reply};
use ecomind_simulation_models::SimulationResult;
use ecomind_vulnerability_models::VulnerabilityRecord;
use serde::{Deserialize, Serialize};

use crate::DashboardError;

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Typed by the user.
    User,
    /// Produced by the assistant.
    Assistant,
}

/// One message in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sequence number within the session, starting at 1.
    pub id: u64,
    /// Who wrote the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// Simulation attached to an assistant reply.
    pub simulation: Option<SimulationResult>,
}

/// A running conversation with the improvement assistant.
#[derive(Debug, Clone)]
pub struct AssistantSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for AssistantSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantSession {
    /// Starts a session containing only the welcome message.
    #[must_use]
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        session.push(Role::Assistant, WELCOME_MESSAGE.to_string(), None);
        session
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Simulates `prompt` against `base_records` and appends the exchange.
    ///
    /// Returns a copy of the assistant's reply.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::EmptyPrompt`] if `prompt` is blank; the
    /// transcript is left unchanged.
    pub fn send(
        &mut self,
        prompt: &str,
        base_records: &[VulnerabilityRecord],
    ) -> Result<ChatMessage, DashboardError> {
        if prompt.trim().is_empty() {
            return Err(DashboardError::EmptyPrompt);
        }

        self.push(Role::User, prompt.to_string(), None);

        let result = ecomind_simulation::simulate(prompt, base_records);
        let content = format_reply(&result);
        Ok(self.push(Role::Assistant, content, Some(result)))
    }

    /// Assistant replies that carry a simulation, oldest first. Any of them
    /// can be applied to the dashboard.
    pub fn simulations(&self) -> impl Iterator<Item = (&ChatMessage, &SimulationResult)> {
        self.messages
            .iter()
            .filter_map(|m| m.simulation.as_ref().map(|s| (m, s)))
    }

    /// Clears the transcript back to the welcome message.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn push(
        &mut self,
        role: Role,
        content: String,
        simulation: Option<SimulationResult>,
    ) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            role,
            content,
            simulation,
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}
