//! One interactive session: input classification and rendering.
//!
//! The session owns the [`PriceAgent`] and therefore the response cache.
//! Dropping the session discards everything it learned.

use crate::agent::PriceAgent;
use crate::cache::CacheStats;
use crate::error::Result;
use crate::utils::capitalize;

pub const TITLE: &str = "Cryptocurrency Price Checker with LLM Agent";

pub const INTRO: &str = "Enter the name of a cryptocurrency to get its current price. \
                         System responses will remain in English.";

pub const INPUT_PROMPT: &str = "Enter cryptocurrency name (or type 'exit' to quit): ";

pub const GOODBYE: &str = "Goodbye!";

pub const LANGUAGE_NOTICE: &str =
    "Language change is not currently supported. System responses will remain in English.";

pub const CONTEXT_HEADING: &str = "Conversation Context";

/// Classification of one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Empty,
    Exit,
    ChangeLanguage,
    Query(String),
}

impl SessionInput {
    /// Sentinels match case-insensitively, ignoring surrounding whitespace.
    /// Anything else is a query carrying `line` unchanged.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.to_lowercase().as_str() {
            "exit" => Self::Exit,
            "change language" => Self::ChangeLanguage,
            _ => Self::Query(line.to_string()),
        }
    }
}

/// What the UI should show for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Empty input; nothing to show.
    Nothing,
    /// The session has ended.
    Goodbye,
    /// A fixed informational message.
    Notice(&'static str),
    /// A resolved (fresh or cached) response.
    Answer(String),
}

impl Reply {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Nothing => None,
            Self::Goodbye => Some(GOODBYE),
            Self::Notice(notice) => Some(*notice),
            Self::Answer(answer) => Some(answer.as_str()),
        }
    }
}

pub struct Session {
    agent: PriceAgent,
    finished: bool,
}

impl Session {
    pub fn new(agent: PriceAgent) -> Self {
        Self {
            agent,
            finished: false,
        }
    }

    pub fn agent(&self) -> &PriceAgent {
        &self.agent
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Handle one line. Only [`SessionInput::Query`] reaches the agent; its
    /// errors (LLM failures) are returned for the UI to surface.
    pub async fn handle(&mut self, line: &str) -> Result<Reply> {
        match SessionInput::parse(line) {
            SessionInput::Empty => Ok(Reply::Nothing),
            SessionInput::Exit => {
                self.finished = true;
                Ok(Reply::Goodbye)
            }
            SessionInput::ChangeLanguage => Ok(Reply::Notice(LANGUAGE_NOTICE)),
            SessionInput::Query(identifier) => {
                let answer = self.agent.resolve(&identifier).await?;
                Ok(Reply::Answer(answer))
            }
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.agent.cache().stats()
    }

    /// `"{Capitalized}: {response}"` for every cached identifier.
    pub fn context_lines(&self) -> Vec<String> {
        self.agent
            .cache()
            .entries()
            .into_iter()
            .map(|(identifier, response)| format!("{}: {}", capitalize(&identifier), response))
            .collect()
    }
}
