//! Message contents as delivered by the chat server

use serde::{Deserialize, Serialize};

/// One piece of a message body
///
/// The server splits outgoing text on `@name` mentions. Mentions of known
/// users become segments with `is_user == true` whose `text` is the user's
/// name; everything else stays literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Whether this segment is a mention of a user
    #[serde(default)]
    pub is_user: bool,
    /// Literal text, or the mentioned user's name
    #[serde(default)]
    pub text: String,
}

impl Segment {
    /// Create a literal text segment
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            is_user: false,
            text: text.into(),
        }
    }

    /// Create a mention segment
    pub fn mention(user: impl Into<String>) -> Self {
        Self {
            is_user: true,
            text: user.into(),
        }
    }
}

/// Message payload
///
/// Opaque to the reducer. Older payloads carry a bare string; newer ones carry
/// the segment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    /// Unsegmented text
    Plain(String),
    /// Text split into literal and mention segments
    Segments(Vec<Segment>),
}

impl Default for Contents {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl Contents {
    /// Flatten to display text, rendering mentions as `@name`
    pub fn to_text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Segments(segments) => segments
                .iter()
                .map(|s| {
                    if s.is_user {
                        format!("@{}", s.text)
                    } else {
                        s.text.clone()
                    }
                })
                .collect(),
        }
    }

    /// Names of users mentioned, in order of appearance
    pub fn mentions(&self) -> Vec<&str> {
        match self {
            Self::Plain(_) => Vec::new(),
            Self::Segments(segments) => segments
                .iter()
                .filter(|s| s.is_user)
                .map(|s| s.text.as_str())
                .collect(),
        }
    }

    /// Whether `user` is mentioned
    pub fn mentions_user(&self, user: &str) -> bool {
        self.mentions().contains(&user)
    }

    /// Check if there is nothing to display
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.is_empty(),
            Self::Segments(segments) => segments.iter().all(|s| s.text.is_empty()),
        }
    }
}

impl From<&str> for Contents {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for Contents {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<Vec<Segment>> for Contents {
    fn from(segments: Vec<Segment>) -> Self {
        Self::Segments(segments)
    }
}
