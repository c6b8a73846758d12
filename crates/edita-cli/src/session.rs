//! In-memory editing session
//!
//! Keeps the conversation of one interactive run: alternating user requests
//! and editor responses, plus the settings the next request will use.
//! Nothing is written to disk.

use crate::editor::EditRequest;
use edita_prompt::{ContentType, EditingMode, FocusArea};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the session history
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Settings used for a user message
    pub request: Option<EditRequest>,
}

/// A completed request/response pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange<'a> {
    pub original: &'a str,
    pub edited: &'a str,
}

/// Interactive session state
#[derive(Debug, Default)]
pub struct Session {
    messages: Vec<Message>,
    pub mode: EditingMode,
    pub content_type: ContentType,
    pub focus_areas: Vec<FocusArea>,
}

impl Session {
    /// Create an empty session with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request for the content with the current settings
    ///
    /// Focus areas only travel with the request in
    /// [`EditingMode::SpecificIssue`].
    pub fn request(&self, content: impl Into<String>) -> EditRequest {
        let focus_areas = if self.mode == EditingMode::SpecificIssue {
            self.focus_areas.clone()
        } else {
            Vec::new()
        };

        EditRequest {
            content: content.into(),
            mode: self.mode,
            content_type: self.content_type,
            focus_areas,
        }
    }

    /// Record a user request
    pub fn record_request(&mut self, request: EditRequest) {
        self.messages.push(Message {
            role: Role::User,
            content: request.content.clone(),
            request: Some(request),
        });
    }

    /// Record the editor's response to the pending request
    pub fn record_response(&mut self, response: impl Into<String>) {
        self.messages.push(Message {
            role: Role::Assistant,
            content: response.into(),
            request: None,
        });
    }

    /// The latest request if it has no response yet
    pub fn pending(&self) -> Option<&EditRequest> {
        self.messages
            .last()
            .filter(|m| m.role == Role::User)
            .and_then(|m| m.request.as_ref())
    }

    /// Drop the pending request, e.g. after it failed
    pub fn discard_pending(&mut self) -> Option<EditRequest> {
        if self.pending().is_some() {
            self.messages.pop().and_then(|m| m.request)
        } else {
            None
        }
    }

    /// The most recent response
    pub fn latest_response(&self) -> Option<&str> {
        self.messages
            .last()
            .filter(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str())
    }

    /// Earlier exchanges, oldest first, excluding the latest one
    pub fn history(&self) -> Vec<Exchange<'_>> {
        let end = self.messages.len().saturating_sub(2);
        (0..end)
            .step_by(2)
            .filter_map(|i| {
                let original = self.messages.get(i)?;
                let edited = self.messages.get(i + 1)?;
                Some(Exchange {
                    original: &original.content,
                    edited: &edited.content,
                })
            })
            .collect()
    }

    /// Forget all messages; settings are kept
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of recorded messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if no messages are recorded
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(session: &mut Session, content: &str, response: &str) {
        let request = session.request(content);
        session.record_request(request);
        session.record_response(response);
    }

    #[test]
    fn test_request_uses_settings() {
        let mut session = Session::new();
        session.content_type = ContentType::Email;
        session.focus_areas = vec![FocusArea::PassiveVoice];

        let request = session.request("Text");
        assert_eq!(request.mode, EditingMode::Comprehensive);
        assert_eq!(request.content_type, ContentType::Email);
        assert!(request.focus_areas.is_empty());

        session.mode = EditingMode::SpecificIssue;
        assert_eq!(session.request("Text").focus_areas, vec![FocusArea::PassiveVoice]);
    }

    #[test]
    fn test_pending_and_response() {
        let mut session = Session::new();
        assert!(session.pending().is_none());

        let request = session.request("draft");
        session.record_request(request);
        assert_eq!(session.pending().map(|r| r.content.as_str()), Some("draft"));
        assert!(session.latest_response().is_none());

        session.record_response("edited");
        assert!(session.pending().is_none());
        assert_eq!(session.latest_response(), Some("edited"));
    }

    #[test]
    fn test_history_excludes_latest_exchange() {
        let mut session = Session::new();
        exchange(&mut session, "one", "ONE");
        assert!(session.history().is_empty());

        exchange(&mut session, "two", "TWO");
        exchange(&mut session, "three", "THREE");

        assert_eq!(
            session.history(),
            vec![
                Exchange { original: "one", edited: "ONE" },
                Exchange { original: "two", edited: "TWO" },
            ]
        );
    }

    #[test]
    fn test_discard_pending() {
        let mut session = Session::new();
        exchange(&mut session, "one", "ONE");
        let request = session.request("broken");
        session.record_request(request);

        let dropped = session.discard_pending().unwrap();
        assert_eq!(dropped.content, "broken");
        assert_eq!(session.len(), 2);
        assert!(session.discard_pending().is_none());
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut session = Session::new();
        session.mode = EditingMode::Newsletter;
        exchange(&mut session, "one", "ONE");

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.mode, EditingMode::Newsletter);
    }
}
