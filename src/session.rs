use crate::chat::Message;
use crate::constants::GREETING;

/// One visit to the chat screen. Owns the append-only transcript and the
/// not-yet-submitted draft; dropped when the user navigates away.
#[derive(Debug)]
pub struct ChatSession {
    transcript: Vec<Message>,
    draft: String,
    pending_replies: usize,
}

impl ChatSession {
    /// A fresh session holds exactly one assistant greeting and an empty draft.
    pub fn new() -> Self {
        Self {
            transcript: vec![Message::assistant(GREETING)],
            draft: String::new(),
            pending_replies: 0,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft wholesale. No validation, no other state change.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_draft_char(&mut self) {
        self.draft.pop();
    }

    /// Submits the current draft. A draft that trims to nothing is ignored and
    /// left as-is. Otherwise the trimmed text is appended as a user message,
    /// the draft is cleared, and the text is handed back so the caller can
    /// schedule the deferred reply.
    pub fn submit(&mut self) -> Option<String> {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.transcript.push(Message::user(text.clone()));
        self.draft.clear();
        self.pending_replies += 1;
        Some(text)
    }

    /// Appends the deferred assistant reply for one earlier submission.
    pub fn push_reply(&mut self, body: impl Into<String>) {
        self.transcript.push(Message::assistant(body));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    pub fn is_reply_pending(&self) -> bool {
        self.pending_replies > 0
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crate::constants::BAIL_REPLY;

    #[test]
    fn test_fresh_session_has_single_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].sender, Sender::Assistant);
        assert_eq!(session.transcript()[0].body, GREETING);
        assert_eq!(session.draft(), "");
        assert!(!session.is_reply_pending());
    }

    #[test]
    fn test_blank_submit_is_a_no_op() {
        let mut session = ChatSession::new();
        for blank in ["", " ", "   ", "\t", " \n "] {
            session.update_draft(blank);
            assert!(session.submit().is_none());
            assert_eq!(session.transcript().len(), 1);
            assert_eq!(session.draft(), blank, "draft untouched on blank submit");
            assert_eq!(session.pending_replies(), 0);
        }
    }

    #[test]
    fn test_submit_appends_trimmed_user_message() {
        let mut session = ChatSession::new();
        session.update_draft("  What about bail?  ");

        let submitted = session.submit().expect("non-blank draft submits");
        assert_eq!(submitted, "What about bail?");
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].sender, Sender::User);
        assert_eq!(session.transcript()[1].body, "What about bail?");
        assert_eq!(session.draft(), "");
        assert_eq!(session.pending_replies(), 1);
    }

    #[test]
    fn test_reply_follows_its_user_message() {
        let mut session = ChatSession::new();
        session.update_draft("what about bail");
        session.submit().expect("submit");
        session.push_reply(BAIL_REPLY);

        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[1].sender, Sender::User);
        assert_eq!(session.transcript()[2].sender, Sender::Assistant);
        assert_eq!(session.transcript()[2].body, BAIL_REPLY);
        assert!(!session.is_reply_pending());
    }

    #[test]
    fn test_rapid_submissions_each_count_a_pending_reply() {
        let mut session = ChatSession::new();
        session.update_draft("first");
        session.submit().expect("submit");
        session.update_draft("second");
        session.submit().expect("submit");

        assert_eq!(session.pending_replies(), 2);
        session.push_reply("reply one");
        session.push_reply("reply two");
        assert_eq!(session.pending_replies(), 0);
        assert_eq!(session.transcript().len(), 5);
    }

    #[test]
    fn test_update_draft_is_idempotent_on_transcript() {
        let mut session = ChatSession::new();
        for _ in 0..10 {
            session.update_draft("hello");
        }
        session.update_draft("goodbye");

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.draft(), "goodbye");
    }

    #[test]
    fn test_draft_char_editing() {
        let mut session = ChatSession::new();
        session.push_draft_char('h');
        session.push_draft_char('i');
        assert_eq!(session.draft(), "hi");
        session.pop_draft_char();
        assert_eq!(session.draft(), "h");
        session.pop_draft_char();
        session.pop_draft_char();
        assert_eq!(session.draft(), "");
    }
}
