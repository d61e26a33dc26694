use crate::constants::{BAIL_REPLY, DEFAULT_REPLY, SUMMONS_REPLY, VERIFY_REPLY};
use std::time::Duration;
use tokio::sync::mpsc;

/// Keyword rules, checked in order. Every rule is evaluated and a later match
/// overrides an earlier one, so "verify" outranks "summons" outranks "bail"
/// when a message contains several keywords.
const RULES: [(&str, &str); 3] = [
    ("bail", BAIL_REPLY),
    ("summons", SUMMONS_REPLY),
    ("verify", VERIFY_REPLY),
];

/// Picks the scripted reply for a submitted message. Matching is a
/// case-insensitive substring check against the whole message.
pub fn reply_for(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    let mut reply = DEFAULT_REPLY;
    for (keyword, canned) in RULES {
        if lowered.contains(keyword) {
            reply = canned;
        }
    }
    reply
}

/// A deferred assistant reply, stamped with the chat session that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEvent {
    pub generation: u64,
    pub body: String,
}

/// Schedules the reply for one submission. The task fires exactly once after
/// `delay`; there is no cancellation handle. A closed receiver means the app
/// is shutting down and the reply is dropped.
pub fn schedule_reply(
    tx: mpsc::Sender<ReplyEvent>,
    generation: u64,
    text: String,
    delay: Duration,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let body = reply_for(&text).to_string();
        let _ = tx.send(ReplyEvent { generation, body }).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[test]
    fn test_default_reply_when_no_keyword_matches() {
        assert_eq!(reply_for("hello"), DEFAULT_REPLY);
        assert_eq!(reply_for(""), DEFAULT_REPLY);
        assert_eq!(reply_for("what can you do?"), DEFAULT_REPLY);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        assert_eq!(reply_for("What about BAIL?"), BAIL_REPLY);
        assert_eq!(reply_for("SUMMONS??"), SUMMONS_REPLY);
        assert_eq!(reply_for("please VeRiFy this"), VERIFY_REPLY);
    }

    #[test]
    fn test_keyword_matches_as_substring() {
        assert_eq!(reply_for("bailiff"), BAIL_REPLY);
        assert_eq!(reply_for("unverifyable"), VERIFY_REPLY);
    }

    #[test]
    fn test_later_rule_wins_when_several_keywords_appear() {
        assert_eq!(reply_for("I got a summons and need to verify it"), VERIFY_REPLY);
        assert_eq!(reply_for("bail and summons"), SUMMONS_REPLY);
        assert_eq!(reply_for("verify bail"), VERIFY_REPLY);
        assert_eq!(reply_for("bail summons verify"), VERIFY_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_only_after_the_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        schedule_reply(tx, 1, "what about bail".to_string(), Duration::from_millis(700));

        // Let the spawned task register its timer before moving the clock
        tokio::task::yield_now().await;

        advance(Duration::from_millis(699)).await;
        assert!(rx.try_recv().is_err(), "reply must not arrive early");

        advance(Duration::from_millis(2)).await;
        let event = rx.recv().await.expect("reply fires after the delay");
        assert_eq!(event.generation, 1);
        assert_eq!(event.body, BAIL_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_gains_user_message_then_deferred_reply() {
        use crate::chat::Sender;
        use crate::session::ChatSession;

        let mut session = ChatSession::new();
        session.update_draft("can you verify my notice?");
        let text = session.submit().expect("submit");
        assert_eq!(session.transcript().len(), 2, "user message appended at once");

        let (tx, mut rx) = mpsc::channel(8);
        schedule_reply(tx, 1, text, Duration::from_millis(700));
        tokio::task::yield_now().await;
        advance(Duration::from_millis(701)).await;

        let event = rx.recv().await.expect("deferred reply");
        session.push_reply(event.body);

        assert_eq!(session.transcript().len(), 3, "exactly +2 per submission");
        assert_eq!(session.transcript()[1].sender, Sender::User);
        assert_eq!(session.transcript()[2].sender, Sender::Assistant);
        assert_eq!(session.transcript()[2].body, VERIFY_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_submission_schedules_an_independent_reply() {
        let (tx, mut rx) = mpsc::channel(8);
        schedule_reply(
            tx.clone(),
            3,
            "bail please".to_string(),
            Duration::from_millis(700),
        );
        schedule_reply(tx, 3, "and a summons".to_string(), Duration::from_millis(700));
        tokio::task::yield_now().await;

        advance(Duration::from_millis(701)).await;
        let first = rx.recv().await.expect("first reply");
        let second = rx.recv().await.expect("second reply");
        let bodies = [first.body, second.body];
        assert!(bodies.contains(&BAIL_REPLY.to_string()));
        assert!(bodies.contains(&SUMMONS_REPLY.to_string()));
    }
}
