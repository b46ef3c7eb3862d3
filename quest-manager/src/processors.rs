//! Quest processors, in dispatch order: start → complete → fail.
//!
//! A processor that recognizes its message variant always consumes it (Stop), whether or not the
//! transition guard passed or the quest exists. Unrecognized variants are forwarded.

use crate::message::QuestMessage;
use crate::quest::{QuestBook, QuestId, QuestState};
use cor_core::{Handler, HandlerResponse};
use tracing::{debug, info};

/// Applies `from → to` to the addressed quest if it is currently in `from`.
fn transition(quests: &mut QuestBook, id: QuestId, from: QuestState, to: QuestState, verb: &str) {
    let Some(quest) = quests.get_mut(&id) else {
        info!(quest_id = %id, "Quest with id '{}' not found.", id);
        return;
    };

    if quest.state == from {
        quest.state = to;
        info!(quest_id = %id, "Quest '{}' {}.", quest.name, verb);
    } else {
        info!(
            quest_id = %id,
            "Quest '{}' cannot be {}. Current state: {}",
            quest.name,
            verb,
            quest.state
        );
    }
}

/// NotStarted → InProgress on Start.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartQuestProcessor;

impl Handler<QuestMessage, QuestBook> for StartQuestProcessor {
    fn handle(&self, message: &QuestMessage, quests: &mut QuestBook) -> HandlerResponse {
        debug!("StartQuestProcessor: Processing message of type {}", message.kind());

        match message {
            QuestMessage::Start(id) => {
                transition(quests, *id, QuestState::NotStarted, QuestState::InProgress, "started");
                HandlerResponse::Stop
            }
            _ => HandlerResponse::Continue,
        }
    }
}

/// InProgress → Completed on Complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteQuestProcessor;

impl Handler<QuestMessage, QuestBook> for CompleteQuestProcessor {
    fn handle(&self, message: &QuestMessage, quests: &mut QuestBook) -> HandlerResponse {
        debug!("CompleteQuestProcessor: Processing message of type {}", message.kind());

        match message {
            QuestMessage::Complete(id) => {
                transition(quests, *id, QuestState::InProgress, QuestState::Completed, "completed");
                HandlerResponse::Stop
            }
            _ => HandlerResponse::Continue,
        }
    }
}

/// InProgress → Failed on Fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailQuestProcessor;

impl Handler<QuestMessage, QuestBook> for FailQuestProcessor {
    fn handle(&self, message: &QuestMessage, quests: &mut QuestBook) -> HandlerResponse {
        debug!("FailQuestProcessor: Processing message of type {}", message.kind());

        match message {
            QuestMessage::Fail(id) => {
                transition(quests, *id, QuestState::InProgress, QuestState::Failed, "failed");
                HandlerResponse::Stop
            }
            _ => HandlerResponse::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::Quest;

    fn book_with(state: QuestState) -> (QuestBook, QuestId) {
        let id = QuestId::new();
        let mut quest = Quest::new(id, "Test quest");
        quest.state = state;
        let mut book = QuestBook::new();
        book.insert(id, quest);
        (book, id)
    }

    #[test]
    fn test_start_processor_forwards_other_variants() {
        let (mut book, id) = book_with(QuestState::InProgress);
        let processor = StartQuestProcessor;

        assert_eq!(
            processor.handle(&QuestMessage::Complete(id), &mut book),
            HandlerResponse::Continue
        );
        assert_eq!(
            processor.handle(&QuestMessage::Fail(id), &mut book),
            HandlerResponse::Continue
        );
        assert_eq!(book[&id].state, QuestState::InProgress);
    }

    #[test]
    fn test_start_processor_applies_transition() {
        let (mut book, id) = book_with(QuestState::NotStarted);

        let response = StartQuestProcessor.handle(&QuestMessage::Start(id), &mut book);

        assert_eq!(response, HandlerResponse::Stop);
        assert_eq!(book[&id].state, QuestState::InProgress);
    }

    #[test]
    fn test_guard_failure_still_consumes() {
        let (mut book, id) = book_with(QuestState::NotStarted);

        let response = CompleteQuestProcessor.handle(&QuestMessage::Complete(id), &mut book);

        assert_eq!(response, HandlerResponse::Stop);
        assert_eq!(book[&id].state, QuestState::NotStarted);
    }

    #[test]
    fn test_unknown_id_still_consumes() {
        let (mut book, _) = book_with(QuestState::InProgress);
        let snapshot = book.clone();

        let response = FailQuestProcessor.handle(&QuestMessage::Fail(QuestId::new()), &mut book);

        assert_eq!(response, HandlerResponse::Stop);
        assert_eq!(book, snapshot);
    }

    #[test]
    fn test_fail_processor_applies_transition() {
        let (mut book, id) = book_with(QuestState::InProgress);

        FailQuestProcessor.handle(&QuestMessage::Fail(id), &mut book);

        assert_eq!(book[&id].state, QuestState::Failed);
    }
}
