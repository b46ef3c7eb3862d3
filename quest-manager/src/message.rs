use crate::quest::QuestId;

/// Quest update request. Each variant is claimed by exactly one processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestMessage {
    Start(QuestId),
    Complete(QuestId),
    Fail(QuestId),
}

impl QuestMessage {
    pub fn quest_id(&self) -> QuestId {
        match self {
            QuestMessage::Start(id) | QuestMessage::Complete(id) | QuestMessage::Fail(id) => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            QuestMessage::Start(_) => "StartQuestMessage",
            QuestMessage::Complete(_) => "CompleteQuestMessage",
            QuestMessage::Fail(_) => "FailQuestMessage",
        }
    }
}
