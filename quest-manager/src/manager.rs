//! Quest dispatcher: owns the quest records and the start → complete → fail chain.

use crate::error::QuestError;
use crate::message::QuestMessage;
use crate::processors::{CompleteQuestProcessor, FailQuestProcessor, StartQuestProcessor};
use crate::quest::{Quest, QuestBook, QuestId, QuestState};
use handler_chain::HandlerChain;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::{info, instrument};

/// What an update did to the addressed quest. Diagnostic only: the pipeline itself treats all three
/// the same way (message consumed, nothing surfaced as an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Applied { from: QuestState, to: QuestState },
    /// Guard failed; the quest kept this state.
    Unchanged(QuestState),
    UnknownQuest,
}

pub struct QuestManager {
    quests: QuestBook,
    chain: HandlerChain<QuestMessage, QuestBook>,
}

impl QuestManager {
    /// Creates an empty manager with the start → complete → fail chain.
    pub fn new() -> Result<Self, QuestError> {
        let chain = HandlerChain::<QuestMessage, QuestBook>::new()
            .add_handler(Arc::new(StartQuestProcessor))?
            .add_handler(Arc::new(CompleteQuestProcessor))?
            .add_handler(Arc::new(FailQuestProcessor))?;

        Ok(Self {
            quests: QuestBook::new(),
            chain,
        })
    }

    /// Adds a quest. Fails if a quest with the same id is already registered; the existing record is kept.
    pub fn register_quest(&mut self, quest: Quest) -> Result<(), QuestError> {
        match self.quests.entry(quest.id) {
            Entry::Occupied(_) => Err(QuestError::DuplicateQuest(quest.id)),
            Entry::Vacant(slot) => {
                info!(quest_id = %quest.id, name = %quest.name, "Quest registered");
                slot.insert(quest);
                Ok(())
            }
        }
    }

    /// Dispatches an update through the chain. Never fails; the returned outcome is informational.
    #[instrument(skip(self), fields(kind = message.kind(), quest_id = %message.quest_id()))]
    pub fn update_quest(&mut self, message: QuestMessage) -> UpdateOutcome {
        let id = message.quest_id();
        let before = self.quests.get(&id).map(|q| q.state);

        self.chain.handle(&message, &mut self.quests);

        match (before, self.quests.get(&id).map(|q| q.state)) {
            (Some(from), Some(to)) if from != to => UpdateOutcome::Applied { from, to },
            (Some(state), _) => UpdateOutcome::Unchanged(state),
            (None, _) => UpdateOutcome::UnknownQuest,
        }
    }

    pub fn quest(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.get(id)
    }

    pub fn quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.values()
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}
