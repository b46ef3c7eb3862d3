use crate::quest::QuestId;
use cor_core::ChainError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuestError {
    #[error("Quest with id '{0}' is already registered")]
    DuplicateQuest(QuestId),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
}
