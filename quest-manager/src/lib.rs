//! # quest-manager
//!
//! Quest-state pipeline built on [`handler_chain::HandlerChain`]: start → complete → fail.
//! Each processor claims exactly one [`QuestMessage`] variant and applies a guarded transition to
//! the quest it addresses in the shared [`QuestBook`].

pub mod error;
pub mod manager;
pub mod message;
pub mod processors;
pub mod quest;

pub use error::QuestError;
pub use manager::{QuestManager, UpdateOutcome};
pub use message::QuestMessage;
pub use processors::{CompleteQuestProcessor, FailQuestProcessor, StartQuestProcessor};
pub use quest::{Quest, QuestBook, QuestId, QuestState};
