//! Demo scenarios replayed by the `cor` binary.

use anyhow::Result;
use debug_toolkit::{DebugConfig, DebugMessage, DebugToolKit};
use quest_manager::{Quest, QuestId, QuestManager, QuestMessage, QuestState};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Player snapshot saved by the debug demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub health: i32,
    pub position: Position,
}

/// General message, state save of `player_state`, then an absent message.
pub fn run_debug_demo(config: &DebugConfig) -> Result<()> {
    let toolkit = DebugToolKit::new(config)?;

    toolkit.log(DebugMessage::general("Application started."));

    let player = PlayerData {
        health: 100,
        position: Position::default(),
    };
    toolkit.log(DebugMessage::state_save("player_state", &player));

    toolkit.log(None::<DebugMessage>);

    info!(log_file = %config.log_file_path.display(), "Debug demo finished");
    Ok(())
}

/// Registers one quest and sends Start, Complete, Fail. Returns the final state.
pub fn run_quest_demo(name: &str) -> Result<QuestState> {
    let mut manager = QuestManager::new()?;
    let id = QuestId::new();
    manager.register_quest(Quest::new(id, name))?;

    for message in [
        QuestMessage::Start(id),
        QuestMessage::Complete(id),
        QuestMessage::Fail(id),
    ] {
        let outcome = manager.update_quest(message);
        info!(kind = message.kind(), outcome = ?outcome, "Quest updated");
    }

    let state = manager
        .quest(&id)
        .map(|q| q.state)
        .ok_or_else(|| anyhow::anyhow!("Quest '{}' disappeared from the manager", id))?;
    info!(quest_id = %id, state = %state, "Quest demo finished");
    Ok(state)
}
