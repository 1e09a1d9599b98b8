//! Orchestration logic shared by the command handlers: each service ties the
//! pure game logic to persistence without touching any Discord types.

pub mod gacha;
