//! Game rules for the marking game
//!
//! The only rule beyond turn alternation is the win condition:
//! five consecutive identical marks along a straight line.

pub mod win;

// Re-exports for convenient access
pub use win::{find_runs, Run, RUN_LEN};
