//! Error types for table actions.

use thiserror::Error;

/// Reasons an action was ignored.
///
/// Actions that fail leave the table untouched. Presentation layers are
/// expected to drop these: they mostly come from double clicks landing
/// while a timed sequence is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Input is locked while cards are being dealt.
    #[error("input is locked while cards are being dealt")]
    InputLocked,
}
