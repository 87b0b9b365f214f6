// Audit log actions
pub const PARTICIPANT_ADDED: &str = "PARTICIPANT_ADDED";
pub const PARTICIPANT_REMOVED: &str = "PARTICIPANT_REMOVED";
pub const TRANSACTION_ADDED: &str = "TRANSACTION_ADDED";
pub const TRANSACTION_REMOVED: &str = "TRANSACTION_REMOVED";
pub const SESSION_RESET: &str = "SESSION_RESET";

// Input limits
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_NOTE_LENGTH: usize = 500;
pub const MAX_AMOUNT: u64 = 1_000_000_000;
