// Domain layer - Record types and pure display helpers
pub mod creator;
pub mod engagement;
pub mod format;
pub mod growth;
