// Read-only data-quality diagnostics plus the two default-substitution
// rules. None of these stages deletes or merges rows.

pub mod duplicates;
pub mod integrity;
pub mod missing;
pub mod range;
