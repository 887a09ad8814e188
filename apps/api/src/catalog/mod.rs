// Course catalog: read-only listing surface plus the shared row-fetch
// helpers the worksheet, attempt, and analytics modules reuse.

pub mod handlers;
pub mod queries;
