/// Dates older than this many years are rejected.
pub const MAX_DOCUMENT_AGE_YEARS: u32 = 5;

/// Exact length of a commodity classification code.
pub const TNVED_CODE_LENGTH: usize = 10;

/// Accepted taxpayer identification number lengths.
pub const INN_LENGTHS: [usize; 2] = [10, 12];
