use crate::lookup::LookupStrategy;

pub const REMAF_CMD: &str = "remaf";
pub const LOOKUP_CMD: &str = "lookup";
pub const DEFAULT_OUT: &str = "remaf";
pub const DEFAULT_STRATEGY: LookupStrategy = LookupStrategy::Cursor;
