pub mod maf;
pub mod schema;
pub mod variant;

// re-export for cleaner imports
pub use self::maf::MafRecord;
pub use self::schema::{ColumnSchema, HeaderLayout};
pub use self::variant::VariantRecord;
