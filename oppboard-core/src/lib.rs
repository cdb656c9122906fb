// Public modules
pub mod catalog;
pub mod dates;
pub mod facets;
pub mod fields;
pub mod filtering;
pub mod io;
pub mod models;
pub mod sorting;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use dates::parse_deadline;
pub use facets::facet_values;
pub use fields::{FieldHints, LogicalField};
pub use filtering::{apply_filters, matches};
pub use io::{load_dataset, parse_dataset, CatalogError};
pub use models::{Dataset, DatasetMeta, FilterState, ParseSortModeError, Record, SortMode, ALL};
pub use sorting::{collation_key, sort_records};
