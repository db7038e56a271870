//! Counting paths through a cave system from `start` to `end`, where large
//! caves may be revisited freely and small caves at most once, except for a
//! single small cave per path that may be entered twice.

pub mod caves;
pub mod error;
pub mod parser;
pub mod search;

pub use caves::{CaveId, CaveSize, CaveSystem};
pub use error::{Error, Result};
pub use parser::{parse_cave_system, parse_edges};
pub use search::{count_paths, Part, PathSearch};
