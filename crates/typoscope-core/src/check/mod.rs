pub mod issue;
pub mod merge;
pub mod request;

pub use issue::{normalize, offset_of_line, Issue};
pub use merge::merge;
pub use request::{CheckRange, CheckRequest};
