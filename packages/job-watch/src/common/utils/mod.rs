pub mod content;
pub mod fingerprint;

pub use content::{collapse_whitespace, truncate_with_ellipsis};
pub use fingerprint::link_fingerprint;
