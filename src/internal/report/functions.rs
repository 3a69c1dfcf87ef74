pub mod summary;

pub use summary::{log_summary, render_summary};
