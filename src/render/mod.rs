//! Output rendering (console progress, summary, run manifest)

pub mod console;
pub mod report;
pub mod summary;

pub use console::ConsoleProgress;
pub use report::{build_report, write_report};
pub use summary::render_summary;
