pub mod reporter;

pub use reporter::{WarningEvent, report_warning_code};
