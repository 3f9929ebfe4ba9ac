//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Typed field paths                            |
//! | `handle` | Global configuration handle (read-only)      |
//! | `status` | Field status validation                      |

mod error;
mod field;
pub mod handle;
mod status;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
pub use status::{FieldStatus, check_field_status, check_section_status};
