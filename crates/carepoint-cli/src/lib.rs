//! # Carepoint CLI
//!
//! Argument types and output rendering used by the `carepoint-cli` binary.
//!
//! ```ignore
//! use carepoint_cli::report::render_path_check;
//!
//! println!("{}", render_path_check(Some(UserType::Staff), "/admin/system/settings"));
//! ```

pub mod args;
pub mod report;
