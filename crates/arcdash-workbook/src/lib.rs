//! Arc Dashboard Tools - workbook patching library
//!
//! Maintenance operations for the Azure Arc benefits dashboard:
//!
//! - **Load**: parse the Azure Monitor workbook JSON into an in-memory document
//! - **Migrate**: rewrite legacy `conditionalVisibility` rules targeting the
//!   `ArcTab` parameter into the multi-condition `conditionalVisibilities` form
//! - **Rewrite**: point the `ArcTab`/`SqlTab` tab parameters at dynamic
//!   Resource Graph queries so they reset when `ResourceType` changes
//! - **Save**: serialize the patched document back over the source file
//!
//! The pipeline is strictly linear (load → migrate → rewrite → save) and
//! terminates on the first error. Running it twice produces the same document
//! as running it once.
//!
//! # Example
//!
//! ```rust,ignore
//! use arcdash_workbook::{fix_workbook, PatchMode};
//!
//! let report = fix_workbook("workbook/arc-benefits-workbook.json", PatchMode::Apply)?;
//! println!("{} visibility nodes migrated", report.migrated_nodes);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod document;
pub mod error;
pub mod parameters;
pub mod patch;
pub mod siteconfig;
pub mod visibility;

pub use document::Workbook;
pub use error::{LoadError, SaveError, WorkbookError, WorkbookResult};
pub use parameters::update_tab_parameters;
pub use patch::{fix_workbook, PatchMode, PatchReport};
pub use siteconfig::SiteConfig;
pub use visibility::migrate_arc_tab_visibility;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
