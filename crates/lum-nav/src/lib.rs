//! Page navigation for lum.
//!
//! Builds the navigation shown around a single document by looking at the
//! filesystem next to it:
//!
//! - **Menu**: navigable directories of the document's directory, one level of
//!   children deep
//! - **Side menu**: sibling content files, minus the directory's index
//! - **Breadcrumb**: the document's base path split into links, rooted at Home
//!
//! Names starting with `.` or `_` are private and never appear in navigation.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use lum_nav::{Navigator, PageContext};
//!
//! let context = PageContext::resolve(Path::new("docs"), "/guide/")?;
//! let navigation = Navigator::default().build(&context)?;
//!
//! for item in &navigation.menu {
//!     println!("{} -> {}", item.text, item.link);
//! }
//! # Ok(())
//! # }
//! ```

mod context;
mod filter;
mod link;
mod name;
mod navigator;
mod scanner;

pub use context::{PageContext, ResolveError};
pub use filter::{content_file_filter, is_content_file, is_navigable_directory, is_private};
pub use link::{NavigationItem, build_link, build_link_in};
pub use name::{
    DEFAULT_CONTENT_EXTENSION, KNOWN_EXTENSIONS, strip_extension_in, strip_known_extension,
    title_from_name, title_from_name_in,
};
pub use navigator::{BreadCrumbItem, Breadcrumb, Navigator, NavigatorConfig, PageNavigation};
pub use scanner::{Entry, EntryKind, ScanError, ScanErrorKind, scan};
