//! Report document assembly.
//!
//! [`join_fragments`] joins the separately rendered records;
//! [`ReportPage`] wraps rendered HTML in the fixed page template.

mod page;

pub use page::{HR_SEPARATOR, REPORT_TITLE, ReportPage, join_fragments};
