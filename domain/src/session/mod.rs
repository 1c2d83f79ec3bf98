//! Session subdomain: classifying console input and accumulating records.
//!
//! - [`input::SessionInput`]: what one line of user input means
//! - [`record::QaRecord`]: one markdown unit of history
//! - [`history::SessionHistory`]: ordered records for one run
//! - [`fence::strip_code_fence`]: response normalization

pub mod fence;
pub mod history;
pub mod input;
pub mod record;
