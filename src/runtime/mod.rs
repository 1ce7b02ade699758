//! Runtime module - host integration
//!
//! This module contains the code that plays the host environment's role:
//! - `page` - owns the model, delivers lifecycle and pointer events
//! - `mouse` - turns "pointer is over X" into enter/leave sequences
//! - `script` - replayable pointer scripts for the CLI

pub mod mouse;
pub mod page;
pub mod script;

pub use mouse::PointerTracker;
pub use page::Page;
pub use script::{parse_script, run_script, Step};
