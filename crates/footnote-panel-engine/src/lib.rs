pub mod change;
pub mod debounce;
pub mod index;
pub mod io;
pub mod models;
pub mod panel;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use change::needs_refresh;
pub use debounce::{Debouncer, RefreshTrigger};
pub use index::{FootnoteIndex, SharedFootnoteIndex};
pub use io::*;
pub use models::*;
pub use panel::{FootnotePanel, PanelState, Refresh};
pub use parsing::{ParseError, parse_footnotes, parse_footnotes_bytes, try_parse_footnotes};
