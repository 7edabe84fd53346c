pub mod footnote;
pub mod position;

pub use footnote::Footnote;
pub use position::{FootnoteReference, Position};
