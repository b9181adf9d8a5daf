//! # Fieldcast - JSON to struct field declarations
//!
//! Turns a flat JSON object into one field declaration per key: the key is renamed
//! to a capitalized camel-case identifier and the value is mapped to a coarse type
//! label (`UnsignedInt`, `String`, `Bool` or `Unknown`).
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcast::{convert_json, render, RenderConfig};
//!
//! # fn main() -> Result<(), fieldcast::ConvertError> {
//! let fields = convert_json(r#"{"can_vote": true, "head_block_id": "04593f6b"}"#)?;
//! let text = render(&fields, &RenderConfig::bare());
//!
//! assert_eq!(text, "\tCanVote Bool\n\tHeadBlockId String");
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod logging;
pub mod naming;
pub mod types;

pub use convert::{render, render_json, ConvertError, Converter, Result};
pub use naming::to_identifier;
pub use types::{
    ConvertConfig, FieldDecl, LabelStyle, RenderConfig, TypeLabel, UnderscorePolicy,
};

/// Main entry point: convert JSON object text with the default configuration
pub fn convert_json(text: &str) -> Result<Vec<FieldDecl>> {
    Converter::default().convert_str(text)
}
