//! Documents and the named entities extracted from them.
//!
//! Entity recognition itself is an external service reached through
//! [`EntityRecognizer`]; this module only stores what it returns.

pub mod document;
pub mod entity;
pub mod gazetteer;
pub mod recognizer;
pub mod warmup;

pub use document::Document;
pub use entity::{Entity, EntitySpan};
pub use gazetteer::GazetteerRecognizer;
pub use recognizer::EntityRecognizer;
pub use warmup::WarmRecognizer;
