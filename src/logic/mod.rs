//! Lookup logic over the static tables
//!
//! - `resolver` - item → premium and topic → citations

pub mod resolver;
