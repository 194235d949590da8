//! inipp - INI parsing with section inheritance and abstract sections
//!
//! Besides plain `[section]` / `key=value` files, this crate understands two
//! extensions:
//!
//! - `[child:parent]` makes `child` inherit every key it does not define
//!   itself from `parent` (and, transitively, from the parent's ancestors).
//! - A section whose name starts with `_` is abstract: it is hidden from the
//!   default section listing and is meant to be used as a template.
//!
//! Inheritance is resolved when values are read. Writing always targets the
//! named section. Cyclic inheritance is tolerated: the lookup simply stops at
//! the first section it has already visited.
//!
//! # Example
//!
//! ```rust
//! use inipp::IniDocument;
//!
//! let ini = IniDocument::parse("[cat]\nlegs=4\n[kitten:cat]\nweight=1.2\n");
//!
//! assert_eq!(ini.get_value("kitten", "legs", 0), 4);
//! assert_eq!(ini.get_value("kitten", "weight", 0.0), 1.2);
//! assert_eq!(ini.effective_keys("kitten"), vec!["legs", "weight"]);
//! ```

pub mod accessor;
pub mod codec;
pub mod constants;
pub mod document;
pub mod section;
pub mod shared;
pub mod types;

pub use codec::{from_text, to_text, IniNumber, IniValue, NumberFormat};
pub use constants::DEFAULT_SEPARATOR;
pub use document::{AncestorChain, IniDocument, ParseSummary};
pub use section::Section;
pub use types::{InheritanceMode, IniError, IniResult, LineEnding, WriteOptions};
