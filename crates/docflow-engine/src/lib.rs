//! # Docflow Engine
//!
//! Element model and compiler of a canvas rich-text editor. Documents are
//! authored as nested containers and rendered as a flat sequence of atomic
//! records; [`compile`] converts between the two.
//!
//! ## Modules
//!
//! - [`model`]: the element record and its payloads
//! - [`text`]: shared literals and character splitting
//! - [`options`]: editor-wide defaults read by a compile pass
//! - [`formula`]: formula rendering seam
//! - [`compile`]: expand, compress and their helpers
//! - [`io`]: document files

pub mod compile;
pub mod formula;
pub mod io;
pub mod model;
pub mod options;
pub mod text;

// Re-export key types for easier usage
pub use compile::{
    compress, expand, group_by_row_flex, split_list_lines, text_from_element_list,
    CompressOptions, ExpandOptions, RowFlexGroup,
};
pub use formula::{FormulaCache, FormulaGeometry, FormulaRenderer};
pub use io::{read_document, write_document, IoError};
pub use model::{Control, Element, ElementKind};
pub use options::EditorOptions;
pub use text::ZERO;
