//! Domain data shapes shared by descriptors, the registry and the pipeline.

pub mod attributes;
pub mod category;
pub mod position;
pub mod record;

pub use attributes::{KeyValue, KeyValueBag};
pub use category::Category;
pub use position::{Accuracy, Position, PositionError};
pub use record::{FieldKind, FieldRecord, FieldSpec};
