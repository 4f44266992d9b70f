mod archive;
mod array;
mod date;
mod error;
mod index;
mod object;
mod options;
mod path;
mod pretty;
mod raw;
mod value;

/// Keyed archive capabilities and the typed encoder/decoder over them.
pub use archive::{Archivable, ArchiveReader, ArchiveWriter, DecodedValue, Decoder, Encoder, KeyedArchive, jj_decoder, jj_encoder};
/// Confirmed and optional sequence views.
pub use array::{ArrayView, OptionalArrayView};
/// RFC 3339 helpers used by date conversion.
pub use date::{format_rfc3339, parse_rfc3339};
/// Error and result aliases.
pub use error::{JjError, Result};
/// Navigation step trait accepted by `Value::at`.
pub use index::Index;
/// Confirmed and optional mapping views.
pub use object::{ObjectView, OptionalObjectView};
/// Navigation options and path markers.
pub use options::{NIL_MARKER, NavOptions, ROOT_PATH};
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Decoded tree representation.
pub use raw::{Number, Raw};
/// Navigable value and root constructors.
pub use value::{ARRAY_TYPE_NAME, OBJECT_TYPE_NAME, Value, jj, jj_with};
