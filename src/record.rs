//! The handoff record: the exact text blob written on every invocation.
//!
//! The file format is two newline-terminated lines and is consumed by an
//! external tool, so the rendering here is byte-exact and must not change:
//!
//! ```text
//! Some text: <raw command-line string>
//! Integer: 1, float: 3.141593
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ShimError;

/// Fixed integer field of the trailer line.
pub const INTEGER_FIELD: i32 = 1;

/// Fixed float field of the trailer line. Rendered with six fractional
/// digits, so consumers see `3.141593`.
pub const FLOAT_FIELD: f32 = 3.141_592_7;

/// One invocation's output: the payload line plus the fixed trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    payload: String,
}

impl Record {
    /// Build a record around the raw command-line payload (may be empty).
    pub fn new(payload: impl Into<String>) -> Self {
        Record {
            payload: payload.into(),
        }
    }

    /// Render the record as the exact bytes the handoff file will contain.
    pub fn render(&self) -> String {
        format!(
            "Some text: {}\nInteger: {}, float: {:.6}\n",
            self.payload, INTEGER_FIELD, FLOAT_FIELD
        )
    }

    /// Write the record to `path`, truncating any previous content.
    ///
    /// The parent directory must already exist; the shim never creates
    /// directories. Open, write and flush failures all carry the path back
    /// to the caller.
    pub fn write_to(&self, path: &Path) -> Result<(), ShimError> {
        let mut file = File::create(path).map_err(|e| ShimError::io(e, path))?;
        file.write_all(self.render().as_bytes())
            .map_err(|e| ShimError::io(e, path))?;
        file.flush().map_err(|e| ShimError::io(e, path))?;
        Ok(())
    }
}
