//! Display and trait implementations for TraceError

use super::cause::Cause;
use super::types::TraceError;
use std::error::Error as StdError;
use std::fmt;

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if !self.message().is_empty() {
            write!(f, ": {}", self.message())?;
        }
        Ok(())
    }
}

impl StdError for TraceError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.causes().iter().find_map(Cause::as_error)
    }
}
