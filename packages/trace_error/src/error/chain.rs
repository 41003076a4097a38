//! Cause lookup, source chains and message flattening

use super::cause::{Cause, Message};
use super::types::TraceError;
use std::error::Error as StdError;

impl TraceError {
    /// The `index`-th non-message argument, `None` past the end
    #[must_use]
    pub fn cause(&self, index: usize) -> Option<&Cause> {
        self.inner.causes.get(index)
    }

    /// Iterate the `source()` chain starting at the direct cause
    ///
    /// The direct cause is the first error-typed argument. A cycle in the
    /// chain is a caller error and makes this iterator endless.
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: self.source(),
        }
    }

    /// The error `depth` hops down the `source()` chain (0 = direct cause)
    #[must_use]
    pub fn cause_at_depth(&self, depth: usize) -> Option<&(dyn StdError + 'static)> {
        self.chain().nth(depth)
    }

    /// Flatten this error and its causes into messages and payloads
    ///
    /// Visits this error's message, then each cause in order: payloads are
    /// appended as-is, chainable errors are flattened recursively and any
    /// other error contributes its display text.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        let mut messages = Vec::new();
        self.collect_messages(&mut messages);
        messages
    }

    fn collect_messages(&self, out: &mut Vec<Message>) {
        out.push(Message::Text(self.message().to_owned()));
        for cause in self.causes() {
            match cause {
                Cause::Data(value) => out.push(Message::Data(value.clone())),
                Cause::Trace(error) => error.collect_messages(out),
                Cause::Native(error) => out.push(Message::Text(error.to_string())),
            }
        }
    }
}

/// Iterator over a `source()` chain
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
