//! A single routing table entry.

use crate::parser::Method;
use crate::router::handler::HandlerFn;

/// The set of method-to-handler bindings for one canonical path.
///
/// Handlers live in a fixed array indexed by [`Method::index`], so both
/// binding and lookup are plain array accesses. A slot is either unset or
/// bound; binding an already-bound slot replaces the handler, and nothing
/// ever clears a slot.
pub struct Route {
    path: String,
    endpoints: [Option<HandlerFn>; Method::COUNT],
}

impl Route {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            endpoints: std::array::from_fn(|_| None),
        }
    }

    /// The canonical path this route is keyed on.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The handler bound for the given method, if any.
    pub fn handler(&self, method: Method) -> Option<&HandlerFn> {
        self.endpoints[method.index()].as_ref()
    }

    /// The methods that currently have a handler bound.
    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        Method::ALL
            .into_iter()
            .filter(|method| self.endpoints[method.index()].is_some())
    }

    pub(crate) fn bind(&mut self, method: Method, handler: HandlerFn) {
        self.endpoints[method.index()] = Some(handler);
    }
}
