//! Transport seam between request construction and the platform HTTP stack.

use crate::{FetchError, Request, Response};

/// Executes a constructed [`Request`] against the network.
///
/// The storefront shell binds the platform HTTP stack (browser fetch, a
/// native client); tests bind a scripted fake. Execution is synchronous from
/// the caller's point of view: the call suspends until a response or a
/// transport failure is available.
pub trait Transport {
    /// Execute the request and return the raw response.
    ///
    /// A response with a 4xx/5xx status is `Ok` here; only failures to
    /// produce any response at all (connectivity, timeout) are `Err`.
    fn execute(&self, request: Request) -> Result<Response, FetchError>;
}
