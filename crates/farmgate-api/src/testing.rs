//! Scripted transport for service tests.

use farmgate_data::{FetchError, Request, Response, Transport};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Transport fake that records requests and plays back scripted responses.
///
/// Clones share the same script and log, so a test can keep a handle while
/// the service owns the transport.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Rc<ScriptedInner>,
}

#[derive(Default)]
struct ScriptedInner {
    requests: RefCell<Vec<Request>>,
    responses: RefCell<VecDeque<Result<Response, FetchError>>>,
}

impl ScriptedTransport {
    /// Transport with a single scripted response.
    pub fn returning(response: Response) -> Self {
        let transport = Self::default();
        transport.push(Ok(response));
        transport
    }

    /// Transport whose only response is a connectivity failure.
    pub fn failing(message: impl Into<String>) -> Self {
        let transport = Self::default();
        transport.push(Err(FetchError::RequestError(message.into())));
        transport
    }

    /// Queue another scripted result.
    pub fn push(&self, result: Result<Response, FetchError>) {
        self.inner.responses.borrow_mut().push_back(result);
    }

    /// Requests executed so far.
    pub fn requests(&self) -> Vec<Request> {
        self.inner.requests.borrow().clone()
    }

    /// Number of requests executed so far.
    pub fn request_count(&self) -> usize {
        self.inner.requests.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: Request) -> Result<Response, FetchError> {
        self.inner.requests.borrow_mut().push(request);
        self.inner
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::RequestError("no scripted response".into())))
    }
}
