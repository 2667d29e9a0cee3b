use futures::future::{AbortHandle, Abortable};
use shared_types::ClientError;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Aborts every request it issued when the owning view goes away.
///
/// Clones share the same set of handles.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    inner: Rc<RefCell<ScopeState>>,
}

#[derive(Debug, Default)]
struct ScopeState {
    handles: Vec<AbortHandle>,
    closed: bool,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fut` unless the scope is aborted first, in which case the result
    /// is [`ClientError::Cancelled`].
    pub async fn run<T, F>(&self, fut: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut state = self.inner.borrow_mut();
            if state.closed {
                return Err(ClientError::Cancelled);
            }
            state.handles.retain(|h| !h.is_aborted());
            state.handles.push(handle);
        }
        match Abortable::new(fut, registration).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Cancelled),
        }
    }

    /// Abort everything in flight and refuse new work.
    pub fn abort_all(&self) {
        let mut state = self.inner.borrow_mut();
        state.closed = true;
        for handle in state.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    /// Handles registered and not yet aborted. Finished requests are pruned
    /// lazily on the next `run`.
    pub fn in_flight(&self) -> usize {
        self.inner
            .borrow()
            .handles
            .iter()
            .filter(|h| !h.is_aborted())
            .count()
    }
}
