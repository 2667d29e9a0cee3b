use client::{ApiClient, RequestScope};
use dioxus::prelude::*;
use shared_types::ClientError;
use std::future::Future;

/// API access bound to one view's lifetime.
///
/// `Copy`, so event handlers and resources can capture it freely. Requests
/// still in flight when the view unmounts resolve to `ClientError::Cancelled`.
#[derive(Clone, Copy)]
pub struct ViewRequests {
    api: CopyValue<ApiClient>,
    scope: CopyValue<RequestScope>,
}

impl ViewRequests {
    pub async fn run<T, F, Fut>(&self, call: F) -> Result<T, ClientError>
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let api = self.api.cloned();
        let scope = self.scope.cloned();
        scope.run(call(api)).await
    }
}

pub fn use_requests() -> ViewRequests {
    let api = use_context::<ApiClient>();
    let scope = use_hook(RequestScope::new);

    let on_unmount = scope.clone();
    use_drop(move || on_unmount.abort_all());

    use_hook(move || ViewRequests {
        api: CopyValue::new(api),
        scope: CopyValue::new(scope),
    })
}
