use shared_types::ClientError;
use shared_ui::{ToastOptions, Toasts};

/// Toast text for a failed action, or `None` when the failure should stay
/// silent (the view that issued the request is gone).
pub fn failure_message(action: &str, err: &ClientError) -> Option<String> {
    if err.is_cancelled() {
        return None;
    }
    Some(format!("{action}: {}", err.user_message()))
}

/// Log a failure and show it as an error toast.
pub fn report_error(toasts: Toasts, action: &str, err: &ClientError) {
    match failure_message(action, err) {
        Some(message) => {
            tracing::error!(action, error = %err, "request failed");
            toasts.error(message, ToastOptions::new());
        }
        None => tracing::debug!(action, "request cancelled"),
    }
}

pub fn report_success(toasts: Toasts, message: impl Into<String>) {
    let message = message.into();
    tracing::info!(%message, "action succeeded");
    toasts.success(message, ToastOptions::new());
}
