//! Backend Gateway
//!
//! One thin API client per concern, each a struct over [`Config`] and a
//! shared `reqwest::Client`. Calls are synchronous from the caller's
//! point of view: each method spins up its own Tokio runtime and blocks
//! on the request. The UI layer never calls these on the render thread;
//! it spawns a worker thread and collects the result through an mpsc
//! channel polled once per frame.

use reqwest::Response;
use tokio::runtime::Runtime;

use crate::shared::ApiError;

pub mod directory;
pub mod messaging;
pub mod notifications;
pub mod registrar;

pub use directory::DirectoryApi;
pub use messaging::MessagingApi;
pub use notifications::NotificationApi;
pub use registrar::RegistrarApi;

/// Runtime for one blocking gateway call
pub(crate) fn call_runtime() -> Result<Runtime, ApiError> {
    Runtime::new().map_err(|e| ApiError::Runtime(e.to_string()))
}

/// Map a non-success response to an [`ApiError::Http`]
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::http(status, body))
}
