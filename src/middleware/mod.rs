//! Request correlation
//!
//! Every request carries an `x-request-id`: a UUID is generated when the
//! client sends none and the value is echoed on the response. Background
//! recalculations send `<session>:<revision>` to the remote evaluator in the
//! same header.

use axum::http::{HeaderMap, HeaderName};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub const X_REQUEST_ID: &str = "x-request-id";

pub struct RequestIdLayers {
    pub set: SetRequestIdLayer<MakeRequestUuid>,
    pub propagate: PropagateRequestIdLayer,
}

pub fn request_id_layers() -> RequestIdLayers {
    let header = HeaderName::from_static(X_REQUEST_ID);
    RequestIdLayers {
        set: SetRequestIdLayer::new(header.clone(), MakeRequestUuid),
        propagate: PropagateRequestIdLayer::new(header),
    }
}

pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;

    /// The request id, or `-` for log fields when there is none.
    fn request_id_or_dash(&self) -> &str {
        self.request_id().unwrap_or("-")
    }
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> Option<&str> {
        self.get(X_REQUEST_ID)?.to_str().ok()
    }
}
