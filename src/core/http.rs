//! Request headers for tournament service calls

use crate::api::endpoints::Resource;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

/// Headers sent with a call to `resource`.
///
/// Every call accepts JSON; the POST actions also declare a JSON body even
/// though they send none.
pub fn headers_for(resource: Resource) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if resource.sends_json() {
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    h
}
