use axum::http::{header::HOST, uri::Authority, HeaderMap, Uri};

/// Hostname of the incoming request, port stripped and lowercased.
///
/// `override_host` wins when set. Otherwise the `Host` header is used, then the
/// authority of an absolute request URI (HTTP/2 requests carry it there).
pub fn request_hostname(
    headers: &HeaderMap,
    uri: &Uri,
    override_host: Option<&str>,
) -> Option<String> {
    if let Some(host) = override_host.filter(|h| !h.is_empty()) {
        return Some(host.to_ascii_lowercase());
    }

    let from_header = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.trim().parse::<Authority>().ok());

    from_header
        .or_else(|| uri.authority().cloned())
        .map(|authority| authority.host().to_ascii_lowercase())
        .filter(|host| !host.is_empty())
}
