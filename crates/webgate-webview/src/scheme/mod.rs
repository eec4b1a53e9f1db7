//! Local content serving via the private URL scheme.
//!
//! A request to `x-local://logo.png` is answered by looking `logo.png` up
//! in the owning view's [`ResourceRegistry`](crate::ResourceRegistry) and
//! streaming the file back with a MIME type derived from its extension.
//! Every failure becomes a well-formed 4xx response; nothing here panics
//! or leaves the rendering surface waiting.

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Weak;

use http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use http::{Request, Response, StatusCode, Uri};
use tracing::{debug, warn};
use webgate_common::ResolutionError;

use crate::mime::mime_from_extension;


/// Private scheme used when none is configured.
pub const DEFAULT_SCHEME: &str = "x-local";

/// Read access to the owner's resource registry.
///
/// The resolver only ever holds a `Weak<dyn ResourceOwner>`, so it never
/// keeps a destroyed view alive.
pub trait ResourceOwner: Send + Sync {
    fn lookup_resource(&self, name: &str) -> Option<PathBuf>;
}

/// A resolved request: the concrete file to stream back and its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// Symbolic name taken from the request URL.
    pub name: String,
    /// File registered under `name`; existed at resolution time.
    pub path: PathBuf,
    pub mime: &'static str,
}

impl ResolvedResource {
    /// Read the file contents.
    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// Resolves private-scheme requests against the owner's registry.
pub struct SchemeResolver {
    scheme: String,
    cors_origin: String,
    owner: Weak<dyn ResourceOwner>,
}

impl SchemeResolver {
    pub fn new(scheme: impl Into<String>, owner: Weak<dyn ResourceOwner>) -> Self {
        Self {
            scheme: scheme.into(),
            cors_origin: "*".into(),
            owner,
        }
    }

    /// Set the `Access-Control-Allow-Origin` value sent with served files.
    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = origin.into();
        self
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Whether `url` is addressed to this resolver.
    pub fn matches(&self, url: &str) -> bool {
        self.symbolic_name(url).is_some()
    }

    /// Everything after `scheme://`.
    ///
    /// Also accepts the `http(s)://<scheme>.localhost/` form WebView2 rewrites
    /// custom schemes into on Windows.
    pub fn symbolic_name<'a>(&self, url: &'a str) -> Option<&'a str> {
        let direct = format!("{}://", self.scheme);
        if let Some(rest) = strip_prefix_ignore_case(url, &direct) {
            return Some(rest);
        }
        ["http", "https"].iter().find_map(|origin| {
            let host = format!("{origin}://{}.localhost", self.scheme);
            match strip_prefix_ignore_case(url, &host)? {
                "" => Some(""),
                rest => rest.strip_prefix('/'),
            }
        })
    }

    /// Resolve a requested URL to the file that should answer it.
    ///
    /// Each failure is logged here, once.
    pub fn resolve_scheme_request(
        &self,
        requested_url: Option<&str>,
    ) -> Result<ResolvedResource, ResolutionError> {
        let url = match requested_url.map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => {
                warn!(scheme = %self.scheme, "scheme request without a target address");
                return Err(ResolutionError::MalformedRequest);
            }
        };

        let Some(name) = self.symbolic_name(url) else {
            warn!(url = %url, scheme = %self.scheme, "request is not addressed to the private scheme");
            return Err(ResolutionError::ForeignScheme(url.to_string()));
        };
        if name.is_empty() {
            warn!(url = %url, "scheme request names no resource");
            return Err(ResolutionError::MalformedRequest);
        }

        let Some(owner) = self.owner.upgrade() else {
            debug!(url = %url, "owner view is gone, nothing to resolve against");
            return Err(ResolutionError::UnknownResource(name.to_string()));
        };

        let Some(path) = owner.lookup_resource(name) else {
            warn!(url = %url, name = %name, "unknown local resource");
            return Err(ResolutionError::UnknownResource(name.to_string()));
        };

        if !path.is_file() {
            warn!(url = %url, path = %path.display(), "no such file");
            return Err(ResolutionError::FileMissing(path));
        }

        let mime = mime_from_extension(&path);
        debug!(url = %url, path = %path.display(), mime, "resolved local resource");
        Ok(ResolvedResource {
            name: name.to_string(),
            path,
            mime,
        })
    }

    /// Answer a custom-protocol request from the rendering surface.
    pub fn respond(&self, request: &Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
        let address = request_address(request.uri());
        self.respond_to(address.as_deref())
    }

    /// Answer a request for `requested_url`: 200 with the file, or 4xx.
    pub fn respond_to(&self, requested_url: Option<&str>) -> Response<Cow<'static, [u8]>> {
        let resource = match self.resolve_scheme_request(requested_url) {
            Ok(resource) => resource,
            Err(e) => return failure_response(&e),
        };

        let data = match resource.read() {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %resource.path.display(), error = %e, "local resource could not be read");
                return failure_response(&ResolutionError::FileMissing(resource.path));
            }
        };

        Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, resource.mime)
            .header(ACCESS_CONTROL_ALLOW_ORIGIN, self.cors_origin.as_str())
            .body(Cow::Owned(data))
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to build local resource response");
                plain_response(StatusCode::INTERNAL_SERVER_ERROR, b"Internal Error")
            })
    }
}

/// Rebuild the address a request was made for, or `None` if the request
/// carries no scheme to resolve against.
///
/// `http::Uri` renders a bare authority with a trailing `/`; that slash is
/// dropped so `x-local://logo.png` maps back to the name `logo.png`.
pub fn request_address(uri: &Uri) -> Option<String> {
    let scheme = uri.scheme_str()?;
    let authority = uri.authority().map(|a| a.as_str()).unwrap_or("");
    let path = match uri.path() {
        "/" => "",
        path => path,
    };
    let mut address = format!("{scheme}://{authority}{path}");
    if let Some(query) = uri.query() {
        address.push('?');
        address.push_str(query);
    }
    Some(address)
}

/// The "no such resource" answer for a resolution failure.
pub fn failure_response(error: &ResolutionError) -> Response<Cow<'static, [u8]>> {
    match error {
        ResolutionError::MalformedRequest => plain_response(StatusCode::BAD_REQUEST, b"Bad Request"),
        _ => plain_response(StatusCode::NOT_FOUND, b"Not Found"),
    }
}

fn plain_response(status: StatusCode, body: &'static [u8]) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Borrowed(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    response
}

pub(crate) fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
