//! Outbound navigation: the single "initiate purchase" operation shared by every buy control.
//!
//! Every buy button on a page funnels through [`initiate_purchase`], which issues exactly one
//! [`OutboundRequest`] to a [`LinkOpener`]. The request always targets a fresh browsing
//! context with `noopener,noreferrer`, so the affiliate site gets no handle on our window and
//! no referring address.
//!
//! Components resolve the opener with [`use_opener`]. Platforms get [`PlatformOpener`]
//! unless something up the tree provided an [`Opener`] through context (tests do this to
//! record requests instead of evaluating script).

use std::rc::Rc;

use dioxus::prelude::*;

/// Browsing context target for outbound links.
pub const NEW_BROWSING_CONTEXT: &str = "_blank";

/// Window features isolating the new context from this page.
pub const ISOLATION_FEATURES: &str = "noopener,noreferrer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: String,
    pub target: &'static str,
    pub features: &'static str,
}

impl OutboundRequest {
    /// Request opening `url` in a new, isolated browsing context.
    pub fn isolated(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: NEW_BROWSING_CONTEXT,
            features: ISOLATION_FEATURES,
        }
    }

    /// `window.open(...)` call for the host document. Arguments are JSON string literals.
    pub fn to_script(&self) -> String {
        format!(
            "window.open({}, {}, {});",
            serde_json::Value::from(self.url.as_str()),
            serde_json::Value::from(self.target),
            serde_json::Value::from(self.features),
        )
    }
}

/// Anything able to hand a URL to the host platform.
pub trait LinkOpener {
    fn open(&self, request: &OutboundRequest);
}

/// Opens links through the host document (browser window or desktop webview).
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformOpener;

impl LinkOpener for PlatformOpener {
    fn open(&self, request: &OutboundRequest) {
        tracing::debug!(url = %request.url, "opening outbound link");
        // Fire and forget: the result of window.open is never awaited.
        let _ = document::eval(&request.to_script());
    }
}

/// Shared opener handle, suitable for Dioxus context.
#[derive(Clone)]
pub struct Opener(Rc<dyn LinkOpener>);

impl Opener {
    pub fn new(opener: impl LinkOpener + 'static) -> Self {
        Self(Rc::new(opener))
    }
}

impl Default for Opener {
    fn default() -> Self {
        Self::new(PlatformOpener)
    }
}

impl LinkOpener for Opener {
    fn open(&self, request: &OutboundRequest) {
        self.0.open(request);
    }
}

/// Open `hoplink` in a new isolated browsing context. One call, one request.
pub fn initiate_purchase(opener: &dyn LinkOpener, hoplink: &str) {
    opener.open(&OutboundRequest::isolated(hoplink));
}

/// Opener from context, or the platform opener when none was provided.
pub fn use_opener() -> Opener {
    try_use_context::<Opener>().unwrap_or_default()
}
