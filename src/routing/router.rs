//! Encrypted route resolution.
//!
//! # Responsibilities
//! - Decode the opaque master/module segments of an admin path
//! - Look the pair up in the registry
//! - Pick the component for the navigation mode
//!
//! # Design Decisions
//! - Pure and stateless: same input, same `Resolution`
//! - Every failure is a redirect home, never an error
//! - The redirect carries a reason for logs and metrics only

use serde::Serialize;

use crate::routing::codec::SegmentCodec;
use crate::routing::path::{decode as percent_decode, Mode, NavigationRequest};
use crate::routing::registry::{Component, RouteRegistry};
use crate::routing::vocabulary::Segment;

/// A navigation that maps to a page component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    pub master: Segment,
    pub module: Segment,
    pub mode: Mode,
    pub record_id: Option<String>,
    pub component: Component,
}

/// Why a navigation was sent home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// Path does not have an admin shape.
    MalformedPath,
    UnknownMaster,
    UnknownModule,
    /// Both segments decode but the pair is not registered.
    Unregistered,
    /// The entry has no component for the requested mode.
    MissingView,
}

impl RedirectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RedirectReason::MalformedPath => "malformed_path",
            RedirectReason::UnknownMaster => "unknown_master",
            RedirectReason::UnknownModule => "unknown_module",
            RedirectReason::Unregistered => "unregistered",
            RedirectReason::MissingView => "missing_view",
        }
    }
}

/// Outcome of resolving one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedRoute),
    RedirectHome(RedirectReason),
}

impl Resolution {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::RedirectHome(_))
    }

    /// The selected component, if any.
    pub fn component(&self) -> Option<Component> {
        match self {
            Resolution::Resolved(route) => Some(route.component),
            Resolution::RedirectHome(_) => None,
        }
    }

    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Resolved(_) => "resolved",
            Resolution::RedirectHome(reason) => reason.as_str(),
        }
    }
}

/// Resolves opaque admin paths against a codec and a registry.
#[derive(Debug, Clone, Copy)]
pub struct EncryptedRouter<'a> {
    codec: &'a SegmentCodec,
    registry: &'a RouteRegistry,
}

impl EncryptedRouter<'static> {
    /// Router over the shared codec and the back-office registry.
    pub fn global() -> Self {
        Self::new(SegmentCodec::global(), RouteRegistry::global())
    }
}

impl<'a> EncryptedRouter<'a> {
    pub fn new(codec: &'a SegmentCodec, registry: &'a RouteRegistry) -> Self {
        Self { codec, registry }
    }

    pub fn codec(&self) -> &'a SegmentCodec {
        self.codec
    }

    pub fn registry(&self) -> &'a RouteRegistry {
        self.registry
    }

    /// Resolve a full request path. The record id is percent-decoded.
    pub fn resolve_path(&self, path: &str) -> Resolution {
        let Some(req) = NavigationRequest::parse(path) else {
            return Resolution::RedirectHome(RedirectReason::MalformedPath);
        };

        let record_id = req.record_id.map(percent_decode);
        self.resolve(
            req.master_token,
            req.module_token,
            record_id.as_deref(),
            req.ends_with_new,
        )
    }

    /// Resolve already-split path segments.
    pub fn resolve(
        &self,
        master_token: &str,
        module_token: &str,
        record_id: Option<&str>,
        ends_with_new: bool,
    ) -> Resolution {
        let Some(master) = self.codec.decode(master_token) else {
            return Resolution::RedirectHome(RedirectReason::UnknownMaster);
        };
        let Some(module) = self.codec.decode(module_token) else {
            return Resolution::RedirectHome(RedirectReason::UnknownModule);
        };
        let Some(entry) = self.registry.get(master, module) else {
            return Resolution::RedirectHome(RedirectReason::Unregistered);
        };

        let mode = Mode::from_parts(record_id, ends_with_new);
        match entry.select(mode) {
            Some(component) => Resolution::Resolved(ResolvedRoute {
                master,
                module,
                mode,
                record_id: record_id.map(str::to_string),
                component,
            }),
            None => Resolution::RedirectHome(RedirectReason::MissingView),
        }
    }
}
