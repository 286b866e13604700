//! Admin path parsing.
//!
//! Accepted shapes:
//! ```text
//! /<master>/<module>              → view
//! /<master>/<module>/new          → new
//! /<master>/<module>/<id>/edit    → edit
//! ```
//! A single trailing slash is tolerated. Segments are not decoded here;
//! record ids travel percent-encoded and are decoded by the router.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

/// Literal last segment of a create path.
pub const NEW_SEGMENT: &str = "new";

/// Literal last segment of an edit path.
pub const EDIT_SEGMENT: &str = "edit";

/// Characters escaped in a path. `/` is kept.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped inside a single segment.
const SEGMENT: &AsciiSet = &PATH.add(b'/');

/// Percent-encode a whole path, keeping `/` separators.
pub fn encode_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH).into()
}

/// Percent-encode one path segment, including any `/`.
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    utf8_percent_encode(segment, SEGMENT).into()
}

/// Percent-decode a path or segment. Invalid UTF-8 is replaced.
pub fn decode(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

/// Which view of a module the path asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    View,
    New,
    Edit,
}

impl Mode {
    /// `Edit` iff a record id is present, else `New` iff the path ends in `/new`.
    pub fn from_parts(record_id: Option<&str>, ends_with_new: bool) -> Self {
        match (record_id, ends_with_new) {
            (Some(_), _) => Mode::Edit,
            (None, true) => Mode::New,
            (None, false) => Mode::View,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::View => "view",
            Mode::New => "new",
            Mode::Edit => "edit",
        }
    }
}

/// Raw segments of an admin path, still opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest<'a> {
    pub master_token: &'a str,
    pub module_token: &'a str,
    pub record_id: Option<&'a str>,
    pub ends_with_new: bool,
}

impl<'a> NavigationRequest<'a> {
    /// Split a path into its segments. Returns `None` for any other shape.
    pub fn parse(path: &'a str) -> Option<Self> {
        let trimmed = path.strip_prefix('/')?;
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let parts: Vec<&str> = trimmed.split('/').collect();

        if parts.iter().any(|part| part.is_empty()) {
            return None;
        }

        match parts.as_slice() {
            &[master, module] => Some(Self::new(master, module, None, false)),
            &[master, module, last] if last == NEW_SEGMENT => {
                Some(Self::new(master, module, None, true))
            }
            &[master, module, id, last] if last == EDIT_SEGMENT => {
                Some(Self::new(master, module, Some(id), false))
            }
            _ => None,
        }
    }

    fn new(
        master: &'a str,
        module: &'a str,
        record_id: Option<&'a str>,
        ends_with_new: bool,
    ) -> Self {
        Self {
            master_token: master,
            module_token: module,
            record_id,
            ends_with_new,
        }
    }

    pub fn mode(&self) -> Mode {
        Mode::from_parts(self.record_id, self.ends_with_new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_path() {
        let req = NavigationRequest::parse("/aaa/bbb").unwrap();
        assert_eq!(req.master_token, "aaa");
        assert_eq!(req.module_token, "bbb");
        assert_eq!(req.record_id, None);
        assert_eq!(req.mode(), Mode::View);

        let req = NavigationRequest::parse("/aaa/bbb/").unwrap();
        assert_eq!(req.mode(), Mode::View);
    }

    #[test]
    fn test_new_path() {
        let req = NavigationRequest::parse("/aaa/bbb/new").unwrap();
        assert!(req.ends_with_new);
        assert_eq!(req.mode(), Mode::New);
    }

    #[test]
    fn test_edit_path() {
        let req = NavigationRequest::parse("/aaa/bbb/42/edit").unwrap();
        assert_eq!(req.record_id, Some("42"));
        assert_eq!(req.mode(), Mode::Edit);
    }

    #[test]
    fn test_record_id_wins_over_new() {
        assert_eq!(Mode::from_parts(Some("7"), true), Mode::Edit);
        assert_eq!(Mode::from_parts(None, true), Mode::New);
        assert_eq!(Mode::from_parts(None, false), Mode::View);
    }

    #[test]
    fn test_malformed_paths() {
        for path in [
            "",
            "/",
            "aaa/bbb",
            "/aaa",
            "/aaa//bbb",
            "/aaa/bbb/42",
            "/aaa/bbb/42/delete",
            "/aaa/bbb/new/extra",
            "/aaa/bbb/1/2/edit",
        ] {
            assert_eq!(NavigationRequest::parse(path), None, "{path:?} should not parse");
        }
    }

    #[test]
    fn test_encoded_record_id_stays_one_segment() {
        let id = encode_segment("2024/07");
        assert_eq!(id, "2024%2F07");

        let path = format!("/aaa/bbb/{id}/edit");
        let req = NavigationRequest::parse(&path).unwrap();
        assert_eq!(req.record_id, Some("2024%2F07"));
        assert_eq!(decode(req.record_id.unwrap()), "2024/07");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(encode_segment("a b"), "a%20b");
        assert_eq!(encode_segment("42"), "42");
        assert_eq!(encode_segment("100%"), "100%25");
        assert_eq!(decode("a%20b"), "a b");
        assert_eq!(decode("caf%C3%A9"), "café");
    }

    #[test]
    fn test_path_encoding_keeps_separators() {
        assert_eq!(encode_path("/tableau-de-bord-é"), "/tableau-de-bord-%C3%A9");
        assert_eq!(encode_path("/dashboard/main"), "/dashboard/main");
        assert_eq!(decode(&encode_path("/tableau-de-bord-é")), "/tableau-de-bord-é");
    }
}
