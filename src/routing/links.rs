//! Outbound admin links.
//!
//! Every admin href is assembled here from codec tokens, so generated links
//! always resolve through [`EncryptedRouter`](crate::routing::router::EncryptedRouter).

use serde::Serialize;

use crate::routing::codec::SegmentCodec;
use crate::routing::path::{encode_segment, EDIT_SEGMENT, NEW_SEGMENT};
use crate::routing::registry::RouteRegistry;
use crate::routing::vocabulary::Segment;

/// Path to the list view of a module.
pub fn list_link(codec: &SegmentCodec, master: Segment, module: Segment) -> String {
    format!("/{}/{}", codec.encode(master), codec.encode(module))
}

/// Path to the create form of a module.
pub fn new_link(codec: &SegmentCodec, master: Segment, module: Segment) -> String {
    format!("{}/{}", list_link(codec, master, module), NEW_SEGMENT)
}

/// Path to the edit form of one record. The id is percent-encoded as a single segment.
pub fn edit_link(
    codec: &SegmentCodec,
    master: Segment,
    module: Segment,
    record_id: &str,
) -> String {
    format!(
        "{}/{}/{}",
        list_link(codec, master, module),
        encode_segment(record_id),
        EDIT_SEGMENT
    )
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub module: Segment,
    pub href: String,
}

/// One sidebar group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub label: String,
    pub master: Segment,
    pub items: Vec<MenuItem>,
}

/// Sidebar menu for every registered screen, in registration order.
pub fn sidebar(codec: &SegmentCodec, registry: &RouteRegistry) -> Vec<MenuSection> {
    registry
        .sections()
        .iter()
        .map(|section| MenuSection {
            label: label(section.master),
            master: section.master,
            items: section
                .modules
                .iter()
                .map(|&module| MenuItem {
                    label: label(module),
                    module,
                    href: list_link(codec, section.master, module),
                })
                .collect(),
        })
        .collect()
}

/// Title-cased label: `vehicle-types` → `Vehicle Types`.
pub fn label(segment: Segment) -> String {
    segment
        .as_str()
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::path::Mode;
    use crate::routing::router::{EncryptedRouter, Resolution};

    #[test]
    fn test_links_hide_plaintext() {
        let codec = SegmentCodec::global();
        let link = list_link(codec, Segment::Masters, Segment::Continents);
        assert!(!link.contains("masters"));
        assert!(!link.contains("continents"));
        assert!(new_link(codec, Segment::Masters, Segment::Continents).ends_with("/new"));

        let edit = edit_link(codec, Segment::Masters, Segment::Continents, "42");
        assert!(edit.ends_with("/42/edit"));
    }

    #[test]
    fn test_edit_link_escapes_record_id() {
        let codec = SegmentCodec::global();
        let link = edit_link(codec, Segment::Masters, Segment::Continents, "2024/07");
        assert!(link.ends_with("/2024%2F07/edit"), "{link}");

        let link = edit_link(codec, Segment::Masters, Segment::Continents, "a b");
        assert!(link.ends_with("/a%20b/edit"), "{link}");
    }

    #[test]
    fn test_generated_links_resolve() {
        let router = EncryptedRouter::global();
        let codec = router.codec();
        let registry = router.registry();

        for section in registry.sections() {
            for &module in &section.modules {
                let entry = registry.get(section.master, module).unwrap();
                let mut cases = vec![
                    (list_link(codec, section.master, module), Mode::View, None),
                    (new_link(codec, section.master, module), Mode::New, None),
                ];
                for id in ["5", "2024/07", "a b"] {
                    let href = edit_link(codec, section.master, module, id);
                    cases.push((href, Mode::Edit, Some(id)));
                }

                for (href, mode, record_id) in cases {
                    match (router.resolve_path(&href), entry.select(mode)) {
                        (Resolution::Resolved(route), Some(expected)) => {
                            assert_eq!(route.master, section.master);
                            assert_eq!(route.module, module);
                            assert_eq!(route.mode, mode);
                            assert_eq!(route.record_id.as_deref(), record_id);
                            assert_eq!(route.component, expected);
                        }
                        (Resolution::RedirectHome(_), None) => {}
                        (got, expected) => panic!("{href}: got {got:?}, expected {expected:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn test_sidebar_covers_registry() {
        let codec = SegmentCodec::global();
        let registry = RouteRegistry::global();
        let menu = sidebar(codec, registry);

        let items: usize = menu.iter().map(|s| s.items.len()).sum();
        assert_eq!(items, registry.len());
        assert_eq!(menu[0].label, "Masters");
        assert_eq!(menu[0].items[0].href, list_link(codec, Segment::Masters, Segment::Continents));
    }

    #[test]
    fn test_label() {
        assert_eq!(label(Segment::TransportMaster), "Transport Master");
        assert_eq!(label(Segment::Wards), "Wards");
    }
}
