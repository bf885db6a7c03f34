//! The class-merge resolver.
//!
//! All class-bearing values attached to one element collapse into a single
//! rendered `class` attribute. Inputs fold left to right into one
//! insertion-ordered enabled-state map: class-string tokens enable their
//! entry, class-map entries overlay their boolean, and a plain attribute
//! literally keyed `class` contributes its value as a class string. The
//! first insertion of a token fixes its position in the output.

use indexmap::IndexMap;

use crate::node::Node;
use crate::{Error, Result};

/// Merge an ordered sequence of class-bearing nodes into the final
/// whitespace-joined token string.
///
/// Fails with [`Error::UnsupportedClassMerge`] when offered a node that is
/// neither a class string, a class map, nor an attribute keyed `class`.
pub fn merge_classes<'a>(items: impl IntoIterator<Item = &'a Node>) -> Result<String> {
    let mut state: IndexMap<&'a str, bool> = IndexMap::new();
    for node in items {
        match node {
            Node::Classes(list) => overlay_tokens(&mut state, list),
            Node::ClassMap(map) => {
                for (token, enabled) in map {
                    // insert keeps the first-insertion position on overwrite
                    state.insert(token.as_str(), *enabled);
                }
            }
            Node::Attr(attribute) if attribute.key() == "class" => {
                overlay_tokens(&mut state, attribute.value().unwrap_or(""));
            }
            other => return Err(Error::UnsupportedClassMerge(other.kind().to_string())),
        }
    }
    Ok(state
        .iter()
        .filter(|(_, enabled)| **enabled)
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join(" "))
}

fn overlay_tokens<'a>(state: &mut IndexMap<&'a str, bool>, list: &'a str) {
    for token in list.split_whitespace() {
        state.insert(token, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::attr;
    use crate::node::{class_map, classes, text};

    fn merged(items: &[Node]) -> String {
        merge_classes(items).unwrap()
    }

    #[test]
    fn test_deduplicates_string_tokens() {
        assert_eq!(merged(&[classes("foo foo")]), "foo");
        assert_eq!(merged(&[classes("foo  foo")]), "foo");
        assert_eq!(merged(&[classes("foo bar foo")]), "foo bar");
        assert_eq!(merged(&[classes("")]), "");
    }

    #[test]
    fn test_first_occurrence_fixes_order() {
        assert_eq!(merged(&[classes("b a"), classes("a c")]), "b a c");
    }

    #[test]
    fn test_map_keeps_only_enabled_tokens() {
        let map = class_map([("on", true), ("off", false), ("also", true)]);
        assert_eq!(merged(&[map]), "on also");
    }

    #[test]
    fn test_later_map_entries_overwrite() {
        let items = [class_map([("x", true)]), class_map([("x", false), ("y", true)])];
        assert_eq!(merged(&items), "y");
    }

    #[test]
    fn test_string_token_re_enables_after_map_disable() {
        let items = [classes("a b"), class_map([("a", false)]), classes("a")];
        assert_eq!(merged(&items), "a b");
    }

    #[test]
    fn test_plain_class_attribute_joins_the_merge() {
        let items = [attr("class", "foo"), classes("bar foo")];
        assert_eq!(merged(&items), "foo bar");
    }

    #[test]
    fn test_rejects_non_class_values() {
        assert!(matches!(
            merge_classes([&text("nope")]),
            Err(Error::UnsupportedClassMerge(_))
        ));
        assert!(matches!(
            merge_classes([&attr("id", "nope")]),
            Err(Error::UnsupportedClassMerge(_))
        ));
    }
}
