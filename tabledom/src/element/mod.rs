mod content;
mod node;

use std::collections::HashMap;

pub use content::Content;
pub use node::Element;

/// Data key of the marker attribute naming sub-regions (`data-element`).
pub const MARKER: &str = "element";

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements_mut()
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// Whether `id` is `root` itself or one of its descendants.
pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// Walk from `target_id` up towards `root` and return the nearest
/// ancestor-or-self matching `predicate`.
///
/// Returns None when the target is not inside `root` or nothing matches.
pub fn closest<'a>(
    root: &'a Element,
    target_id: &str,
    predicate: impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    let mut chain = Vec::new();
    if !ancestor_chain(root, target_id, &mut chain) {
        return None;
    }
    chain.into_iter().rev().find(|el| predicate(*el))
}

/// Fills `chain` with root..=target. Returns false when target is absent.
fn ancestor_chain<'a>(element: &'a Element, target_id: &str, chain: &mut Vec<&'a Element>) -> bool {
    chain.push(element);
    if element.id == target_id {
        return true;
    }
    for child in element.child_elements() {
        if ancestor_chain(child, target_id, chain) {
            return true;
        }
    }
    chain.pop();
    false
}

/// First element in document order whose `data-{key}` equals `value`.
pub fn find_by_data<'a>(root: &'a Element, key: &str, value: &str) -> Option<&'a Element> {
    if root.get_data(key) == Some(value) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_by_data(child, key, value))
}

/// All elements carrying a `data-{key}` attribute, in document order.
pub fn find_all_by_data<'a>(root: &'a Element, key: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    root.walk(&mut |el: &'a Element| {
        if el.get_data(key).is_some() {
            found.push(el);
        }
    });
    found
}

/// Build the marker name -> element id lookup for every descendant tagged
/// with [`MARKER`]. Later duplicates overwrite earlier ones.
pub fn sub_elements(root: &Element) -> HashMap<String, String> {
    let mut lookup = HashMap::new();
    for el in find_all_by_data(root, MARKER) {
        if let Some(name) = el.marker_name() {
            lookup.insert(name.to_string(), el.id.clone());
        }
    }
    log::trace!("[tabledom] collected {} sub-elements", lookup.len());
    lookup
}
