//! Dotted path resolution over a JSON-forms tree.
//!
//! A path such as `users.0.name` is split on `.`; empty segments are ignored.
//! Inside an array a segment must be all ASCII digits. Creation of missing
//! intermediate containers picks an array when the *next* segment is numeric
//! and an object otherwise, through [`segment_implies_array`], for both the
//! read-only and the creating walk.

use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// True when `segment` addresses an array element.
pub fn segment_implies_array(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn split_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|segment| !segment.is_empty()).collect()
}

/// Container holding the addressed property.
#[derive(Debug)]
pub enum JsonFormsContainer<'a> {
    Object(&'a mut Map<String, Value>),
    Array(&'a mut Vec<Value>),
}

/// Result of a creating walk: the parent container plus the last segment.
///
/// The addressed value itself may be absent; [`JsonFormsProperty::value`]
/// reports it.
#[derive(Debug)]
pub struct JsonFormsProperty<'a> {
    container: JsonFormsContainer<'a>,
    segment: String,
}

impl<'a> JsonFormsProperty<'a> {
    pub fn container(&self) -> &JsonFormsContainer<'a> {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut JsonFormsContainer<'a> {
        &mut self.container
    }

    /// Last path segment, the key or index inside [`Self::container`].
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Current value; `None` when absent or JSON `null`.
    pub fn value(&self) -> Option<&Value> {
        let value = match &self.container {
            JsonFormsContainer::Object(map) => map.get(&self.segment),
            JsonFormsContainer::Array(list) => self
                .segment
                .parse::<usize>()
                .ok()
                .and_then(|index| list.get(index)),
        };
        value.filter(|value| !value.is_null())
    }

    pub(crate) fn into_parts(self) -> (JsonFormsContainer<'a>, String) {
        (self.container, self.segment)
    }
}

/// What sits at one segment of the walk.
enum Slot {
    /// Key missing, index at the append position, or JSON `null`.
    Vacant,
    Container,
    Scalar,
    /// Index past the append position.
    OutOfRange,
}

fn classify(value: Option<&Value>) -> Slot {
    match value {
        None | Some(Value::Null) => Slot::Vacant,
        Some(Value::Object(_)) | Some(Value::Array(_)) => Slot::Container,
        Some(_) => Slot::Scalar,
    }
}

fn list_index(segment: &str) -> Result<usize> {
    if !segment_implies_array(segment) {
        return Err(Error::path_inconsistency(segment, "wrong list index"));
    }
    // Digits that overflow can never be a valid position.
    Ok(segment.parse::<usize>().unwrap_or(usize::MAX))
}

fn list_slot(list: &[Value], index: usize) -> Slot {
    if index > list.len() {
        Slot::OutOfRange
    } else {
        classify(list.get(index))
    }
}

fn as_container(value: &mut Value) -> Option<JsonFormsContainer<'_>> {
    match value {
        Value::Object(map) => Some(JsonFormsContainer::Object(map)),
        Value::Array(list) => Some(JsonFormsContainer::Array(list)),
        _ => None,
    }
}

fn empty_container_for(next_segment: &str) -> Value {
    if segment_implies_array(next_segment) {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Read-only lookup. Never creates anything.
pub(crate) fn resolve<'a>(data: &'a Map<String, Value>, path: &str) -> Result<Option<&'a Value>> {
    let mut current: Option<&Value> = None;
    let mut object = Some(data);
    let mut array: Option<&Vec<Value>> = None;

    for segment in split_path(path) {
        let value = match (object, array) {
            (Some(map), _) => map.get(segment),
            (None, Some(list)) => list.get(list_index(segment)?),
            (None, None) => return Ok(None),
        };
        object = None;
        array = None;
        match value {
            Some(Value::Object(map)) => object = Some(map),
            Some(Value::Array(list)) => array = Some(list),
            _ => {}
        }
        current = value;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(path, found = current.is_some(), "resolved json forms property");

    Ok(current.filter(|value| !value.is_null()))
}

/// Walks `path` starting at `root`, optionally materializing missing parents.
///
/// Returns `Ok(None)` when the path cannot be resolved under the given
/// creation rule, and an error when a segment contradicts the tree shape.
pub(crate) fn walk<'a>(
    root: &'a mut Map<String, Value>,
    path: &str,
    create_missing_parents: bool,
) -> Result<Option<JsonFormsProperty<'a>>> {
    let segments = split_path(path);
    if segments.is_empty() {
        return Ok(None);
    }
    let property = walk_segments(
        JsonFormsContainer::Object(root),
        &segments,
        create_missing_parents,
    )?;

    #[cfg(feature = "tracing")]
    tracing::trace!(
        path,
        create_missing_parents,
        found = property.is_some(),
        "walked json forms property"
    );

    Ok(property)
}

fn walk_segments<'a>(
    container: JsonFormsContainer<'a>,
    segments: &[&str],
    create: bool,
) -> Result<Option<JsonFormsProperty<'a>>> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(None);
    };

    let slot = match &container {
        JsonFormsContainer::Object(map) => classify(map.get(*segment)),
        JsonFormsContainer::Array(list) => list_slot(list, list_index(segment)?),
    };

    match slot {
        Slot::OutOfRange => return Ok(None),
        Slot::Vacant if !create => return Ok(None),
        Slot::Scalar if !rest.is_empty() => return Ok(None),
        _ => {}
    }

    let Some(next) = rest.first() else {
        return Ok(Some(JsonFormsProperty {
            container,
            segment: segment.to_string(),
        }));
    };

    let child = match container {
        JsonFormsContainer::Object(map) => {
            let slot = map.entry(segment.to_string()).or_insert(Value::Null);
            if slot.is_null() {
                #[cfg(feature = "tracing")]
                tracing::debug!(segment, "creating json forms container");
                *slot = empty_container_for(next);
            }
            slot
        }
        JsonFormsContainer::Array(list) => {
            let index = list_index(segment)?;
            if index == list.len() {
                #[cfg(feature = "tracing")]
                tracing::debug!(segment, "appending json forms container");
                list.push(empty_container_for(next));
            } else if list.get(index).map_or(false, Value::is_null) {
                return Err(Error::path_inconsistency(segment, "wrong list index"));
            }
            match list.get_mut(index) {
                Some(value) => value,
                None => return Ok(None),
            }
        }
    };

    match as_container(child) {
        Some(child) => walk_segments(child, rest, create),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn numeric_segments_imply_arrays() {
        assert!(segment_implies_array("0"));
        assert!(segment_implies_array("42"));
        assert!(!segment_implies_array(""));
        assert!(!segment_implies_array("-1"));
        assert!(!segment_implies_array("a1"));
    }

    #[test]
    fn resolve_follows_objects_and_arrays() {
        let tree = data(json!({"users": [{"name": "Homer"}, null], "n": 1}));
        assert_eq!(
            resolve(&tree, "users.0.name").unwrap(),
            Some(&json!("Homer"))
        );
        assert_eq!(resolve(&tree, "users.1").unwrap(), None);
        assert_eq!(resolve(&tree, "users.5.name").unwrap(), None);
        assert_eq!(resolve(&tree, "n.x").unwrap(), None);
        assert_eq!(resolve(&tree, "").unwrap(), None);
        assert!(resolve(&tree, "users.name").is_err());
    }

    #[test]
    fn walk_without_creation_never_mutates() {
        let mut tree = data(json!({"a": []}));
        assert!(walk(&mut tree, "a.0.b", false).unwrap().is_none());
        assert!(walk(&mut tree, "x.y", false).unwrap().is_none());
        assert_eq!(Value::Object(tree), json!({"a": []}));
    }

    #[test]
    fn walk_creates_parents_by_peeking_next_segment() {
        let mut tree = Map::new();
        {
            let property = walk(&mut tree, "a.0.b.1", true).unwrap();
            assert!(property.is_none());
        }
        // "1" is past the append position of the freshly created list.
        assert_eq!(Value::Object(tree.clone()), json!({"a": [{"b": []}]}));

        let property = walk(&mut tree, "a.0.b.0", true).unwrap().unwrap();
        assert_eq!(property.segment(), "0");
        assert!(property.value().is_none());
        assert!(matches!(property.container(), JsonFormsContainer::Array(_)));
    }

    #[test]
    fn walk_rejects_null_slots_inside_lists() {
        let mut tree = data(json!({"a": [null]}));
        let err = walk(&mut tree, "a.0.b", true).unwrap_err();
        assert!(matches!(err, Error::PathInconsistency { .. }));
    }
}
