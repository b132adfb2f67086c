use crate::model::{Dict, Value, UNDEFINED};
use crate::predicates::is_set;

/// Scalar view used for the primitive comparison; dates compare by epoch
/// milliseconds.
#[derive(PartialEq)]
enum Primitive<'a> {
    Bool(bool),
    Number(f64),
    Str(&'a str),
}

fn primitive(value: &Value) -> Option<Primitive<'_>> {
    match value {
        Value::Bool(b) => Some(Primitive::Bool(*b)),
        Value::Number(n) => Some(Primitive::Number(*n)),
        Value::String(s) => Some(Primitive::Str(s)),
        Value::Date(d) => Some(Primitive::Number(d.timestamp_millis() as f64)),
        _ => None,
    }
}

/// A container seen as keys to values; sequence indices are keys too.
#[derive(Clone, Copy)]
enum Keyed<'a> {
    Seq(&'a [Value]),
    Map(&'a Dict),
}

impl<'a> Keyed<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Keyed::Seq(items)),
            Value::Object(map) => Some(Keyed::Map(map)),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        match self {
            Keyed::Seq(items) => items.len(),
            Keyed::Map(map) => map.len(),
        }
    }

    fn by_key(&self, key: &str) -> Option<&'a Value> {
        match self {
            Keyed::Seq(items) => key
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == key)
                .and_then(|i| items.get(i)),
            Keyed::Map(map) => map.get(key),
        }
    }

    fn by_index(&self, index: usize) -> Option<&'a Value> {
        match self {
            Keyed::Seq(items) => items.get(index),
            Keyed::Map(map) => map.get(&index.to_string()),
        }
    }

    /// Queue every entry of `self` against the same key of `other`, a
    /// missing key reading as absent.
    fn push_entries(&self, other: &Keyed<'a>, pending: &mut Vec<(&'a Value, &'a Value)>) {
        match self {
            Keyed::Seq(items) => pending.extend(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| (item, other.by_index(i).unwrap_or(&UNDEFINED))),
            ),
            Keyed::Map(map) => pending.extend(
                map.iter()
                    .map(|(key, item)| (item, other.by_key(key).unwrap_or(&UNDEFINED))),
            ),
        }
    }
}

/// Outcome of comparing two values without looking inside containers
enum Shallow<'a> {
    Equal,
    Unequal,
    Entries(Keyed<'a>, Keyed<'a>),
}

/// Semantic equality of two value graphs
///
/// Absent, `null`, empty sequences and empty mappings all compare equal to
/// each other. Mapping key order is irrelevant. Regular expressions compare
/// by pattern and flags, errors by message.
pub fn deep_equals(a: &Value, b: &Value) -> bool {
    let mut pending = vec![(a, b)];
    while let Some((a, b)) = pending.pop() {
        match shallow(a, b) {
            Shallow::Equal => {}
            Shallow::Unequal => return false,
            Shallow::Entries(ka, kb) => ka.push_entries(&kb, &mut pending),
        }
    }
    true
}

fn shallow<'a>(a: &'a Value, b: &'a Value) -> Shallow<'a> {
    let (a_set, b_set) = (is_set(a), is_set(b));
    if !a_set && !b_set {
        return Shallow::Equal;
    }
    if a_set != b_set {
        return Shallow::Unequal;
    }

    if let (Some(pa), Some(pb)) = (primitive(a), primitive(b)) {
        if pa == pb {
            return Shallow::Equal;
        }
    }

    let verdict = |equal: bool| if equal { Shallow::Equal } else { Shallow::Unequal };
    match (a, b) {
        (Value::Array(x), Value::Array(y)) if x.len() != y.len() => return Shallow::Unequal,
        (Value::Date(_), _) => return Shallow::Unequal,
        (Value::RegExp(x), Value::RegExp(y)) => return verdict(x == y),
        (Value::Error(x), Value::Error(y)) => return verdict(x == y),
        _ => {}
    }

    match (Keyed::of(a), Keyed::of(b)) {
        (Some(ka), Some(kb)) if ka.len() == kb.len() => Shallow::Entries(ka, kb),
        _ => Shallow::Unequal,
    }
}
