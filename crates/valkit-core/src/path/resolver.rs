use crate::coerce::number_to_string;
use crate::model::Value;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `[key]` index notation, rewritten to `.key` before splitting.
///
/// Keys are ASCII word characters only; anything else stays in the segment.
static BRACKET_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Za-z0-9_]+)\]").expect("bracket index pattern is valid")
});

/// One argument to path resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFragment {
    /// Dotted string, may contain `[key]` index notation
    Dotted(String),
    /// Pre-split segments, appended verbatim
    Segments(Vec<String>),
    /// Contributes nothing
    Ignored,
}

impl PathFragment {
    /// Normalize the fragment into the segments it contributes.
    pub fn segments(&self) -> Vec<String> {
        match self {
            PathFragment::Dotted(s) => split_dotted(s),
            PathFragment::Segments(segments) => segments.clone(),
            PathFragment::Ignored => Vec::new(),
        }
    }
}

/// `"a[0].b"` → `["a", "0", "b"]`, `".a"` → `["a"]`
fn split_dotted(s: &str) -> Vec<String> {
    let rewritten = BRACKET_INDEX.replace_all(s, ".$1");
    let stripped = rewritten.strip_prefix('.').unwrap_or(&rewritten[..]);
    stripped.split('.').map(str::to_string).collect()
}

impl From<&str> for PathFragment {
    fn from(s: &str) -> Self {
        PathFragment::Dotted(s.to_string())
    }
}

impl From<String> for PathFragment {
    fn from(s: String) -> Self {
        PathFragment::Dotted(s)
    }
}

impl From<&String> for PathFragment {
    fn from(s: &String) -> Self {
        PathFragment::Dotted(s.clone())
    }
}

impl From<Vec<String>> for PathFragment {
    fn from(segments: Vec<String>) -> Self {
        PathFragment::Segments(segments)
    }
}

impl From<&[&str]> for PathFragment {
    fn from(segments: &[&str]) -> Self {
        PathFragment::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathFragment {
    fn from(segments: [&str; N]) -> Self {
        PathFragment::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&Path> for PathFragment {
    fn from(path: &Path) -> Self {
        PathFragment::Segments(path.segments.clone())
    }
}

/// Strings are dotted fragments, sequences contribute their string and
/// number elements as segments, anything else is ignored.
impl From<&Value> for PathFragment {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => PathFragment::Dotted(s.clone()),
            Value::Array(items) => PathFragment::Segments(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(number_to_string(*n)),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => PathFragment::Ignored,
        }
    }
}

/// Ordered list of string keys identifying a nested location
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from fragments
    pub fn resolve<I, F>(fragments: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<PathFragment>,
    {
        let mut path = Self::new();
        path.extend(fragments);
        path
    }

    /// Append the segments of one fragment
    pub fn push_fragment(&mut self, fragment: impl Into<PathFragment>) {
        self.segments.extend(fragment.into().segments());
    }

    /// Append a single segment verbatim
    pub fn push_segment(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Append the segments of several fragments, in order
    pub fn extend<I, F>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = F>,
        F: Into<PathFragment>,
    {
        for fragment in fragments {
            self.push_fragment(fragment);
        }
    }

    /// Clear back to the empty path
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments joined with `.`
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl<F: Into<PathFragment>> FromIterator<F> for Path {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Path::resolve(iter)
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::resolve([s])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &Path) -> Vec<&str> {
        path.segments().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_bracket_notation_becomes_segments() {
        assert_eq!(segs(&Path::from("a[0].b")), vec!["a", "0", "b"]);
        assert_eq!(segs(&Path::from("list[12][x]")), vec!["list", "12", "x"]);
    }

    #[test]
    fn test_bracket_keys_are_ascii_word_characters() {
        assert_eq!(segs(&Path::from("a[x_1]")), vec!["a", "x_1"]);
        assert_eq!(segs(&Path::from("a[é]")), vec!["a[é]"]);
        assert_eq!(segs(&Path::from("b[٣].c")), vec!["b[٣]", "c"]);
    }

    #[test]
    fn test_single_leading_dot_is_stripped() {
        assert_eq!(segs(&Path::from(".a.b")), vec!["a", "b"]);
        assert_eq!(segs(&Path::from("[0].a")), vec!["0", "a"]);
        assert_eq!(segs(&Path::from("..a")), vec!["", "a"]);
    }

    #[test]
    fn test_segments_are_not_split() {
        let path = Path::resolve([PathFragment::from(["a.b", "c"])]);
        assert_eq!(segs(&path), vec!["a.b", "c"]);
    }

    #[test]
    fn test_fragments_accumulate_in_order() {
        let mut path = Path::from("a");
        path.push_fragment(vec!["b".to_string()]);
        path.push_fragment("c.d");
        assert_eq!(segs(&path), vec!["a", "b", "c", "d"]);
        path.reset();
        assert!(path.is_empty());
    }

    #[test]
    fn test_non_path_values_are_ignored() {
        let mut path = Path::new();
        path.push_fragment(&Value::from(4));
        path.push_fragment(&Value::Null);
        assert!(path.is_empty());

        path.push_fragment(&Value::Array(vec![
            Value::from("a"),
            Value::from(0),
            Value::Bool(true),
        ]));
        assert_eq!(segs(&path), vec!["a", "0"]);
    }

    #[test]
    fn test_empty_string_yields_one_empty_segment() {
        assert_eq!(segs(&Path::from("")), vec![""]);
    }

    #[test]
    fn test_dotted_display() {
        assert_eq!(Path::resolve(["a", "b[1]"]).to_string(), "a.b.1");
    }
}
