//! Field paths locating a value inside a validated object graph.

use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A declared property.
    Field(String),
    /// Position of an element inside a collection property.
    Element(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Element(index) => write!(f, "<element:{index}>"),
        }
    }
}

/// Immutable, dot-joined path from the validated root to a field.
///
/// Extending a path returns a new value; the receiver is left untouched so
/// sibling fields can share the same parent.
///
/// # Example
///
/// ```rust
/// use fieldcheck::core::FieldPath;
///
/// let path = FieldPath::root().field("items").element(2);
/// assert_eq!(path.to_string(), "items.<element:2>");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path of the validated instance itself.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    pub fn element(&self, index: usize) -> Self {
        self.push(PathSegment::Element(index))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments, used as the nesting depth during traversal.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
