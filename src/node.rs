//! The generic scene tree element.
//!
//! Every POV-Ray construct — camera, light, primitive, texture, modifier — is
//! a [`Node`]: a tag, a rendering [`Shape`], and an ordered argument list.
//! The ~100 constructs of the scene description language differ only in their
//! tag string, so they share this one type instead of a nominal hierarchy;
//! the [`elements`](crate::elements) module provides a named constructor per
//! construct.
//!
//! Nodes are immutable by convention: [`Node::add_args`] returns a modified
//! deep copy and leaves the receiver untouched, so any other holder of the
//! original tree is unaffected.
//!
//! ```rust
//! use povgen::{args, to_string, Node};
//!
//! let sphere = Node::new("Sphere", args![[0, 1, 2], 2]).unwrap();
//! assert_eq!(sphere.tag(), "sphere");
//! assert_eq!(to_string(&sphere).unwrap(), "sphere {\n<0,1,2>\n2\n}");
//! ```

use crate::{Error, Result, Value};

/// How a node renders textually.
///
/// - `Block` is the default `tag { args }` form used by nearly everything.
/// - `Map` is the `tag { [ ... ] [ ... ] }` form of color maps and friends,
///   where each argument is an entry sequence rendered in brackets.
/// - `Call` is a literal macro invocation, `Name( a , b )`, with the callee
///   taken verbatim from the first argument and no tag involved at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Block,
    Map,
    Call,
}

/// A labeled tree element with an ordered, heterogeneous argument list.
///
/// Arguments are stored verbatim, in order, with no validation of count,
/// type, or semantic legality — the scene description language is positional
/// and only POV-Ray itself knows which combinations are meaningful.
///
/// # Examples
///
/// ```rust
/// use povgen::{args, Node};
///
/// let light = Node::new("LightSource", args![[2, 4, -3], "color", [1, 1, 1]]).unwrap();
/// assert_eq!(light.tag(), "light_source");
/// assert_eq!(light.args().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    tag: String,
    shape: Shape,
    args: Vec<Value>,
}

/// Derives the textual tag from a construct name.
///
/// An underscore is inserted before every capitalized character that is not
/// at position 0, then the whole name is lower-cased: `"Sphere"` becomes
/// `"sphere"`, `"LightSource"` becomes `"light_source"`.
///
/// # Examples
///
/// ```rust
/// use povgen::node::derive_tag;
///
/// assert_eq!(derive_tag("Sphere"), "sphere");
/// assert_eq!(derive_tag("LightSource"), "light_source");
/// assert_eq!(derive_tag("SkySphere"), "sky_sphere");
/// ```
#[must_use]
pub fn derive_tag(name: &str) -> String {
    let mut tag = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            tag.push('_');
        }
        tag.push(ch.to_ascii_lowercase());
    }
    tag
}

fn validated_tag(name: &str) -> Result<String> {
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(derive_tag(name))
}

impl Node {
    /// Creates a block-form node, deriving the tag from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` is empty or does not start
    /// with an ASCII letter.
    pub fn new(name: &str, args: Vec<Value>) -> Result<Self> {
        Ok(Node {
            tag: validated_tag(name)?,
            shape: Shape::Block,
            args,
        })
    }

    /// Creates a map-form node, deriving the tag from `name`.
    ///
    /// Every argument must be a [`Value::Vector`] holding one entry's values;
    /// this is checked at serialization time, not here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` is empty or does not start
    /// with an ASCII letter.
    pub fn map(name: &str, entries: Vec<Value>) -> Result<Self> {
        Ok(Node {
            tag: validated_tag(name)?,
            shape: Shape::Map,
            args: entries,
        })
    }

    /// Creates a call-form node invoking the macro `callee`.
    ///
    /// The callee name is used literally in the output; tag derivation does
    /// not apply.
    #[must_use]
    pub fn call(callee: &str, args: Vec<Value>) -> Self {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(Value::from(callee));
        all.extend(args);
        Node {
            tag: String::new(),
            shape: Shape::Call,
            args: all,
        }
    }

    /// Internal constructor for the element catalog, where the tag is already
    /// in derived form.
    pub(crate) fn from_tag(tag: &str, shape: Shape, args: Vec<Value>) -> Self {
        Node {
            tag: tag.to_string(),
            shape,
            args,
        }
    }

    /// The textual keyword this node renders as.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The rendering shape of this node.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The argument list, in the order supplied.
    #[inline]
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Returns a deep copy of this node with `extra` appended to its
    /// argument list. The receiver is unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use povgen::{args, Node};
    ///
    /// let camera = Node::new("Camera", args!["location", [0, 2, -3]]).unwrap();
    /// let widened = camera.add_args(args!["right", [1.5, 0.0, 0.0]]);
    ///
    /// assert_eq!(camera.args().len(), 2);
    /// assert_eq!(widened.args().len(), 4);
    /// ```
    #[must_use]
    pub fn add_args(&self, extra: Vec<Value>) -> Self {
        let mut copy = self.clone();
        copy.args.extend(extra);
        copy
    }
}
