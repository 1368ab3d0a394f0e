//! Scene description serialization.
//!
//! This module turns a [`Node`] tree into POV-Ray scene description text.
//! Serialization is a pure depth-first walk: it either produces a complete,
//! structurally well-formed document or fails atomically with an error naming
//! the offending value. Semantic validity of the arguments is POV-Ray's
//! business, not ours.
//!
//! ## Formatting policy
//!
//! Every argument passes through the same policy before being embedded:
//!
//! - a strictly negative number becomes `( -3 )` — POV-Ray reads a bare
//!   leading minus as a subtraction operator in some positions, so negative
//!   literals are parenthesized;
//! - a vector becomes `<e1,e2,...,en>`, elements comma-joined in their bare
//!   form (negative elements inside a vector stay unparenthesized; the
//!   angle brackets already disambiguate them);
//! - a nested node is rendered by its own serialization;
//! - strings and bare tokens pass through unmodified.
//!
//! ## Usage
//!
//! ```rust
//! use povgen::{args, to_string, Node};
//!
//! let light = Node::new("LightSource", args![[2, 4, -3], "color", [1, 1, 1]]).unwrap();
//! assert_eq!(
//!     to_string(&light).unwrap(),
//!     "light_source {\n<2,4,-3>\ncolor\n<1,1,1>\n}"
//! );
//! ```

use crate::{Error, Node, Result, Shape, Value};

/// The scene description serializer.
///
/// Accumulates output in a string buffer; most callers should use the
/// top-level [`to_string`](crate::to_string) instead.
pub struct Serializer {
    out: String,
}

impl Serializer {
    #[must_use]
    pub fn new() -> Self {
        Serializer {
            out: String::with_capacity(256),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    /// Writes one node in its shape's textual form.
    pub fn write_node(&mut self, node: &Node) -> Result<()> {
        match node.shape() {
            Shape::Block => self.write_block(node),
            Shape::Map => self.write_map(node),
            Shape::Call => self.write_call(node),
        }
    }

    /// Block form: `tag {\narg\narg\n}`.
    fn write_block(&mut self, node: &Node) -> Result<()> {
        self.out.push_str(node.tag());
        self.out.push_str(" {\n");
        for (i, arg) in node.args().iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            self.write_value(arg)?;
        }
        self.out.push_str("\n}");
        Ok(())
    }

    /// Map form: `tag { [ v v ] [ v v ] }`, entries space-joined on one line.
    fn write_map(&mut self, node: &Node) -> Result<()> {
        self.out.push_str(node.tag());
        self.out.push_str(" {");
        for entry in node.args() {
            let Value::Vector(values) = entry else {
                return Err(Error::BadMapEntry(format!("{:?}", entry)));
            };
            self.out.push_str(" [");
            for value in values {
                self.out.push(' ');
                self.write_value(value)?;
            }
            self.out.push_str(" ]");
        }
        self.out.push_str(" }");
        Ok(())
    }

    /// Call form: `Callee( a , b )`, the callee taken literally from the
    /// first argument.
    fn write_call(&mut self, node: &Node) -> Result<()> {
        let Some(Value::Str(callee)) = node.args().first() else {
            return Err(Error::MissingCallee);
        };
        self.out.push_str(callee);
        self.out.push_str("( ");
        for (i, arg) in node.args()[1..].iter().enumerate() {
            if i > 0 {
                self.out.push_str(" , ");
            }
            self.write_value(arg)?;
        }
        self.out.push_str(" )");
        Ok(())
    }

    /// Applies the argument formatting policy to one value.
    pub(crate) fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Number(n) => {
                if n.is_non_finite() {
                    return Err(Error::NonFiniteNumber(n.as_f64()));
                }
                if n.is_negative() {
                    self.out.push_str("( ");
                    self.out.push_str(&n.to_string());
                    self.out.push_str(" )");
                } else {
                    self.out.push_str(&n.to_string());
                }
            }
            Value::Str(s) => self.out.push_str(s),
            Value::Vector(elems) => self.write_vector(elems)?,
            Value::Node(node) => self.write_node(node)?,
        }
        Ok(())
    }

    /// Vector encoding: `<e1,e2,...,en>`. Elements render in their bare form;
    /// negative numbers are not re-parenthesized inside the brackets.
    fn write_vector(&mut self, elems: &[Value]) -> Result<()> {
        self.out.push('<');
        for (i, elem) in elems.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            match elem {
                Value::Number(n) => {
                    if n.is_non_finite() {
                        return Err(Error::NonFiniteNumber(n.as_f64()));
                    }
                    self.out.push_str(&n.to_string());
                }
                Value::Str(s) => self.out.push_str(s),
                Value::Vector(nested) => self.write_vector(nested)?,
                Value::Node(node) => self.write_node(node)?,
            }
        }
        self.out.push('>');
        Ok(())
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes one node tree to scene description text.
///
/// # Errors
///
/// Returns an error if the tree contains a non-finite number, a map entry
/// that is not a sequence, or a macro call without a callee name.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(node: &Node) -> Result<String> {
    let mut serializer = Serializer::new();
    serializer.write_node(node)?;
    Ok(serializer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn format_one(value: Value) -> String {
        let mut ser = Serializer::new();
        ser.write_value(&value).unwrap();
        ser.into_inner()
    }

    #[test]
    fn test_negative_numbers_parenthesized() {
        assert_eq!(format_one(Value::from(-3)), "( -3 )");
        assert_eq!(format_one(Value::from(-0.5)), "( -0.5 )");
    }

    #[test]
    fn test_non_negative_numbers_pass_through() {
        assert_eq!(format_one(Value::from(0)), "0");
        assert_eq!(format_one(Value::from(3)), "3");
        assert_eq!(format_one(Value::from(2.5)), "2.5");
    }

    #[test]
    fn test_vector_encoding() {
        assert_eq!(format_one(args![[1, 0, 1]].remove(0)), "<1,0,1>");
        assert_eq!(format_one(args![[0.5, 0.5]].remove(0)), "<0.5,0.5>");
    }

    #[test]
    fn test_negative_inside_vector_stays_bare() {
        // The parenthesization rule applies only at the top level of the
        // argument list, matching the renderer's grammar expectations.
        assert_eq!(format_one(args![[2, 4, -3]].remove(0)), "<2,4,-3>");
    }

    #[test]
    fn test_nested_vectors() {
        let v = args![[[1, 0], [0, 1]]].remove(0);
        assert_eq!(format_one(v), "<<1,0>,<0,1>>");
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut ser = Serializer::new();
        let err = ser.write_value(&Value::from(f64::NAN)).unwrap_err();
        assert!(matches!(err, Error::NonFiniteNumber(_)));

        let mut ser = Serializer::new();
        let err = ser
            .write_value(&args![[1.0, f64::INFINITY]].remove(0))
            .unwrap_err();
        assert!(matches!(err, Error::NonFiniteNumber(_)));
    }

    #[test]
    fn test_block_form() {
        let sphere = Node::new("Sphere", args![[0, 1, 2], 2]).unwrap();
        assert_eq!(to_string(&sphere).unwrap(), "sphere {\n<0,1,2>\n2\n}");
    }

    #[test]
    fn test_block_form_with_nested_node() {
        let pigment = Node::new("Pigment", args!["color", [1, 0, 1]]).unwrap();
        let texture = Node::new("Texture", args![pigment]).unwrap();
        assert_eq!(
            to_string(&texture).unwrap(),
            "texture {\npigment {\ncolor\n<1,0,1>\n}\n}"
        );
    }

    #[test]
    fn test_empty_block() {
        let node = Node::new("GlobalSettings", vec![]).unwrap();
        assert_eq!(to_string(&node).unwrap(), "global_settings {\n\n}");
    }

    #[test]
    fn test_map_form() {
        let map = Node::map("ColorMap", args![[0, "color", "White"], [1, "color", "Blue"]])
            .unwrap();
        assert_eq!(
            to_string(&map).unwrap(),
            "color_map { [ 0 color White ] [ 1 color Blue ] }"
        );
    }

    #[test]
    fn test_map_entry_must_be_sequence() {
        let map = Node::map("ColorMap", args![0.5]).unwrap();
        assert!(matches!(to_string(&map), Err(Error::BadMapEntry(_))));
    }

    #[test]
    fn test_call_form() {
        let call = Node::call("MyMacro", args![1, 2]);
        assert_eq!(to_string(&call).unwrap(), "MyMacro( 1 , 2 )");
    }

    #[test]
    fn test_call_form_bypasses_tag_derivation() {
        // Callee keeps its capitalization, unlike a tag-derived name.
        let call = Node::call("Tetrahedron_by_Corners", args![[0, 0, 0], [1, 1, 1]]);
        assert_eq!(
            to_string(&call).unwrap(),
            "Tetrahedron_by_Corners( <0,0,0> , <1,1,1> )"
        );
    }

    #[test]
    fn test_call_without_callee() {
        let bad = Node::from_tag("", Shape::Call, vec![]);
        assert!(matches!(to_string(&bad), Err(Error::MissingCallee)));
    }

    #[test]
    fn test_serialization_is_pure() {
        let sphere = Node::new("Sphere", args![[0, 1, 2], 2]).unwrap();
        let first = to_string(&sphere).unwrap();
        let second = to_string(&sphere).unwrap();
        assert_eq!(first, second);
    }
}
