//! Named constructors for the POV-Ray construct catalog.
//!
//! Every construct is the same generic [`Node`] under the hood; the catalog
//! differs only in tag strings, so each constructor is one macro-generated
//! function with its tag precomputed (the derivation rule applied once, when
//! the catalog is written, instead of reflection at runtime).
//!
//! ```rust
//! use povgen::{args, elements::*};
//!
//! let light = light_source(args![[2, 4, -3], "color", [1, 1, 1]]);
//! assert_eq!(light.tag(), "light_source");
//! ```

use crate::{Node, Shape, Value};

macro_rules! elements {
    ($($(#[$doc:meta])* $name:ident => $tag:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(args: Vec<Value>) -> Node {
                Node::from_tag($tag, Shape::Block, args)
            }
        )*
    };
}

elements! {
    /// `background(args!["color", [r, g, b]])`
    background => "background",
    /// `box_(args![[x1, y1, z1], [x2, y2, z2], ...])` — named `box_` because
    /// `box` is a Rust keyword.
    box_ => "box",
    /// `camera(args!["location", [x, y, z], "look_at", [x, y, z]])`
    camera => "camera",
    cone => "cone",
    cylinder => "cylinder",
    /// CSG difference of the first object and the rest.
    difference => "difference",
    /// `finish(args!["phong", 1, "brilliance", 0.9, "ambient", 0.5])`
    finish => "finish",
    /// `fog(args!["fog_type", 2, "distance", 20, "color", [1.0, 0.98, 0.9]])`
    fog => "fog",
    /// `image_map(args!["png", "\"texture.png\""])`
    image_map => "image_map",
    interior => "interior",
    /// CSG intersection of its object arguments.
    intersection => "intersection",
    /// `light_source(args![[x, y, z], "color", [r, g, b]])`
    light_source => "light_source",
    media => "media",
    /// CSG merge of its object arguments.
    merge => "merge",
    normal => "normal",
    /// Wraps an existing object to attach modifiers:
    /// `object(args![wheel, "translate", [0, 1, 0]])`.
    object => "object",
    /// `pigment(args!["color", [r, g, b]])`
    pigment => "pigment",
    /// `plane(args![[nx, ny, nz], distance, ...])`
    plane => "plane",
    polygon => "polygon",
    /// Radiosity block for the scene's global settings.
    radiosity => "radiosity",
    sky_sphere => "sky_sphere",
    /// `sphere(args![[x, y, z], radius, ...])`
    sphere => "sphere",
    /// `text(args!["ttf", "\"font.ttf\"", "\"Hello\"", 1, 0])`
    text => "text",
    /// `texture(args![pigment(...), "phong", 0.1])`
    texture => "texture",
    triangle => "triangle",
    /// CSG union of its object arguments.
    union => "union",
}

/// A color map: `color_map(args![[0, "color", "White"], [1, "color", "Blue"]])`.
///
/// Each argument is one entry sequence, rendered bracketed and space-joined
/// on a single line.
#[must_use]
pub fn color_map(entries: Vec<Value>) -> Node {
    Node::from_tag("color_map", Shape::Map, entries)
}

/// Invokes a scene-file macro by name:
/// `macro_call("Tetrahedron_by_Corners", args![p, q, r, s])` renders as
/// `Tetrahedron_by_Corners( ... )` with the name used verbatim.
#[must_use]
pub fn macro_call(callee: &str, args: Vec<Value>) -> Node {
    Node::call(callee, args)
}
