//! # povgen
//!
//! A declarative POV-Ray scene builder: describe a 3D scene as a tree of
//! typed constructs, serialize it to POV-Ray's scene description language,
//! and render it through the `povray` binary.
//!
//! ## Key Features
//!
//! - **One generic node type**: every construct — cameras, lights,
//!   primitives, textures, pigments, finishes, maps — is a [`Node`] with a
//!   tag, a shape, and an ordered argument list. The catalog in
//!   [`elements`] is just named constructors with precomputed tags.
//! - **Copy-on-write trees**: [`Node::add_args`], [`Scene::set_camera`], and
//!   [`Scene::add_objects`] return modified deep copies; the originals never
//!   change, so derived variants of a base scene can be built and serialized
//!   concurrently without locking.
//! - **Unambiguous output**: negative literals are parenthesized and vectors
//!   angle-bracketed exactly the way POV-Ray's grammar needs them.
//! - **Process boundary included**: [`Scene::render_to_file`] and
//!   [`Scene::render_to_image`] drive the renderer and decode its output.
//!
//! ## Quick Start
//!
//! ```rust
//! use povgen::{args, elements::*, Scene};
//!
//! let scene = Scene::new(camera(args!["location", [0, 2, -3], "look_at", [0, 1, 2]]))
//!     .with_objects(vec![
//!         light_source(args![[2, 4, -3], "color", [1, 1, 1]]),
//!         sphere(args![
//!             [0, 1, 2],
//!             2,
//!             texture(args![pigment(args!["color", [1, 0, 1]])]),
//!         ]),
//!     ]);
//!
//! let source = scene.to_source().unwrap();
//! assert!(source.contains("light_source {"));
//! ```
//!
//! Rendering the same scene needs a `povray` binary on the path:
//!
//! ```rust,no_run
//! # use povgen::{args, elements::*, RenderOptions, Scene};
//! # let scene = Scene::new(camera(args![]));
//! scene.render_to_file(
//!     "purple_sphere.png",
//!     &RenderOptions::new().with_width(600).with_height(400),
//! )?;
//! # Ok::<(), povgen::Error>(())
//! ```
//!
//! ## What this crate does not do
//!
//! The generated text is structurally well-formed, but argument semantics
//! are never validated: a sphere with five centers serializes happily and
//! fails later, inside POV-Ray, whose error output is surfaced as
//! [`Error::Render`]. The crate also never parses scene description text.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`sphere.rs`** - a purple sphere, the smallest complete scene
//! - **`lens.rs`** - CSG, color maps, includes, and defaults
//!
//! Run one with: `cargo run --example sphere`

pub mod elements;
pub mod error;
pub mod macros;
pub mod node;
pub mod render;
pub mod scene;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use node::{Node, Shape};
pub use render::RenderOptions;
pub use scene::Scene;
pub use ser::{to_string, Serializer};
pub use value::{Number, Value};
