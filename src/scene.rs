//! The top-level scene document.
//!
//! A [`Scene`] assembles includes, declarations, defaults, objects, the
//! camera, atmospheric effects, and global settings into one scene
//! description document. The rendered section order is fixed regardless of
//! the order the parts were supplied in.
//!
//! Like nodes, scenes are immutable by convention: [`Scene::set_camera`] and
//! [`Scene::add_objects`] deep-copy the whole scene, so earlier references
//! stay valid and unaffected — derived variants of a shared base scene can be
//! serialized concurrently without locking.
//!
//! ```rust
//! use povgen::{args, elements::*, Scene};
//!
//! let scene = Scene::new(camera(args!["location", [0, 2, -3], "look_at", [0, 1, 2]]))
//!     .with_objects(vec![
//!         light_source(args![[2, 4, -3], "color", [1, 1, 1]]),
//!         sphere(args![[0, 1, 2], 2]),
//!     ]);
//!
//! let source = scene.to_source().unwrap();
//! assert!(source.ends_with("global_settings {\n\n}"));
//! ```

use crate::render::{self, RenderOptions};
use crate::{args, Node, Result, Serializer, Shape, Value};
use std::path::Path;

/// A complete scene: one camera plus the optional surrounding sections.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    camera: Node,
    objects: Vec<Node>,
    atmospheric: Vec<Node>,
    included: Vec<String>,
    defaults: Vec<Node>,
    declares: Vec<String>,
    global_settings: Vec<Node>,
}

impl Scene {
    /// Creates a scene holding only a camera; all other sections start empty.
    #[must_use]
    pub fn new(camera: Node) -> Self {
        Scene {
            camera,
            objects: Vec::new(),
            atmospheric: Vec::new(),
            included: Vec::new(),
            defaults: Vec::new(),
            declares: Vec::new(),
            global_settings: Vec::new(),
        }
    }

    /// Sets the object list (lights, primitives, CSG trees).
    #[must_use]
    pub fn with_objects(mut self, objects: Vec<Node>) -> Self {
        self.objects = objects;
        self
    }

    /// Sets the atmospheric effect list (fog, rainbow, media).
    #[must_use]
    pub fn with_atmospheric(mut self, atmospheric: Vec<Node>) -> Self {
        self.atmospheric = atmospheric;
        self
    }

    /// Sets the include-file names, one `#include "<name>"` line each.
    #[must_use]
    pub fn with_included(mut self, included: Vec<String>) -> Self {
        self.included = included;
        self
    }

    /// Sets the default nodes, one `#default { <node> }` line each.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Vec<Node>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the declaration entries, one `#declare <entry>;` line each.
    #[must_use]
    pub fn with_declares(mut self, declares: Vec<String>) -> Self {
        self.declares = declares;
        self
    }

    /// Sets the nodes placed inside the `global_settings` block.
    #[must_use]
    pub fn with_global_settings(mut self, settings: Vec<Node>) -> Self {
        self.global_settings = settings;
        self
    }

    /// The camera node.
    #[inline]
    #[must_use]
    pub fn camera(&self) -> &Node {
        &self.camera
    }

    /// The object nodes, in supplied order.
    #[inline]
    #[must_use]
    pub fn objects(&self) -> &[Node] {
        &self.objects
    }

    /// Returns a deep copy of the scene with the camera replaced. The
    /// receiver is unmodified.
    #[must_use]
    pub fn set_camera(&self, camera: Node) -> Self {
        let mut copy = self.clone();
        copy.camera = camera;
        copy
    }

    /// Returns a deep copy of the scene with `objects` appended. The
    /// receiver is unmodified.
    #[must_use]
    pub fn add_objects(&self, objects: Vec<Node>) -> Self {
        let mut copy = self.clone();
        copy.objects.extend(objects);
        copy
    }

    /// Returns a copy whose camera carries an extra `right` vector matching
    /// the output aspect ratio, `<width/height, 0, 0>`.
    ///
    /// The render entry points apply this automatically when both output
    /// dimensions are known.
    #[must_use]
    pub fn with_aspect_ratio(&self, width: u32, height: u32) -> Self {
        let ratio = width as f64 / height as f64;
        self.set_camera(self.camera.add_args(args!["right", [ratio, 0.0, 0.0]]))
    }

    /// Serializes the scene to a complete scene description document.
    ///
    /// Sections render in fixed order: includes, declarations, defaults,
    /// objects, camera, atmospheric effects, and a `global_settings` block.
    /// Empty sections contribute no lines; `global_settings` always renders,
    /// empty-bodied if need be.
    ///
    /// # Errors
    ///
    /// Fails atomically if any node in the scene cannot be serialized.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn to_source(&self) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        for name in &self.included {
            lines.push(format!("#include \"{}\"", name));
        }
        for entry in &self.declares {
            lines.push(format!("#declare {};", entry));
        }
        for node in &self.defaults {
            lines.push(format!("#default {{ {} }}", crate::to_string(node)?));
        }
        for node in self.objects.iter().chain([&self.camera]).chain(&self.atmospheric) {
            lines.push(crate::to_string(node)?);
        }

        // Always present, even with an empty body.
        let settings = Node::from_tag(
            "global_settings",
            Shape::Block,
            self.global_settings.iter().cloned().map(Value::Node).collect(),
        );
        let mut serializer = Serializer::new();
        serializer.write_node(&settings)?;
        lines.push(serializer.into_inner());

        Ok(lines.join("\n"))
    }

    /// Renders the scene to an image file via the `povray` binary.
    ///
    /// The output format follows the file extension POV-Ray sees in the
    /// target path (PNG by default). When both dimensions are set in `opts`,
    /// the camera is aspect-adjusted first; the scene itself is unmodified.
    ///
    /// # Errors
    ///
    /// Fails if the scene cannot be serialized, the subprocess cannot be
    /// spawned, or POV-Ray exits unsuccessfully.
    pub fn render_to_file(&self, path: impl AsRef<Path>, opts: &RenderOptions) -> Result<()> {
        render::render_to_file(&self.source_for_render(opts)?, path.as_ref(), opts)
    }

    /// Renders the scene to an in-memory RGB pixel buffer.
    ///
    /// # Errors
    ///
    /// Fails if the scene cannot be serialized, the subprocess cannot be
    /// spawned, POV-Ray exits unsuccessfully, or its pixel output cannot be
    /// decoded.
    pub fn render_to_image(&self, opts: &RenderOptions) -> Result<image::RgbImage> {
        render::render_to_image(&self.source_for_render(opts)?, opts)
    }

    fn source_for_render(&self, opts: &RenderOptions) -> Result<String> {
        match (opts.width, opts.height) {
            (Some(w), Some(h)) => self.with_aspect_ratio(w, h).to_source(),
            _ => self.to_source(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::*;

    fn test_camera() -> Node {
        camera(args!["location", [0, 2, -3], "look_at", [0, 1, 2]])
    }

    #[test]
    fn test_minimal_scene() {
        let source = Scene::new(test_camera()).to_source().unwrap();
        assert_eq!(
            source,
            "camera {\nlocation\n<0,2,-3>\nlook_at\n<0,1,2>\n}\nglobal_settings {\n\n}"
        );
    }

    #[test]
    fn test_section_order_is_fixed() {
        let base = Scene::new(test_camera());
        let a = base
            .clone()
            .with_global_settings(vec![radiosity(args![])])
            .with_objects(vec![sphere(args![[0, 1, 2], 2])]);
        let b = base
            .with_objects(vec![sphere(args![[0, 1, 2], 2])])
            .with_global_settings(vec![radiosity(args![])]);

        let source = a.to_source().unwrap();
        assert_eq!(source, b.to_source().unwrap());

        let sphere_at = source.find("sphere {").unwrap();
        let camera_at = source.find("camera {").unwrap();
        let settings_at = source.find("global_settings {").unwrap();
        assert!(sphere_at < camera_at);
        assert!(camera_at < settings_at);
    }

    #[test]
    fn test_includes_and_declares_lead_the_document() {
        let source = Scene::new(test_camera())
            .with_included(vec!["colors.inc".to_string(), "glass.inc".to_string()])
            .with_declares(vec!["Ground_Color = rgb <1, 0, 0>".to_string()])
            .to_source()
            .unwrap();

        let mut lines = source.lines();
        assert_eq!(lines.next(), Some("#include \"colors.inc\""));
        assert_eq!(lines.next(), Some("#include \"glass.inc\""));
        assert_eq!(lines.next(), Some("#declare Ground_Color = rgb <1, 0, 0>;"));
    }

    #[test]
    fn test_defaults_render_after_declares() {
        let source = Scene::new(test_camera())
            .with_defaults(vec![finish(args!["ambient", 0.1, "diffuse", 0.9])])
            .to_source()
            .unwrap();
        assert!(source.starts_with("#default { finish {\nambient\n0.1\ndiffuse\n0.9\n} }"));
    }

    #[test]
    fn test_atmospheric_renders_after_camera() {
        let source = Scene::new(test_camera())
            .with_atmospheric(vec![fog(args!["distance", 20])])
            .to_source()
            .unwrap();
        let camera_at = source.find("camera {").unwrap();
        let fog_at = source.find("fog {").unwrap();
        assert!(camera_at < fog_at);
    }

    #[test]
    fn test_global_settings_block_with_content() {
        let source = Scene::new(test_camera())
            .with_global_settings(vec![radiosity(args!["count", 35])])
            .to_source()
            .unwrap();
        assert!(source.ends_with("global_settings {\nradiosity {\ncount\n35\n}\n}"));
    }

    #[test]
    fn test_set_camera_leaves_original_untouched() {
        let original = Scene::new(test_camera());
        let replaced = original.set_camera(camera(args!["location", [1, 1, 1]]));

        assert_eq!(original.camera(), &test_camera());
        assert_ne!(replaced.camera(), original.camera());
    }

    #[test]
    fn test_add_objects_leaves_original_untouched() {
        let original = Scene::new(test_camera()).with_objects(vec![sphere(args![[0, 0, 0], 1])]);
        let extended = original.add_objects(vec![plane(args![[0, 1, 0], 0])]);

        assert_eq!(original.objects().len(), 1);
        assert_eq!(extended.objects().len(), 2);
        assert_eq!(&extended.objects()[..1], original.objects());
    }

    #[test]
    fn test_aspect_ratio_appends_right_vector() {
        let original = Scene::new(test_camera());
        let adjusted = original.with_aspect_ratio(600, 400);

        assert_eq!(original.camera().args().len(), 4);
        let cam_args = adjusted.camera().args();
        assert_eq!(cam_args.len(), 6);
        assert_eq!(cam_args[4], Value::from("right"));
        assert_eq!(cam_args[5], Value::from([1.5, 0.0, 0.0]));

        let source = adjusted.to_source().unwrap();
        assert!(source.contains("right\n<1.5,0,0>"));
    }
}
