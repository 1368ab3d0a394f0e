//! Invocation of the external POV-Ray renderer.
//!
//! The core's contract ends at "scene tree → text"; this module carries the
//! text across the process boundary. It writes the generated source to a
//! temporary `.pov` file, runs the `povray` binary with the requested output
//! flags, and hands back either a file on disk or an in-memory pixel buffer
//! decoded from POV-Ray's binary PPM output.
//!
//! Rendering failures reported by POV-Ray — including scene syntax errors,
//! which the core never validates — surface here as [`Error::Render`] with
//! the renderer's stderr attached.
//!
//! ```rust,no_run
//! use povgen::{args, elements::*, RenderOptions, Scene};
//!
//! let scene = Scene::new(camera(args!["location", [0, 2, -3], "look_at", [0, 1, 2]]))
//!     .with_objects(vec![sphere(args![[0, 1, 2], 2])]);
//!
//! let opts = RenderOptions::new().with_width(600).with_height(400);
//! scene.render_to_file("sphere.png", &opts)?;
//! # Ok::<(), povgen::Error>(())
//! ```

use crate::{Error, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::{env, fs};

/// Options passed through to the `povray` invocation.
///
/// All fields are optional; unset fields are simply omitted from the command
/// line and POV-Ray falls back to its own defaults.
///
/// # Examples
///
/// ```rust
/// use povgen::RenderOptions;
///
/// let opts = RenderOptions::new()
///     .with_width(600)
///     .with_height(400)
///     .with_quality(9)
///     .with_antialiasing(0.01);
/// assert_eq!(opts.width, Some(600));
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Output width in pixels (`+W`).
    pub width: Option<u32>,
    /// Output height in pixels (`+H`).
    pub height: Option<u32>,
    /// Render quality, 0–11 (`+Q`).
    pub quality: Option<u8>,
    /// Antialiasing threshold (`+A`).
    pub antialiasing: Option<f64>,
    /// Emit a transparent background instead of black. Ignored when
    /// rendering to a pixel buffer; the intermediate PPM has no alpha.
    pub output_alpha: bool,
    /// Extra library search paths (`+L`).
    pub include_dirs: Vec<PathBuf>,
    /// Name or path of the POV-Ray binary.
    pub binary: String,
    /// Keep the temporary `.pov` source file instead of removing it.
    pub keep_source: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            width: None,
            height: None,
            quality: None,
            antialiasing: None,
            output_alpha: false,
            include_dirs: Vec::new(),
            binary: "povray".to_string(),
            keep_source: false,
        }
    }
}

impl RenderOptions {
    /// Creates default options: no explicit dimensions, POV-Ray defaults for
    /// everything else.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output width in pixels.
    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the output height in pixels.
    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the render quality level (0–11).
    #[must_use]
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Sets the antialiasing threshold.
    #[must_use]
    pub fn with_antialiasing(mut self, threshold: f64) -> Self {
        self.antialiasing = Some(threshold);
        self
    }

    /// Requests a transparent background in file output.
    #[must_use]
    pub fn with_output_alpha(mut self, alpha: bool) -> Self {
        self.output_alpha = alpha;
        self
    }

    /// Adds a library search path for `#include` resolution.
    #[must_use]
    pub fn with_include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dirs.push(dir.into());
        self
    }

    /// Overrides the POV-Ray binary name or path.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Keeps the temporary `.pov` source file for inspection.
    #[must_use]
    pub fn with_keep_source(mut self, keep: bool) -> Self {
        self.keep_source = keep;
        self
    }
}

/// Output formats POV-Ray is asked for: `N` is PNG, `P` is binary PPM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileType {
    Png,
    Ppm,
}

impl FileType {
    fn flag(self) -> &'static str {
        match self {
            FileType::Png => "Output_File_Type=N",
            FileType::Ppm => "Output_File_Type=P",
        }
    }
}

/// Assembles the povray command line for one invocation.
fn command_args(
    opts: &RenderOptions,
    source_path: &Path,
    file_type: FileType,
    outfile: &str,
) -> Vec<String> {
    let mut cmd = vec![source_path.display().to_string()];
    if let Some(height) = opts.height {
        cmd.push(format!("+H{}", height));
    }
    if let Some(width) = opts.width {
        cmd.push(format!("+W{}", width));
    }
    if let Some(quality) = opts.quality {
        cmd.push(format!("+Q{}", quality));
    }
    if let Some(threshold) = opts.antialiasing {
        cmd.push(format!("+A{}", threshold));
    }
    if opts.output_alpha {
        cmd.push("Output_Alpha=on".to_string());
    }
    // Never open the preview display.
    cmd.push("-D".to_string());
    for dir in &opts.include_dirs {
        cmd.push(format!("+L{}", dir.display()));
    }
    cmd.push(file_type.flag().to_string());
    cmd.push(format!("+O{}", outfile));
    cmd
}

fn temp_source_path() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    env::temp_dir().join(format!("povgen-{}-{}.pov", std::process::id(), n))
}

fn invoke(source: &str, opts: &RenderOptions, file_type: FileType, outfile: &str) -> Result<Output> {
    let source_path = temp_source_path();
    fs::write(&source_path, source)?;

    let cmd = command_args(opts, &source_path, file_type, outfile);
    debug!("running {} {}", opts.binary, cmd.join(" "));

    let spawned = Command::new(&opts.binary)
        .args(&cmd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let output = spawned.and_then(|child| child.wait_with_output());

    if !opts.keep_source {
        // A stale temp file is not worth failing an otherwise good render.
        let _ = fs::remove_file(&source_path);
    }

    let output = output?;
    if !output.status.success() {
        return Err(Error::Render {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    if !output.stderr.is_empty() {
        warn!(
            "povray wrote to stderr on success: {}",
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }
    debug!(
        "povray finished, {} bytes on stdout",
        output.stdout.len()
    );
    Ok(output)
}

/// Renders scene source to an image file (PNG) at `path`.
///
/// # Errors
///
/// Fails if the temporary source file cannot be written, the binary cannot
/// be spawned, or POV-Ray exits unsuccessfully.
pub fn render_to_file(source: &str, path: &Path, opts: &RenderOptions) -> Result<()> {
    invoke(source, opts, FileType::Png, &path.display().to_string())?;
    Ok(())
}

/// Renders scene source to an in-memory 3-channel pixel buffer.
///
/// POV-Ray streams a binary PPM to stdout, which is decoded with the `image`
/// crate.
///
/// # Errors
///
/// Fails on the same conditions as [`render_to_file`], or when the PPM
/// output cannot be decoded.
pub fn render_to_image(source: &str, opts: &RenderOptions) -> Result<image::RgbImage> {
    let output = invoke(source, opts, FileType::Ppm, "-")?;
    let decoded = image::load_from_memory_with_format(&output.stdout, image::ImageFormat::Pnm)
        .map_err(|e| Error::Decode(e.to_string()))?;
    Ok(decoded.to_rgb8())
}
