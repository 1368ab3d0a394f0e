//! A purple sphere, the smallest complete scene.
//!
//! Run with: cargo run --example sphere
//!
//! Rendering needs a `povray` binary on the path; without one the generated
//! scene source is still printed.

use povgen::{args, elements::*, RenderOptions, Scene};

fn main() {
    let scene = Scene::new(camera(args!["location", [0, 2, -3], "look_at", [0, 1, 2]]))
        .with_objects(vec![
            light_source(args![[2, 4, -3], "color", [1, 1, 1]]),
            sphere(args![
                [0, 1, 2],
                2,
                texture(args![pigment(args!["color", [1, 0, 1]])]),
            ]),
        ]);

    println!("{}\n", scene.to_source().unwrap());

    let opts = RenderOptions::new().with_width(600).with_height(400);
    match scene.render_to_file("purple_sphere.png", &opts) {
        Ok(()) => println!("rendered purple_sphere.png"),
        Err(e) => eprintln!("render skipped: {}", e),
    }
}
