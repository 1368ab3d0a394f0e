//! A glass lens over a sandy plane: CSG, color maps, includes, and defaults.
//!
//! Run with: cargo run --example lens

use povgen::{args, elements::*, RenderOptions, Scene, Value};

fn main() {
    let sun = light_source(args![[1000, 2500, -2500], "color", "White"]);

    let sky = sky_sphere(args![pigment(args![
        "gradient",
        [0, 1, 0],
        color_map(args![
            [0.0, "color", "White"],
            [0.5, "color", "CadetBlue"],
            [1.0, "color", "CadetBlue"],
        ]),
        "quick_color",
        "White",
    ])]);

    let ground = plane(args![
        [0, 1, 0],
        0,
        texture(args![
            pigment(args!["color", [0.85, 0.55, 0.30]]),
            finish(args!["phong", 0.1]),
        ]),
    ]);

    let balls: Vec<Value> = (0..20)
        .map(|i| {
            sphere(args![
                [0.0, 0.0, f64::from(i)],
                0.35,
                texture(args![
                    pigment(args!["color", [1.0, 0.65, 0.0]]),
                    finish(args!["phong", 1]),
                ]),
            ])
            .into()
        })
        .collect();
    let balls = object(args![
        union(balls),
        "scale",
        [0.4, 0.75, 0.75],
        "rotate",
        [0, 5, 0],
        "translate",
        [-1.9, 0.5, 0.0],
    ]);

    let (radius, overlap) = (6.0, 0.1);
    let lens = intersection(args![
        sphere(args![[0, 0, 0], radius, "translate", [0.0, 0.0, overlap - radius]]),
        sphere(args![[0, 0, 0], radius, "translate", [0.0, 0.0, radius - overlap]]),
        texture(args!["T_Glass3"]),
        interior(args!["I_Glass3"]),
        "translate",
        [0.0, 1.2, 0.0],
    ]);

    let scene = Scene::new(camera(args![
        "angle",
        75,
        "location",
        [0.0, 1.0, -3.0],
        "look_at",
        [-0.3, 1.0, 0.0],
    ]))
    .with_objects(vec![sun, sky, ground, balls, lens])
    .with_included(
        ["colors.inc", "textures.inc", "glass.inc"]
            .map(String::from)
            .to_vec(),
    )
    .with_defaults(vec![finish(args!["ambient", 0.1, "diffuse", 0.9])]);

    println!("{}\n", scene.to_source().unwrap());

    let opts = RenderOptions::new()
        .with_width(400)
        .with_height(300)
        .with_antialiasing(0.01);
    match scene.render_to_file("lens.png", &opts) {
        Ok(()) => println!("rendered lens.png"),
        Err(e) => eprintln!("render skipped: {}", e),
    }
}
