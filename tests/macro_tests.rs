use povgen::{args, elements::*, to_string, Shape, Value};

#[test]
fn test_args_mixes_tokens_vectors_and_nodes() {
    let list = args![
        "location",
        [0, 2, -3],
        "look_at",
        [0, 1, 2],
        pigment(args!["color", [1, 0, 1]]),
    ];
    assert_eq!(list.len(), 5);
    assert!(list[0].is_str());
    assert!(list[1].is_vector());
    assert!(list[4].is_node());
}

#[test]
fn test_args_negative_scalars_and_elements() {
    let list = args![-3, [2, 4, -3], -0.5];
    assert_eq!(list[0], Value::from(-3));
    assert_eq!(list[2], Value::from(-0.5));
    let elems = list[1].as_vector().unwrap();
    assert_eq!(elems[2], Value::from(-3));
}

#[test]
fn test_args_accepts_expressions() {
    let radius = 6.0;
    let overlap = 0.1;
    let list = args![[0, 0, 0], radius, "translate", [0.0, 0.0, radius - overlap]];
    assert_eq!(list[1], Value::from(6.0));
    let translate = list[3].as_vector().unwrap();
    assert!((translate[2].as_f64().unwrap() - 5.9).abs() < 1e-9);
}

#[test]
fn test_args_trailing_comma() {
    let list = args![
        "phong",
        1,
    ];
    assert_eq!(list.len(), 2);
}

#[test]
fn test_catalog_constructors_in_one_tree() {
    let tree = union(args![
        sphere(args![[0, 0, 0], 1]),
        box_(args![[-1, -1, -1], [1, 1, 1]]),
        "rotate",
        [0, 5, 0],
    ]);
    assert_eq!(tree.tag(), "union");
    assert_eq!(tree.shape(), Shape::Block);

    let source = to_string(&tree).unwrap();
    assert!(source.starts_with("union {\nsphere {"));
    assert!(source.contains("box {\n<-1,-1,-1>\n<1,1,1>\n}"));
    assert!(source.ends_with("rotate\n<0,5,0>\n}"));
}

#[test]
fn test_color_map_entries_via_args() {
    let map = color_map(args![[0, "color", "White"], [1, "color", "Blue"]]);
    assert_eq!(
        to_string(&map).unwrap(),
        "color_map { [ 0 color White ] [ 1 color Blue ] }"
    );
}
