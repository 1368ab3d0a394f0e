/// Builds a `Vec<Value>` argument list.
///
/// Bracketed groups become [`Value::Vector`](crate::Value::Vector)s (and
/// nest); every other expression goes through `Value::from`, so numbers,
/// string tokens, and nodes mix freely:
///
/// ```rust
/// use povgen::{args, elements::*};
///
/// let camera = camera(args!["location", [0, 2, -3], "look_at", [0, 1, 2]]);
/// let sphere = sphere(args![
///     [0, 1, 2],
///     2,
///     texture(args![pigment(args!["color", [1, 0, 1]])]),
/// ]);
/// ```
#[macro_export]
macro_rules! args {
    // Internal muncher arms come first so recursive calls never re-enter
    // the catch-all entry arm below.

    // All elements munched; emit the accumulated list.
    (@list [$($acc:expr),*]) => {
        ::std::vec![$($acc),*]
    };

    // A bracketed group is a vector; its elements recurse through the same
    // rules, so vectors nest.
    (@list [$($acc:expr),*] [$($vec:tt)*] $(, $($rest:tt)*)?) => {
        $crate::args!(
            @list
            [$($acc,)* $crate::Value::Vector($crate::args!(@list [] $($vec)*))]
            $($($rest)*)?
        )
    };

    // Anything else converts via From.
    (@list [$($acc:expr),*] $e:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@list [$($acc,)* $crate::Value::from($e)] $($($rest)*)?)
    };

    // Entry points.
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($tokens:tt)+) => {
        $crate::args!(@list [] $($tokens)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Node, Value};

    #[test]
    fn test_args_empty() {
        let empty = args![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_args_scalars_and_tokens() {
        let list = args!["phong", 1, "brilliance", 0.9];
        assert_eq!(list.len(), 4);
        assert_eq!(list[0], Value::from("phong"));
        assert_eq!(list[1], Value::from(1));
        assert_eq!(list[3], Value::from(0.9));
    }

    #[test]
    fn test_args_brackets_become_vectors() {
        let list = args![[1, 0, 1]];
        assert_eq!(
            list[0],
            Value::Vector(vec![Value::from(1), Value::from(0), Value::from(1)])
        );
    }

    #[test]
    fn test_args_nested_brackets() {
        let list = args![[[1, 0], [0, 1]]];
        let Value::Vector(outer) = &list[0] else {
            panic!("expected vector")
        };
        assert_eq!(outer.len(), 2);
        assert!(outer[0].is_vector());
    }

    #[test]
    fn test_args_accepts_nodes() {
        let pigment = Node::new("Pigment", args!["color", [1, 0, 1]]).unwrap();
        let list = args![[0, 1, 2], 2, pigment.clone()];
        assert_eq!(list[2], Value::Node(pigment));
    }

    #[test]
    fn test_args_long_mixed_list_expands() {
        // One muncher step per element; a long mixed list stays well within
        // the default recursion limit.
        let list = args![
            "angle", 75, "location", [0.0, 1.0, -3.0], "look_at", [-0.3, 1.0, 0.0],
            "scale", [0.4, 0.75, 0.75], "rotate", [0, 5, 0], "translate", [-1.9, 0.5, 0.0],
            "phong", 1, "brilliance", 0.9, "ambient", 0.5, "diffuse", 0.9,
        ];
        assert_eq!(list.len(), 20);
        assert_eq!(list[0], Value::from("angle"));
        assert!(list[3].is_vector());
    }

    #[test]
    fn test_args_negative_literals() {
        let list = args![-3, [2, 4, -3]];
        assert_eq!(list[0], Value::from(-3));
    }
}
