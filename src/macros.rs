/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects, arrays, `null`, booleans, and primitive literals nest freely;
/// any other expression falls back to [`to_value`](crate::to_value) (wrap
/// multi-token expressions in parentheses).
///
/// # Examples
///
/// ```rust
/// use serde_formdata::form;
///
/// let data = form!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "serde"]
/// });
///
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! form {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::form!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::FormMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::FormMap::new();
        $(
            object.insert($key.to_string(), $crate::form!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{FormMap, Number, Value};

    #[test]
    fn test_form_macro_primitives() {
        assert_eq!(form!(null), Value::Null);
        assert_eq!(form!(true), Value::Bool(true));
        assert_eq!(form!(false), Value::Bool(false));
        assert_eq!(form!(42), Value::Number(Number::Integer(42)));
        assert_eq!(form!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(form!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_form_macro_arrays() {
        assert_eq!(form!([]), Value::Array(vec![]));

        let arr = form!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::Number(Number::Integer(2)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_form_macro_objects() {
        assert_eq!(form!({}), Value::Object(FormMap::new()));

        let obj = form!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }
}
