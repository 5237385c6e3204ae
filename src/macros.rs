/// Builds a [`Variant`](crate::Variant) from a JSON-like literal.
///
/// `null`, `true` and `false` produce the empty symbol, matching what the
/// decoder yields for them. So does a float that is `NaN` or infinite. Objects are flattened into a `Symbol` the same
/// way decoded JSON objects are.
///
/// ```rust
/// use variant_json::{from_str, variant};
///
/// let built = variant!({ "name": "Alice", "tags": ["a", 2] });
/// let decoded = from_str(r#"{"name": "Alice", "tags": ["a", 2]}"#).unwrap();
/// assert_eq!(built, decoded);
/// ```
#[macro_export]
macro_rules! variant {
    (null) => {
        $crate::Variant::empty_symbol()
    };

    (true) => {
        $crate::Variant::empty_symbol()
    };

    (false) => {
        $crate::Variant::empty_symbol()
    };

    ([]) => {
        $crate::Variant::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Variant::List(vec![$($crate::variant!($elem)),*])
    };

    ({}) => {
        $crate::Variant::from($crate::VariantMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut entries = ::std::vec::Vec::new();
        $(
            entries.push($crate::Variant::Cadena($key.to_string()));
            entries.push($crate::variant!($value));
        )*
        $crate::Variant::Symbol($crate::Symbol {
            name: ::std::string::String::new(),
            entries,
        })
    }};

    ($other:expr) => {
        <$crate::Variant as ::core::convert::TryFrom<_>>::try_from($other)
            .unwrap_or_else(|_| $crate::Variant::empty_symbol())
    };
}
