//! Literal constructors.

/// Build a [`Mash`](crate::Mash) from `key => value` pairs.
///
/// Each pair goes through [`Mash::set`](crate::Mash::set), so symbol keys
/// and nested plain maps are converted.
///
/// ```
/// use mash_core::{mash, plain, Key};
///
/// let params = mash! { Key::symbol("user") => plain! { "name" => "ada" } };
/// let user = params.get("user");
/// assert_eq!(user.as_mash().unwrap().get(Key::symbol("name")), "ada");
/// ```
#[macro_export]
macro_rules! mash {
    () => {
        $crate::Mash::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Mash::from_mapping([
            $(($crate::Key::from($key), $crate::Value::from($value))),+
        ])
    };
}

/// Build a [`PlainMap`](crate::PlainMap) from `key => value` pairs.
///
/// Keys and values are stored as given.
#[macro_export]
macro_rules! plain {
    () => {
        $crate::PlainMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$(($crate::Key::from($key), $crate::Value::from($value))),+]
            .into_iter()
            .collect::<$crate::PlainMap>()
    };
}
