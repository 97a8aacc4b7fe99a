//! Field descriptor tables.
//!
//! A structure type registers, once, an ordered list of [`Field`]s. Each entry
//! binds the key used in the output object, a `required` flag, and an
//! accessor that reads the field's current optional value. Table order is
//! output order.
//!
//! Tables are normally declared with [`structure!`](crate::structure), which
//! also implements [`Write`] for the type:
//!
//! ```
//! use json_reflect::structure;
//!
//! #[derive(Default)]
//! struct Point {
//!     x: Option<i64>,
//!     y: Option<i64>,
//!     label: Option<String>,
//! }
//!
//! structure!(Point {
//!     x => "x" required,
//!     y => "y" required,
//!     label => "label",
//! });
//!
//! let p = Point { x: Some(1), y: Some(2), label: None };
//! assert_eq!(json_reflect::to_tree(&p), serde_json::json!({"x": 1, "y": 2}));
//! ```
use crate::write::Write;

/// Static metadata for one member of a structure type.
pub struct Field<S> {
    /// Key in the output object. Unique within a table.
    pub name: &'static str,
    /// Declared intent only. The writer never consults it; see
    /// [`check_required`](crate::required::check_required).
    pub required: bool,
    /// Reads the member. `None` means absent.
    pub accessor: fn(&S) -> Option<&dyn Write>,
}

impl<S> Field<S> {
    pub fn read<'a>(&self, value: &'a S) -> Option<&'a dyn Write> {
        (self.accessor)(value)
    }
}

impl<S> std::fmt::Debug for Field<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// A user-defined aggregate with a registered descriptor table.
pub trait Structure: Sized + 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;
    const FIELDS: &'static [Field<Self>];

    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

/// Output keys of `S`, in table order.
pub fn field_names<S: Structure>() -> Vec<&'static str> {
    S::FIELDS.iter().map(|field| field.name).collect()
}

/// True when no two descriptors of `S` share a key.
pub fn has_unique_names<S: Structure>() -> bool {
    names_are_unique(&field_names::<S>())
}

/// Pairwise key comparison usable in const context; [`structure!`](crate::structure)
/// evaluates it when the table is defined.
pub const fn names_are_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if bytes_eq(names[i].as_bytes(), names[j].as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Declare the descriptor table of a struct whose serializable members are
/// all `Option<T>`, and implement [`Write`](crate::Write) for it.
///
/// Each entry is `member => "key"`, optionally followed by `required`.
/// Keys must be unique within one table; a repeated key fails at compile
/// time:
///
/// ```compile_fail
/// use json_reflect::structure;
///
/// struct Twice {
///     a: Option<i64>,
///     b: Option<i64>,
/// }
///
/// structure!(Twice {
///     a => "x",
///     b => "x",
/// });
/// ```
#[macro_export]
macro_rules! structure {
    (@required) => { false };
    (@required required) => { true };
    ($ty:ident { $($member:ident => $name:literal $($flag:ident)?),* $(,)? }) => {
        const _: () = assert!(
            $crate::descriptor::names_are_unique(&[$($name),*]),
            concat!("duplicate field name in `", stringify!($ty), "`"),
        );

        impl $crate::Structure for $ty {
            const NAME: &'static str = stringify!($ty);
            const FIELDS: &'static [$crate::Field<Self>] = &[
                $(
                    $crate::Field {
                        name: $name,
                        required: $crate::structure!(@required $($flag)?),
                        accessor: {
                            fn read(value: &$ty) -> Option<&dyn $crate::Write> {
                                value.$member.as_ref().map(|inner| inner as &dyn $crate::Write)
                            }
                            read
                        },
                    },
                )*
            ];
        }

        impl $crate::Write for $ty {
            fn write(&self, node: &mut $crate::Value, session: &$crate::Session) {
                $crate::write_structure(self, node, session)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        first: Option<i64>,
        second: Option<String>,
        third: Option<bool>,
    }

    crate::structure!(Probe {
        first => "first" required,
        second => "second",
        third => "third",
    });

    #[test]
    fn table_keeps_declaration_order() {
        assert_eq!(field_names::<Probe>(), vec!["first", "second", "third"]);
        assert!(has_unique_names::<Probe>());
        assert_eq!(Probe::NAME, "Probe");
    }

    #[test]
    fn repeated_key_is_detected() {
        assert!(names_are_unique(&[]));
        assert!(names_are_unique(&["x", "xy", "y"]));
        assert!(!names_are_unique(&["x", "y", "x"]));
        assert!(!names_are_unique(&["", ""]));
    }

    #[test]
    fn required_flag_is_recorded() {
        assert!(Probe::field("first").unwrap().required);
        assert!(!Probe::field("second").unwrap().required);
        assert!(Probe::field("missing").is_none());
    }

    #[test]
    fn accessor_reflects_presence() {
        let mut probe = Probe::default();
        let second = Probe::field("second").unwrap();
        assert!(second.read(&probe).is_none());
        probe.second = Some("x".into());
        assert!(second.read(&probe).is_some());
        probe.second = None;
        assert!(second.read(&probe).is_none());
    }
}
