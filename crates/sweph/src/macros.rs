/// Defines a transparent newtype around a raw `swephexp.h` integer code and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `Display` (the raw value)
/// - `From<$inner> for $name` and `From<$name> for $inner`
/// - `new` / `value` accessors
///
/// Raw values pass through unvalidated; the native library is the judge.
///
/// Usage:
///   define_code_type!(i32, Body);
macro_rules! define_code_type {
    ($(#[$meta:meta])* $inner:ty, $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<$inner> for $name {
            fn from(v: $inner) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for $inner {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            pub const fn new(value: $inner) -> Self {
                $name(value)
            }

            pub const fn value(&self) -> $inner {
                self.0
            }
        }
    };
}

/// Adds bit-set operators to a code type defined with `define_code_type!`.
macro_rules! impl_bit_ops {
    ($name:ident) => {
        impl ::std::ops::BitOr for $name {
            type Output = $name;

            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: $name) {
                self.0 |= rhs.0;
            }
        }

        impl $name {
            /// Whether every bit of `other` is set in `self`
            pub const fn contains(&self, other: $name) -> bool {
                self.0 & other.0 == other.0
            }
        }
    };
}
