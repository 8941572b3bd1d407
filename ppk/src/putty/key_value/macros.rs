//! Declarations of the typed PPK header keys and values.
//!
//! Every literal type gets a [`PpkLiteral`](super::PpkLiteral) table and `FromStr`/`Display`
//! implementations driven by that table.

macro_rules! ppk_literal_list {
    ($first:literal $(, $rest:literal)*) => {
        concat!($first $(, ", ", $rest)*)
    };
}

macro_rules! impl_ppk_literal_parsing {
    ($name:ident) => {
        impl std::str::FromStr for $name {
            type Err = PpkValueParsingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as PpkLiteral>::ALL
                    .iter()
                    .copied()
                    .find(|literal| literal.as_static_str() == s)
                    .ok_or_else(|| PpkValueParsingError {
                        expected: <Self as PpkLiteral>::EXPECTED,
                        actual: s.to_owned(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_static_str())
            }
        }
    };
}

/// Key with a single accepted spelling, e.g. `Comment`.
macro_rules! ppk_const {
    ($name:ident = $literal:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl PpkLiteral for $name {
            const ALL: &'static [Self] = &[$name];
            const CONTEXT: &'static str = stringify!($name);
            const EXPECTED: &'static str = $literal;

            fn as_static_str(&self) -> &'static str {
                $literal
            }
        }

        impl_ppk_literal_parsing!($name);
    };
}

/// Key or value chosen from a closed set of spellings.
macro_rules! ppk_enum {
    ($name:ident { $($variant:ident = $literal:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl PpkLiteral for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const CONTEXT: &'static str = stringify!($name);
            const EXPECTED: &'static str = concat!("[", ppk_literal_list!($($literal),+), "]");

            fn as_static_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }
        }

        impl_ppk_literal_parsing!($name);
    };
}

/// Binds a key type to the value stored after it, on one line or on the following lines.
macro_rules! ppk_field {
    ($name:ident: $key:ident => $value:ty) => {
        pub struct $name;

        impl PpkKeyValue for $name {
            type Key = $key;
            type Value = $value;
        }
    };
    (multiline $name:ident: $key:ident => $value:ty) => {
        pub struct $name;

        impl PpkMultilineKeyValue for $name {
            type Key = $key;
            type Value = $value;
        }
    };
}

pub(crate) use {impl_ppk_literal_parsing, ppk_const, ppk_enum, ppk_field, ppk_literal_list};
