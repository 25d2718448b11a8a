// src/macros.rs

/// Wires a fieldless enum to its canonical tokens.
///
/// Generates `Classification`, `Display`, `FromStr`, `TryFrom<&str>`,
/// `TryFrom<String>`, `From<T> for &'static str`, and string-only serde impls.
macro_rules! impl_classification {
    ($name:ident, $field:expr, { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $crate::classification::Classification for $name {
            const FIELD: &'static str = $field;
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn as_token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl $name {
            /// The canonical wire token of this member.
            pub fn as_str(&self) -> &'static str {
                $crate::classification::Classification::as_token(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ClassificationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::classification::Classification>::from_token(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::error::ClassificationError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                <$name as $crate::classification::Classification>::from_token(s)
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $crate::error::ClassificationError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                <$name as $crate::classification::Classification>::from_token(&s)
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::classification::Classification>::from_token(&raw)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
