/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Validation shared by module and target names.

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("{kind} name must be non-empty")]
    Empty { kind: &'static str },
    #[error(
        "Invalid character `{ch}` in {kind} name `{name}`, \
        only ASCII alphanumerics, `_`, `-` and `.` are allowed"
    )]
    InvalidCharacter {
        kind: &'static str,
        name: String,
        ch: char,
    },
}

fn is_valid_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

pub(crate) fn validate_name(kind: &'static str, name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty { kind });
    }
    if let Some(ch) = name.chars().find(|c| !is_valid_name_char(*c)) {
        return Err(NameError::InvalidCharacter {
            kind,
            name: name.to_owned(),
            ch,
        });
    }
    Ok(())
}

/// Defines an interned-by-`Arc` name newtype with validation, `Borrow<str>`
/// and string serde.
macro_rules! define_name {
    ($(#[$attr:meta])* $name:ident, $kind:literal) => {
        $(#[$attr])*
        #[derive(
            Clone,
            dupe::Dupe,
            Debug,
            derive_more::Display,
            Hash,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            allocative::Allocative
        )]
        pub struct $name(std::sync::Arc<str>);

        impl $name {
            pub fn new(name: &str) -> Result<$name, $crate::name::NameError> {
                $crate::name::validate_name($kind, name)?;
                Ok($name(std::sync::Arc::from(name)))
            }

            pub fn testing_new(name: &str) -> $name {
                $name::new(name).unwrap()
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::name::NameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::new(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $name::new(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_name;
