//! Newtype IDs for type-safe identifiers.
//!
//! The backend hands out numeric ids; wrapping them in newtypes prevents
//! accidentally mixing them up, e.g. passing a ProductId where an OrderId
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs over the backend's numeric ids.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from its numeric value.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the numeric value.
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(OrderId);
define_id!(UserId);
