//! Error categories
//!
//! An [`ErrorType`] names the category of a failure and carries the default
//! message used when an [`Error`](crate::Error) is built without one. The set
//! of categories is open: the nine built-in kinds live on [`ErrorType`] and in
//! the [`BuiltIn`] set, and consumers declare their own sets with
//! [`error_type_set!`](crate::error_type_set).
//!
//! ```rust
//! use railway_core::{error_type_set, ErrorType, ErrorTypeSet};
//!
//! error_type_set! {
//!     /// Billing specific failures
//!     pub struct BillingErrors {
//!         PAYMENT_DECLINED => ("PaymentDeclined", "The payment was declined."),
//!         CARD_EXPIRED => ("CardExpired", "The card has expired."),
//!     }
//! }
//!
//! assert_eq!(BillingErrors::VARIANTS.len(), 2);
//! assert_eq!(BillingErrors::PAYMENT_DECLINED.name(), "PaymentDeclined");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies the category of an error.
///
/// Equality, ordering and hashing only consider the name, so two values
/// declared in different sets with the same name are the same type.
#[derive(Debug, Clone, Copy)]
pub struct ErrorType {
    name: &'static str,
    message: &'static str,
}

impl ErrorType {
    pub const FAILURE: ErrorType = ErrorType::new("Failure", "An error has occurred.");
    pub const VALIDATION: ErrorType =
        ErrorType::new("Validation", "A validation error has occurred.");
    pub const CONFLICT: ErrorType = ErrorType::new("Conflict", "A conflict error has occurred.");
    pub const NOT_FOUND: ErrorType = ErrorType::new("NotFound", "A not found error has occurred.");
    pub const UNAUTHORIZED: ErrorType =
        ErrorType::new("Unauthorized", "An unauthorized error has occurred.");
    pub const FORBIDDEN: ErrorType =
        ErrorType::new("Forbidden", "A forbidden error has occurred.");
    pub const UNAVAILABLE: ErrorType =
        ErrorType::new("Unavailable", "An unavailable error has occurred.");
    pub const LOCKED: ErrorType = ErrorType::new("Locked", "A locked error has occurred.");
    pub const UNEXPECTED: ErrorType =
        ErrorType::new("Unexpected", "An unexpected error has occurred.");

    /// Declare an error type. Usually called from a `const` item.
    pub const fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }

    /// Unique name of the error type
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Default message used by errors of this type
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Whether both values carry exactly the same name and default message
    pub(crate) fn is_identical(&self, other: &ErrorType) -> bool {
        self.name == other.name && self.message == other.message
    }
}

impl PartialEq for ErrorType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ErrorType {}

impl Hash for ErrorType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for ErrorType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ErrorType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for ErrorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for ErrorType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        crate::registry::lookup(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown error type '{}'", name)))
    }
}

/// A statically declared, ordered group of error types.
///
/// Implemented by [`BuiltIn`] and by every set declared with
/// [`error_type_set!`](crate::error_type_set).
pub trait ErrorTypeSet: 'static {
    /// Name of the set, used in log output
    const NAME: &'static str;
    /// Variants in declaration order
    const VARIANTS: &'static [ErrorType];
}

/// The nine error types every consumer can rely on.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltIn;

impl ErrorTypeSet for BuiltIn {
    const NAME: &'static str = "BuiltIn";
    const VARIANTS: &'static [ErrorType] = &[
        ErrorType::FAILURE,
        ErrorType::VALIDATION,
        ErrorType::CONFLICT,
        ErrorType::NOT_FOUND,
        ErrorType::UNAUTHORIZED,
        ErrorType::FORBIDDEN,
        ErrorType::UNAVAILABLE,
        ErrorType::LOCKED,
        ErrorType::UNEXPECTED,
    ];
}

/// List every variant of the set `K`, in declaration order.
pub fn list<K: ErrorTypeSet>() -> &'static [ErrorType] {
    K::VARIANTS
}

/// Declare a set of error types.
///
/// Generates a unit struct with one associated constant per variant and an
/// [`ErrorTypeSet`] implementation listing them in declaration order. The set
/// still has to be passed to [`registry::register`](crate::registry::register)
/// before its names can be resolved during deserialization.
#[macro_export]
macro_rules! error_type_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $set:ident {
            $(
                $(#[$variant_meta:meta])*
                $konst:ident => ($name:expr, $message:expr)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $set;

        impl $set {
            $(
                $(#[$variant_meta])*
                pub const $konst: $crate::ErrorType = $crate::ErrorType::new($name, $message);
            )*
        }

        impl $crate::ErrorTypeSet for $set {
            const NAME: &'static str = stringify!($set);
            const VARIANTS: &'static [$crate::ErrorType] = &[$($set::$konst),*];
        }
    };
}
