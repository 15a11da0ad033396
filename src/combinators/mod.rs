//! Validator combinators.
//!
//! Logical composition of validators: [`And`]/[`AndAll`] (conjunction),
//! [`Or`] (disjunction), [`Not`] (negation), and [`WithMessage`] (error
//! message substitution). The fluent forms live on
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod message;
pub mod not;
pub mod or;

pub use and::{And, AndAll, and, and_all};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use or::{Or, or};
