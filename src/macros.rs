//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`] — Create a complete validator (struct + `Validate` impl + factory fn)
//! - [`compose!`] — AND-chain multiple validators
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulecheck::validator;
//! use rulecheck::foundation::{Validate, ValidationError};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotEmpty for str;
//!     rule(input) { !input.is_empty() }
//!     error(input) { ValidationError::new("not_empty", "must not be empty") }
//!     fn not_empty();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     rule(self, input) { input.chars().count() >= self.min }
//!     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]` in the attribute position.
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```rust,ignore
/// let validator = compose![min_length(5), max_length(20)];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
