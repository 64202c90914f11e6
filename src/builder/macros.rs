//! Macros for ergonomic machine declaration.

/// Generate a `State` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use mailsift::state_enum;
///
/// state_enum! {
///     pub enum ParseState {
///         Start,
///         Body,
///         Garbage,
///     }
///     dead: [Garbage]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(dead: [$($dead:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_dead(&self) -> bool {
                match self {
                    $($(Self::$dead => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate a `Symbol` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use mailsift::symbol_enum;
///
/// symbol_enum! {
///     pub enum Token {
///         Letter,
///         Separator,
///     }
/// }
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Symbol for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Write a transition table as a literal list of rules.
///
/// Expands to a `Vec<TransitionRule>` suitable for
/// [`FsmBuilder::rules`](crate::builder::FsmBuilder::rules).
///
/// # Example
///
/// ```
/// use mailsift::{state_enum, symbol_enum, transition_table};
///
/// state_enum! {
///     pub enum S {
///         A,
///         B,
///     }
/// }
///
/// symbol_enum! {
///     pub enum In {
///         Go,
///         Back,
///     }
/// }
///
/// let table = transition_table! {
///     (S::A, In::Go) => S::B,
///     (S::B, In::Back) => S::A,
/// };
/// assert_eq!(table.len(), 2);
/// ```
#[macro_export]
macro_rules! transition_table {
    ($(($from:expr, $on:expr) => $to:expr),* $(,)?) => {
        vec![
            $($crate::builder::TransitionRule::new($from, $on, $to)),*
        ]
    };
}
