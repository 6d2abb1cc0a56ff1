//! Macros for ergonomic state declaration.

/// Generate a `State` implementation for a simple enum from its handler
/// transition tables.
///
/// Variants listed under `handle1:`/`handle2:` request a transition to the
/// named target; every other variant stays put. The variant identifier is
/// used verbatim as the state's display name.
///
/// # Example
///
/// ```
/// use demeanor::state_enum;
/// use demeanor::core::{Outcome, State};
///
/// state_enum! {
///     pub enum Light {
///         Off,
///         On,
///     }
///     handle1: [Off => On]
///     handle2: [On => Off]
/// }
///
/// assert_eq!(Light::Off.name(), "Off");
/// assert_eq!(Light::Off.handle1(), Outcome::Transition(Light::On));
/// assert_eq!(Light::Off.handle2(), Outcome::Stay);
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

        $(handle1: [$($h1_from:ident => $h1_to:ident),* $(,)?])?
        $(handle2: [$($h2_from:ident => $h2_to:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
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

            fn handle1(&self) -> $crate::core::Outcome<Self> {
                match self {
                    $($(Self::$h1_from => $crate::core::Outcome::Transition(Self::$h1_to),)*)?
                    _ => $crate::core::Outcome::Stay,
                }
            }

            fn handle2(&self) -> $crate::core::Outcome<Self> {
                match self {
                    $($(Self::$h2_from => $crate::core::Outcome::Transition(Self::$h2_to),)*)?
                    _ => $crate::core::Outcome::Stay,
                }
            }
        }
    };
}
