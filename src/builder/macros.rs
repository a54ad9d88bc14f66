//! Macros for ergonomic state machine construction.

/// Generate a unit-variant enum implementing the `State` trait.
///
/// # Example
///
/// ```
/// use waypoint::state_enum;
/// use waypoint::core::State;
///
/// state_enum! {
///     pub enum Player {
///         Stopped,
///         Playing,
///         Paused,
///     }
/// }
///
/// assert_eq!(Player::Paused.name(), "Paused");
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
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
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
        }
    };
}

/// Generate a context struct, its patch struct and the `Context` impl.
///
/// The patch struct mirrors every field as an `Option`; merging copies the
/// fields that are `Some` and keeps the rest.
///
/// # Example
///
/// ```
/// use waypoint::context_struct;
/// use waypoint::core::Context;
///
/// context_struct! {
///     pub struct Player {
///         pub track: u32,
///         pub volume: u8,
///     }
///     patch: PlayerPatch
/// }
///
/// let mut ctx = Player { track: 1, volume: 5 };
/// ctx.merge(PlayerPatch { volume: Some(9), ..Default::default() });
///
/// assert_eq!(ctx, Player { track: 1, volume: 9 });
/// ```
#[macro_export]
macro_rules! context_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
        patch: $patch:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty
            ),*
        }

        #[derive(Clone, Default, PartialEq, Debug)]
        $vis struct $patch {
            $(pub $field: Option<$ty>),*
        }

        impl $crate::core::Context for $name {
            type Patch = $patch;

            fn merge(&mut self, patch: Self::Patch) {
                $(
                    if let Some(value) = patch.$field {
                        self.$field = value;
                    }
                )*
            }
        }
    };
}
