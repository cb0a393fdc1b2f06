//! Macros for declaring discrete states.

/// Declare a discrete state enum and implement [`State`](crate::core::State) for it.
///
/// Variants must be unit variants. Exactly one must carry `#[default]`; it
/// is the value a fresh container reports as its previous state.
///
/// # Example
///
/// ```
/// use flagstate::state_enum;
/// use flagstate::core::State;
///
/// state_enum! {
///     pub enum Posture {
///         #[default]
///         Standing,
///         Crouching,
///         Prone,
///     }
/// }
///
/// assert_eq!(Posture::Crouching.name(), "Crouching");
/// assert_eq!(Posture::default(), Posture::Standing);
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Serialize, serde::Deserialize)]
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

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            #[default]
            Unassigned,
            Idle,
            Alert,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Unassigned.name(), "Unassigned");
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Alert.name(), "Alert");
    }

    #[test]
    fn state_enum_marks_default_variant() {
        assert_eq!(TestState::default(), TestState::Unassigned);
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            /// Documented states keep their attributes.
            pub enum PublicState {
                A,
                #[default]
                B,
            }
        }

        assert_eq!(PublicState::default(), PublicState::B);
    }

    #[test]
    fn state_enum_serializes_by_name() {
        let json = serde_json::to_string(&TestState::Alert).unwrap();
        assert_eq!(json, "\"Alert\"");
    }
}
