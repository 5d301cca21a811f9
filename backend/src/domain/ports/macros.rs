//! Helper macro for generating domain port error enums.
//!
//! Each variant carries named fields, a `thiserror` message, and a
//! snake_case constructor whose parameters accept `impl Into<FieldType>`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build [`" $name "::" $variant "`]."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
