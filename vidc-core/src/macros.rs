/// Declares a closed HAL enumeration with explicit raw values.
///
/// Raw values come from the control framework as plain integers; the
/// generated `TryFrom<u32>` is the only way to turn one into the typed enum,
/// and it rejects values outside the domain.
macro_rules! hal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u32)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// All members of the domain.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the raw HAL value.
            #[must_use]
            pub const fn raw(self) -> u32 {
                self as u32
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::error::HalValueError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $(v if v == $name::$variant as u32 => Ok($name::$variant),)+
                    _ => Err($crate::error::HalValueError::new(stringify!($name), value)),
                }
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.raw()
            }
        }
    };
}
