//! Enumerated value support

/// Declare a fieldless enum that can be stored in an INI document.
///
/// Variants render as their declared name and parse case-insensitively.
///
/// ```rust
/// inipp::ini_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
///     pub enum Diet {
///         #[default]
///         Omnivore,
///         Carnivore,
///     }
/// }
///
/// use inipp::IniValue;
/// assert_eq!(Diet::from_ini_text("CARNIVORE"), Some(Diet::Carnivore));
/// assert_eq!(Diet::Omnivore.to_ini_text(), "Omnivore");
/// ```
#[macro_export]
macro_rules! ini_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::codec::IniValue for $name {
            fn to_ini_text(&self) -> String {
                match self {
                    $($name::$variant => stringify!($variant).to_string()),+
                }
            }

            fn from_ini_text(text: &str) -> Option<Self> {
                let text = text.trim();
                $(
                    if text.eq_ignore_ascii_case(stringify!($variant)) {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }
    };
}
