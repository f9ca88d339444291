//! The typed catalog surface.
//!
//! [`message_catalog!`](crate::message_catalog) turns an inline
//! declaration of collections and entries into modules of plain
//! functions, so keys and parameter lists are checked by the compiler
//! instead of at render time.

/// Declare a typed message catalog.
///
/// Each `collection` becomes a module; each entry becomes a `pub fn`
/// taking one `&str` per declared parameter and returning a
/// [`LocalizedEntry`](crate::entry::LocalizedEntry). Calling an entry
/// with the wrong key or the wrong parameter set is a compile error,
/// the strongest form of the arity contract.
///
/// Every generated collection module also gets a `verify()` function
/// that parses each template against its declared parameters, so
/// construction defects (unknown or malformed placeholders) are caught
/// by a startup check or a unit test rather than shipped.
///
/// ```
/// use glotto_core::LanguageCode;
///
/// glotto_core::message_catalog! {
///     pub mod messages {
///         collection root {
///             /// Displayed on the first step of the onboarding wizard.
///             fn lets_get_started(topic) {
///                 EnglishBritish => "Let's get started with {topic}.",
///                 Japanese => "さあ、{topic}を始めましょう！",
///             }
///         }
///     }
/// }
///
/// let entry = messages::root::lets_get_started("billing");
/// assert_eq!(
///     entry.get(LanguageCode::EnglishBritish),
///     "Let's get started with billing.",
/// );
/// assert!(messages::root::verify().is_ok());
/// ```
#[macro_export]
macro_rules! message_catalog {
    (
        $(#[$mod_attr:meta])*
        $vis:vis mod $catalog:ident {
            $(
                $(#[$coll_attr:meta])*
                collection $collection:ident {
                    $(
                        $(#[$entry_attr:meta])*
                        fn $entry:ident ( $($param:ident),* $(,)? ) {
                            $( $language:ident => $template:literal ),+ $(,)?
                        }
                    )*
                }
            )*
        }
    ) => {
        $(#[$mod_attr])*
        $vis mod $catalog {
            $(
                $(#[$coll_attr])*
                pub mod $collection {
                    $(
                        $(#[$entry_attr])*
                        pub fn $entry( $($param: &str),* ) -> $crate::entry::LocalizedEntry {
                            let args: &[(&str, &str)] =
                                &[ $( (stringify!($param), $param) ),* ];
                            $crate::entry::LocalizedEntry::new()
                                $(
                                    .with(
                                        $crate::locale::LanguageCode::$language,
                                        $crate::template::substitute($template, args),
                                    )
                                )+
                        }
                    )*

                    /// Parse every template in this collection against
                    /// its declared parameters.
                    ///
                    /// Surfaces construction defects (unknown, unclosed,
                    /// or empty placeholders) before any string is
                    /// served.
                    pub fn verify() -> ::std::result::Result<(), $crate::catalog::CatalogError> {
                        $(
                            $crate::accessor::EntryAccessor::builder(stringify!($entry))
                                $( .param(stringify!($param)) )*
                                $(
                                    .text(
                                        $crate::locale::LanguageCode::$language,
                                        $template,
                                        "",
                                    )
                                )+
                                .build()?;
                        )*
                        ::std::result::Result::Ok(())
                    }
                }
            )*
        }
    };
}
