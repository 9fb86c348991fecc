//! Closed enumerations of the literal query values the iTunes Search API accepts.
//!
//! Every enumeration maps a human concept ("search by title", "return podcast
//! authors") to the exact string the remote service expects in the query, and
//! names one variant as its default.

/// Declares a parameter enumeration together with its query value mapping.
///
/// Each generated type implements [`ParameterValue`], `Default` (the variant
/// named after `default`) and `Display` (the query value).
macro_rules! parameter_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
        }

        impl $crate::entities::ParameterValue for $name {
            fn parameter_value(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::entities::ParameterValue::parameter_value(self))
            }
        }
    };
}

mod attributes;
mod return_types;

pub use attributes::{
    AllAttribute, AudiobookAttribute, EBookAttribute, MovieAttribute, MusicAttribute,
    MusicVideoAttribute, PodcastAttribute, ShortFilmAttribute, SoftwareAttribute,
    TvShowAttribute,
};
pub use return_types::{
    AllReturnType, AudiobookReturnType, EBookReturnType, MovieReturnType, MusicReturnType,
    MusicVideoReturnType, PodcastReturnType, ShortFilmReturnType, SoftwareReturnType,
    TvShowReturnType,
};

/// A value that is sent verbatim as a query parameter to the iTunes API.
pub trait ParameterValue {
    /// The literal value placed in the request query.
    fn parameter_value(&self) -> &'static str;
}

parameter_enum! {
    /// The `media` parameter: which content kind a search covers.
    Media {
        Movie => "movie",
        Podcast => "podcast",
        Music => "music",
        MusicVideo => "musicVideo",
        Audiobook => "audiobook",
        ShortFilm => "shortFilm",
        TvShow => "tvShow",
        Software => "software",
        EBook => "ebook",
        /// Every media kind at once
        All => "all",
    }
    default All
}

parameter_enum! {
    /// The language search results are returned in.
    ///
    /// The remote service only localizes results into English and Japanese.
    ReturnLanguage {
        English => "en",
        Japanese => "ja",
    }
    default English
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_values() {
        assert_eq!(Media::MusicVideo.parameter_value(), "musicVideo");
        assert_eq!(Media::TvShow.parameter_value(), "tvShow");
        assert_eq!(Media::EBook.parameter_value(), "ebook");
        assert_eq!(Media::default(), Media::All);
    }

    #[test]
    fn test_return_language_codes() {
        assert_eq!(ReturnLanguage::default(), ReturnLanguage::English);
        assert_eq!(ReturnLanguage::English.to_string(), "en");
        assert_eq!(ReturnLanguage::Japanese.to_string(), "ja");
    }

    #[test]
    fn test_variants_lists_every_media_kind() {
        assert_eq!(Media::VARIANTS.len(), 10);
        assert_eq!(Media::VARIANTS.first(), Some(&Media::Movie));
        assert_eq!(Media::VARIANTS.last(), Some(&Media::All));
    }
}
