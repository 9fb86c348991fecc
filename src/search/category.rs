//! Media category descriptors.
//!
//! Each category is a zero-sized marker type that fixes the `media` constant
//! and the attribute and return-type enumerations a [`Search`](super::Search)
//! may use.

use crate::entities::{
    AllAttribute, AllReturnType, AudiobookAttribute, AudiobookReturnType, EBookAttribute,
    EBookReturnType, Media, MovieAttribute, MovieReturnType, MusicAttribute, MusicReturnType,
    MusicVideoAttribute, MusicVideoReturnType, ParameterValue, PodcastAttribute,
    PodcastReturnType, ShortFilmAttribute, ShortFilmReturnType, SoftwareAttribute,
    SoftwareReturnType, TvShowAttribute, TvShowReturnType,
};
use std::fmt::Debug;

/// Describes one media category of the iTunes Search API.
pub trait MediaCategory: Debug + Clone + Copy + Default + PartialEq {
    /// The legal values of the `attribute` parameter
    type Attribute: ParameterValue + Debug + Clone + Copy + Default + PartialEq;

    /// The legal values of the `entity` parameter
    type ReturnType: ParameterValue + Debug + Clone + Copy + Default + PartialEq;

    /// The fixed `media` parameter for this category
    const MEDIA: Media;
}

macro_rules! media_category {
    ($(#[$meta:meta])* $name:ident, $media:ident, $attribute:ty, $return_type:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl MediaCategory for $name {
            type Attribute = $attribute;
            type ReturnType = $return_type;
            const MEDIA: Media = Media::$media;
        }
    };
}

media_category!(
    /// Feature films
    Movie, Movie, MovieAttribute, MovieReturnType
);
media_category!(
    /// Podcasts
    Podcast, Podcast, PodcastAttribute, PodcastReturnType
);
media_category!(
    /// Songs, albums and artists
    Music, Music, MusicAttribute, MusicReturnType
);
media_category!(
    /// Music videos
    MusicVideo, MusicVideo, MusicVideoAttribute, MusicVideoReturnType
);
media_category!(
    /// Audiobooks
    Audiobook, Audiobook, AudiobookAttribute, AudiobookReturnType
);
media_category!(
    /// Short films
    ShortFilm, ShortFilm, ShortFilmAttribute, ShortFilmReturnType
);
media_category!(
    /// TV episodes and seasons
    TvShow, TvShow, TvShowAttribute, TvShowReturnType
);
media_category!(
    /// iOS and macOS applications
    Software, Software, SoftwareAttribute, SoftwareReturnType
);
media_category!(
    /// E-books
    EBook, EBook, EBookAttribute, EBookReturnType
);
media_category!(
    /// Every media kind at once
    All, All, AllAttribute, AllReturnType
);
