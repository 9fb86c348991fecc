//! Search attributes: which metadata field the search term is matched against.
//!
//! The `All` variant of every enumeration maps to an empty query value, which
//! the remote service reads as "match any field".

parameter_enum! {
    /// Attributes for movie searches.
    MovieAttribute {
        All => "",
        Actor => "actorTerm",
        Genre => "genreIndex",
        Artist => "artistTerm",
        ShortFilm => "shortFilmTerm",
        Producer => "producerTerm",
        Rating => "ratingTerm",
        Director => "directorTerm",
        ReleaseYear => "releaseYearTerm",
        FeatureFilm => "featureFilmTerm",
        MovieArtist => "movieArtistTerm",
        Movie => "movieTerm",
        RatingIndex => "ratingIndex",
        Description => "descriptionTerm",
    }
    default All
}

parameter_enum! {
    /// Attributes for podcast searches.
    PodcastAttribute {
        All => "",
        Title => "titleTerm",
        Genre => "genreIndex",
        Author => "authorTerm",
        Artist => "artistTerm",
        Rating => "ratingIndex",
        Language => "languageTerm",
        Keywords => "keywordsTerm",
        Description => "descriptionTerm",
    }
    default All
}

parameter_enum! {
    /// Attributes for music searches.
    MusicAttribute {
        All => "",
        Mix => "mixTerm",
        Genre => "genreIndex",
        Artist => "artistTerm",
        Composer => "composerTerm",
        Album => "albumTerm",
        Rating => "ratingIndex",
        Song => "songTerm",
    }
    default All
}

parameter_enum! {
    /// Attributes for music video searches.
    MusicVideoAttribute {
        All => "",
        Genre => "genreIndex",
        Artist => "artistTerm",
        Album => "albumTerm",
        Rating => "ratingIndex",
        Song => "songTerm",
    }
    default All
}

parameter_enum! {
    /// Attributes for audiobook searches.
    AudiobookAttribute {
        All => "",
        Title => "titleTerm",
        Author => "authorTerm",
        Genre => "genreIndex",
        Rating => "ratingIndex",
    }
    default All
}

parameter_enum! {
    /// Attributes for short film searches.
    ShortFilmAttribute {
        All => "",
        Genre => "genreIndex",
        Artist => "artistTerm",
        ShortFilm => "shortFilmTerm",
        Rating => "ratingIndex",
        Description => "descriptionTerm",
    }
    default All
}

parameter_enum! {
    /// Attributes for TV show searches.
    TvShowAttribute {
        All => "",
        Genre => "genreIndex",
        Episode => "tvEpisodeTerm",
        Show => "showTerm",
        Season => "tvSeasonTerm",
        Rating => "ratingIndex",
        Description => "descriptionTerm",
    }
    default All
}

parameter_enum! {
    /// Attributes for software searches.
    SoftwareAttribute {
        All => "",
        Developer => "softwareDeveloper",
    }
    default All
}

parameter_enum! {
    /// Attributes for e-book searches.
    EBookAttribute {
        All => "",
        Title => "titleTerm",
        Author => "authorTerm",
        Genre => "genreIndex",
        Rating => "ratingIndex",
        Description => "descriptionTerm",
    }
    default All
}

parameter_enum! {
    /// Attributes for searches across every media kind.
    AllAttribute {
        All => "",
        Actor => "actorTerm",
        Language => "languageTerm",
        AllArtist => "allArtistTerm",
        TvEpisode => "tvEpisodeTerm",
        ShortFilm => "shortFilmTerm",
        Director => "directorTerm",
        ReleaseYear => "releaseYearTerm",
        Title => "titleTerm",
        FeatureFilm => "featureFilmTerm",
        RatingIndex => "ratingIndex",
        Keywords => "keywordsTerm",
        Description => "descriptionTerm",
        Author => "authorTerm",
        Genre => "genreIndex",
        Mix => "mixTerm",
        AllTrack => "allTrackTerm",
        Artist => "artistTerm",
        Composer => "composerTerm",
        TvSeason => "tvSeasonTerm",
        Producer => "producerTerm",
        Rating => "ratingTerm",
        Song => "songTerm",
        MovieArtist => "movieArtistTerm",
        Show => "showTerm",
        Movie => "movieTerm",
        Album => "albumTerm",
    }
    default All
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ParameterValue;

    #[test]
    fn test_all_attribute_is_empty_and_default() {
        assert_eq!(PodcastAttribute::default(), PodcastAttribute::All);
        assert_eq!(PodcastAttribute::All.parameter_value(), "");
        assert_eq!(SoftwareAttribute::default().parameter_value(), "");
        assert_eq!(AllAttribute::default().parameter_value(), "");
    }

    #[test]
    fn test_podcast_attribute_values() {
        assert_eq!(PodcastAttribute::Title.parameter_value(), "titleTerm");
        assert_eq!(PodcastAttribute::Rating.parameter_value(), "ratingIndex");
        assert_eq!(PodcastAttribute::Keywords.to_string(), "keywordsTerm");
    }

    #[test]
    fn test_only_all_variant_is_empty() {
        let non_empty = TvShowAttribute::VARIANTS
            .iter()
            .filter(|a| **a != TvShowAttribute::All)
            .all(|a| !a.parameter_value().is_empty());
        assert!(non_empty);
    }
}
