//! Return types: the `entity` parameter, i.e. which kind of result record the
//! remote service emits. The default of each category is the track-level
//! entity of its media kind.

parameter_enum! {
    /// Result entities for movie searches.
    MovieReturnType {
        MovieArtist => "movieArtist",
        Movie => "movie",
    }
    default Movie
}

parameter_enum! {
    /// Result entities for podcast searches.
    PodcastReturnType {
        PodcastAuthor => "podcastAuthor",
        Podcast => "podcast",
    }
    default Podcast
}

parameter_enum! {
    /// Result entities for music searches.
    MusicReturnType {
        MusicArtist => "musicArtist",
        MusicTrack => "musicTrack",
        Album => "album",
        MusicVideo => "musicVideo",
        Mix => "mix",
        Song => "song",
    }
    default MusicTrack
}

parameter_enum! {
    /// Result entities for music video searches.
    MusicVideoReturnType {
        MusicArtist => "musicArtist",
        MusicVideo => "musicVideo",
    }
    default MusicVideo
}

parameter_enum! {
    /// Result entities for audiobook searches.
    AudiobookReturnType {
        AudiobookAuthor => "audiobookAuthor",
        Audiobook => "audiobook",
    }
    default Audiobook
}

parameter_enum! {
    /// Result entities for short film searches.
    ShortFilmReturnType {
        ShortFilmArtist => "shortFilmArtist",
        ShortFilm => "shortFilm",
    }
    default ShortFilm
}

parameter_enum! {
    /// Result entities for TV show searches.
    TvShowReturnType {
        TvEpisode => "tvEpisode",
        TvSeason => "tvSeason",
    }
    default TvEpisode
}

parameter_enum! {
    /// Result entities for software searches.
    SoftwareReturnType {
        /// iPhone software
        Software => "software",
        IpadSoftware => "iPadSoftware",
        MacSoftware => "macSoftware",
    }
    default Software
}

parameter_enum! {
    /// Result entities for e-book searches.
    EBookReturnType {
        EBook => "ebook",
    }
    default EBook
}

parameter_enum! {
    /// Result entities for searches across every media kind.
    AllReturnType {
        Movie => "movie",
        Album => "album",
        AllArtist => "allArtist",
        Podcast => "podcast",
        MusicVideo => "musicVideo",
        Mix => "mix",
        Audiobook => "audiobook",
        TvSeason => "tvSeason",
        AllTrack => "allTrack",
    }
    default AllTrack
}
