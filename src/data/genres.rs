//! Static genre vocabulary used by the TCM catalog
//!
//! The set is closed: `--genres` only accepts these exact, case-sensitive tags.

/// Every genre tag the TCM catalog uses
pub static TCM_GENRES: [&str; 42] = [
    "Romance",
    "Silent",
    "Short",
    "Western",
    "Spy",
    "Horror",
    "Prison",
    "Erotic",
    "Political",
    "Action",
    "Sports",
    "Nature",
    "Musical",
    "Dance",
    "Thriller",
    "Biography",
    "Interview",
    "Crime",
    "Family",
    "Documentary",
    "Children",
    "Teens",
    "Animation",
    "Drama",
    "Martial Arts",
    "Romantic Comedy",
    "Comedy",
    "Educational",
    "Film Noir",
    "Satire",
    "Adaptation",
    "Foreign",
    "Period",
    "Horror/Science-Fiction",
    "Adventure",
    "Suspense/Mystery",
    "Historical",
    "War",
    "Fantasy",
    "Disaster",
    "Classic Hollywood",
    "Music",
];

/// Returns true if `genre` is part of the vocabulary
pub fn is_tcm_genre(genre: &str) -> bool {
    TCM_GENRES.contains(&genre)
}

/// Returns the vocabulary in lexicographic order
pub fn sorted_genres() -> Vec<&'static str> {
    let mut genres = TCM_GENRES.to_vec();
    genres.sort_unstable();
    genres
}
