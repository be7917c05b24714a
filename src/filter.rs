//! Year-range and genre filtering for catalog listings

use std::collections::BTreeSet;

use crate::data::Movie;

/// Criteria a movie must satisfy to appear in the listing
///
/// Each bound is optional; an empty filter lets every movie through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Keep only movies released strictly before this year
    pub before_year: Option<i32>,
    /// Keep only movies released strictly after this year
    pub after_year: Option<i32>,
    /// Keep only movies tagged with at least one of these genres
    pub genres: Option<BTreeSet<String>>,
}

impl MovieFilter {
    /// Returns true if `movie` passes every configured bound
    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(before) = self.before_year {
            if movie.release_year >= before {
                return false;
            }
        }

        if let Some(after) = self.after_year {
            if movie.release_year <= after {
                return false;
            }
        }

        if let Some(ref wanted) = self.genres {
            if !movie.genres().iter().any(|genre| wanted.contains(genre)) {
                return false;
            }
        }

        true
    }

    /// Iterates over the movies that pass the filter, preserving order
    pub fn apply<'a>(&'a self, movies: &'a [Movie]) -> impl Iterator<Item = &'a Movie> + 'a {
        movies.iter().filter(move |movie| self.matches(movie))
    }
}
