//! Movies and theaters that can be booked

/// Movies currently showing
pub const DEFAULT_MOVIES: &[&str] = &[
    "Thor: Love and Thunder",
    "Black Panther 2",
    "Captain Marvel 2",
    "Doctor Strange in the Multiverse of Madness",
];

/// Theaters we sell tickets for
pub const DEFAULT_THEATERS: &[&str] = &[
    "AMC Highwoods 20",
    "Studio Movie Grill",
    "AMC Veterans 24",
    "Cobb Grove 16",
];

/// Reference set the validator checks movie and theater slots against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<String>,
    theaters: Vec<String>,
}

impl Catalog {
    pub fn new(movies: Vec<String>, theaters: Vec<String>) -> Self {
        Self { movies, theaters }
    }

    pub fn movies(&self) -> &[String] {
        &self.movies
    }

    pub fn theaters(&self) -> &[String] {
        &self.theaters
    }

    pub fn has_movie(&self, query: &str) -> bool {
        self.movies.iter().any(|movie| matches_entry(query, movie))
    }

    pub fn has_theater(&self, query: &str) -> bool {
        self.theaters.iter().any(|theater| matches_entry(query, theater))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_MOVIES.iter().map(ToString::to_string).collect(),
            DEFAULT_THEATERS.iter().map(ToString::to_string).collect(),
        )
    }
}

/// Matching policy for user-supplied names: the value must appear somewhere
/// in the catalog entry, ignoring case. "thor" matches "Thor: Love and Thunder".
fn matches_entry(query: &str, entry: &str) -> bool {
    entry.to_lowercase().contains(&query.to_lowercase())
}
