use serde::{Deserialize, Serialize};

/// Movie identifier as assigned by TMDB
pub type MovieId = u64;

/// Compact movie projection used by trending rails and favourites.
///
/// Field names mirror the recommender's wire format exactly. These are
/// read-only: nothing in this crate ever mutates a movie record locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    #[serde(rename = "ID")]
    pub id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Vote Average", default)]
    pub vote_average: Option<f64>,
    #[serde(rename = "Release Date", default)]
    pub release_date: Option<String>,
    #[serde(rename = "Overview", default)]
    pub overview: Option<String>,
}

/// Genres arrive either as a single comma-joined string or as an array,
/// depending on the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Genres {
    Joined(String),
    List(Vec<String>),
}

impl Genres {
    /// Render as a single comma-separated string
    pub fn joined(&self) -> String {
        match self {
            Genres::Joined(s) => s.clone(),
            Genres::List(items) => items.join(", "),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Full movie record for the detail view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    #[serde(rename = "ID")]
    pub id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Genres", default)]
    pub genres: Option<Genres>,
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    #[serde(rename = "Overview", default)]
    pub overview: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<u32>,
    #[serde(rename = "Vote Average", default)]
    pub vote_average: Option<f64>,
    #[serde(rename = "Release Date", default)]
    pub release_date: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Backdrop", default)]
    pub backdrop: Option<String>,
    #[serde(rename = "Cast", default)]
    pub cast: Option<Vec<CastMember>>,
    #[serde(rename = "Trailer", default)]
    pub trailer: Option<String>,
    #[serde(rename = "Homepage", default)]
    pub homepage: Option<String>,
    #[serde(rename = "Similar Movies", default)]
    pub similar: Option<Vec<MovieSummary>>,
    #[serde(rename = "Production Companies", default)]
    pub production_companies: Option<Vec<String>>,
}

/// Personalized recommendation keyed to a user identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    #[serde(rename = "ID")]
    pub id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Vote Average", default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub similarity: Option<f64>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Overview", default)]
    pub overview: Option<String>,
    #[serde(rename = "Suggested Because", default)]
    pub suggested_because: Option<String>,
}

/// Entry of a similar-movies lookup, always scored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarMovie {
    #[serde(rename = "ID")]
    pub id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Vote Average", default)]
    pub vote_average: Option<f64>,
    pub similarity: f64,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl SimilarMovie {
    /// Similarity as a whole percentage, clamped to [0, 100]
    pub fn match_percent(&self) -> u8 {
        (self.similarity.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}
