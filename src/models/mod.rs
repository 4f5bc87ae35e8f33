mod movie;
mod watch;

pub use movie::{CastMember, Genres, MovieDetails, MovieId, MovieSummary, SimilarMovie, Suggestion};
pub use watch::{ProviderGroups, WatchProvider, WatchProviders};
