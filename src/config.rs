use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the remote recommender service
    #[serde(default = "default_recommender_url")]
    pub recommender_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Region used for watch-provider lookups
    #[serde(default = "default_region")]
    pub region: String,

    /// How many personalized suggestions to request per refetch
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: u32,

    /// How many similar movies to request for a search's first match
    #[serde(default = "default_similar_count")]
    pub similar_count: u32,

    /// Maximum number of search matches surfaced to the caller
    #[serde(default = "default_search_result_limit")]
    pub search_result_limit: usize,

    /// Languages whose trending rails are fetched on the home view
    #[serde(default = "default_trending_languages")]
    pub trending_languages: Vec<String>,

    /// File holding the signed-in username between restarts
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

fn default_recommender_url() -> String {
    "https://tyson1106-movie-recommender.hf.space".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_region() -> String {
    "IN".to_string()
}

fn default_suggestion_count() -> u32 {
    18
}

fn default_similar_count() -> u32 {
    8
}

fn default_search_result_limit() -> usize {
    5
}

fn default_trending_languages() -> Vec<String> {
    vec!["en".to_string(), "hi".to_string()]
}

fn default_session_file() -> String {
    ".curate_session".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
