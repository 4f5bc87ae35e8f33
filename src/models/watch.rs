use serde::{Deserialize, Serialize};

/// A single streaming/rental/purchase service offering a movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchProvider {
    pub provider_id: u64,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub display_priority: Option<u32>,
}

/// Providers grouped by how the movie is offered in the region
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderGroups {
    #[serde(default)]
    pub flatrate: Vec<WatchProvider>,
    #[serde(default)]
    pub rent: Vec<WatchProvider>,
    #[serde(default)]
    pub buy: Vec<WatchProvider>,
    #[serde(default)]
    pub link: Option<String>,
}

impl ProviderGroups {
    /// True when no service offers the movie in any form
    pub fn is_empty(&self) -> bool {
        self.flatrate.is_empty() && self.rent.is_empty() && self.buy.is_empty()
    }
}

/// Watch-provider lookup result for one movie and region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchProviders {
    pub region: String,
    pub providers: ProviderGroups,
}
