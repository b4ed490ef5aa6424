use std::fmt;

/// The two datasets the page loads at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Airports,
    Flights,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Airports => write!(f, "Airports"),
            Resource::Flights => write!(f, "Flights"),
        }
    }
}

/// Fatal: a dataset could not be fetched or decoded
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to load {} data", resource_noun(.resource))]
    Fetch { resource: Resource, reason: String },
    #[error("{resource} data is empty or invalid")]
    EmptyPayload { resource: Resource },
    #[error("{resource} data is malformed: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn resource(&self) -> Resource {
        match self {
            LoadError::Fetch { resource, .. }
            | LoadError::EmptyPayload { resource }
            | LoadError::Decode { resource, .. } => *resource,
        }
    }
}

fn resource_noun(resource: &Resource) -> &'static str {
    match resource {
        Resource::Airports => "airports",
        Resource::Flights => "flights",
    }
}

/// Raised inside a search; the controller logs it and shows no results
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Flights data not available while searching")]
    DataNotLoaded,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
