use serde::{Deserialize, Serialize};

/// A single startup record as returned by the listing API.
///
/// `name` is the identity used for favorites lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupEntry {
    pub name: String,
    pub category: String,
    pub votes: u64,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub product_url: String,
}

impl StartupEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>, votes: u64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            votes,
            tagline: String::new(),
            logo_url: String::new(),
            product_url: String::new(),
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = url.into();
        self
    }

    pub fn with_product_url(mut self, url: impl Into<String>) -> Self {
        self.product_url = url.into();
        self
    }
}
