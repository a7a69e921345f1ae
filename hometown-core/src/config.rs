/// Page metadata and navbar decorations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub title: String,
    pub description: String,
    /// Logo asset, treated as opaque
    pub logo: String,
    pub logo_alt: String,
    pub search_placeholder: String,
    /// Badge shown on the wishlist icon. Not backed by any state.
    pub wishlist_count: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            title: "My Store".to_string(),
            description: "Furniture shopping site".to_string(),
            logo: "/logoanimatio.gif".to_string(),
            logo_alt: "HomeTown Logo".to_string(),
            search_placeholder: "What are you looking for?".to_string(),
            wishlist_count: 0,
        }
    }
}

impl StorefrontConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
