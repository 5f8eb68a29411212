//! Typed search criteria for the catalog and content domains.
//!
//! Criteria values are produced by the criteria builder and never mutated afterwards.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Declares a closed set of wire values with lookup helpers.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Exact, case-sensitive match against the wire value.
            pub fn parse(raw: &str) -> Option<Self> {
                match raw {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn wire_values() -> Vec<&'static str> {
                Self::ALL.iter().map(Self::as_str).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Publication state of a catalog item.
    CatalogStatus {
        Draft => "draft",
        Pending => "pending",
        Private => "private",
        Publish => "publish",
    }
}

wire_enum! {
    CatalogType {
        Simple => "simple",
        Grouped => "grouped",
        External => "external",
        Variable => "variable",
    }
}

wire_enum! {
    StockStatus {
        InStock => "instock",
        OutOfStock => "outofstock",
        OnBackorder => "onbackorder",
    }
}

wire_enum! {
    /// Sort keys accepted by the catalog listing endpoint.
    CatalogOrderBy {
        Date => "date",
        Id => "id",
        Title => "title",
        Slug => "slug",
        Price => "price",
        Popularity => "popularity",
        Rating => "rating",
        MenuOrder => "menu_order",
    }
}

wire_enum! {
    PostStatus {
        Publish => "publish",
        Draft => "draft",
        Private => "private",
        Pending => "pending",
        Trash => "trash",
    }
}

wire_enum! {
    /// Sort keys accepted by the posts endpoint.
    PostOrderBy {
        Date => "date",
        Relevance => "relevance",
        Id => "id",
        Include => "include",
        Title => "title",
        Slug => "slug",
    }
}

wire_enum! {
    SortOrder {
        Asc => "asc",
        Desc => "desc",
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Desc
    }
}

impl Default for CatalogOrderBy {
    fn default() -> Self {
        Self::Date
    }
}

impl Default for PostOrderBy {
    fn default() -> Self {
        Self::Date
    }
}

/// Page position of a listing request.
///
/// `page >= 1` and `1 <= per_page <= MAX_PER_PAGE` hold for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 10;
    pub const MAX_PER_PAGE: u32 = 100;

    /// Zero values are raised to 1; `per_page` above the cap is clamped.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn per_page(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_PER_PAGE)
    }
}

/// Credentials for one catalog request. Never logged; `Debug` redacts the secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchCredentials {
    base_url: String,
    consumer_key: String,
    consumer_secret: String,
}

impl SearchCredentials {
    pub fn new(
        base_url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }
}

impl fmt::Debug for SearchCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchCredentials")
            .field("base_url", &self.base_url)
            .field("consumer_key", &"[REDACTED]")
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

/// Location of a content site. Content search is unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSite {
    base_url: String,
}

impl ContentSite {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Validated catalog search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogCriteria {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub status: Option<CatalogStatus>,
    pub item_type: Option<CatalogType>,
    pub featured: Option<bool>,
    pub on_sale: Option<bool>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub stock_status: Option<StockStatus>,
    pub pagination: Pagination,
    pub order_by: CatalogOrderBy,
    pub order: SortOrder,
}

/// Validated content search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCriteria {
    pub search: Option<String>,
    pub status: Option<PostStatus>,
    pub author: Option<u64>,
    pub categories: Vec<u64>,
    pub tags: Vec<u64>,
    /// ISO-8601 bounds forwarded to the platform as given.
    pub before: Option<String>,
    pub after: Option<String>,
    pub pagination: Pagination,
    pub order_by: PostOrderBy,
    pub order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_clamps() {
        let p = Pagination::new(0, 500);
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), 100);
        assert_eq!(Pagination::new(3, 0).per_page(), 1);
    }

    #[test]
    fn test_pagination_default() {
        let p = Pagination::default();
        assert_eq!((p.page(), p.per_page()), (1, 10));
    }

    #[test]
    fn test_wire_enum_parse_is_case_sensitive() {
        assert_eq!(CatalogOrderBy::parse("menu_order"), Some(CatalogOrderBy::MenuOrder));
        assert_eq!(SortOrder::parse("ASC"), None);
        assert_eq!(PostStatus::parse("trash"), Some(PostStatus::Trash));
        assert_eq!(CatalogStatus::parse("trash"), None);
    }

    #[test]
    fn test_credentials_debug_hides_secrets() {
        let creds = SearchCredentials::new("https://shop.test", "ck_live", "cs_live");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("https://shop.test"));
        assert!(!rendered.contains("ck_live"));
        assert!(!rendered.contains("cs_live"));
    }

    #[test]
    fn test_catalog_defaults() {
        let criteria = CatalogCriteria::default();
        assert_eq!(criteria.order_by, CatalogOrderBy::Date);
        assert_eq!(criteria.order, SortOrder::Desc);
        assert_eq!(criteria.pagination, Pagination::default());
    }
}
