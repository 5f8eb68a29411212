pub mod catalog;
pub mod config;
pub mod content;
pub mod criteria;
pub mod envelope;
pub mod money;
pub mod search_result;
pub mod timestamp;

pub use catalog::{CatalogItem, DefaultAttribute, Dimensions, ItemAttribute, ItemImage, MetaEntry, TermRef};
pub use config::{Config, LogFormat, LoggingConfig, RotationPolicy, ServerConfig, UpstreamConfig};
pub use content::ContentPost;
pub use criteria::{
    CatalogCriteria, CatalogOrderBy, CatalogStatus, CatalogType, ContentCriteria, ContentSite,
    Pagination, PostOrderBy, PostStatus, SearchCredentials, SortOrder, StockStatus,
};
pub use envelope::{ArgumentMap, ToolCallEnvelope};
pub use money::Money;
pub use search_result::SearchResult;
