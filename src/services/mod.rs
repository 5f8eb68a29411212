pub mod criteria_builder;
pub mod result_assembler;
pub mod search_service;
pub mod tool_dispatcher;

pub use criteria_builder::{
    ArgValue, BuiltCriteria, CatalogSearchArgs, ContentSearchArgs, CriteriaBuilder, SearchDomain,
};
pub use result_assembler::{ResultAssembler, ToolOutput};
pub use search_service::{CatalogSearchService, ContentSearchService};
pub use tool_dispatcher::{DispatchError, ToolDispatcher, ToolName, SEARCH_POSTS, SEARCH_PRODUCTS};
