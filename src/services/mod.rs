pub mod action;
pub mod fetch;
pub mod normalize;
pub mod registry;
pub mod searcher;
pub mod slug;

pub use action::{OpenBiiiInBrowser, SearchAction, SearchActionFactory};
pub use registry::SearchService;
pub use searcher::{BiiiSearcher, Searcher};
