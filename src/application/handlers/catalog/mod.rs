//! Catalog query handlers.

mod get_metaphor;
mod get_metaphor_content;
mod list_metaphors;

pub use get_metaphor::{GetMetaphorHandler, GetMetaphorQuery};
pub use get_metaphor_content::{
    ContentView, GetMetaphorContentHandler, GetMetaphorContentQuery,
};
pub use list_metaphors::ListMetaphorsHandler;
