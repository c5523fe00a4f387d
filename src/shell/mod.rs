// Composition root for the project tracker.
//
// Responsibilities:
// - Instantiate the in-memory entity store.
// - Wire the store into the use case handlers.
// - Expose the HTTP router and the GraphQL schema over one shared state.

pub mod graphql;
pub mod http;
pub mod state;
