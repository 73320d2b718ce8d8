// Composition root for the dashboard service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the REST backend client and wire it into the use case handlers.
// - Expose the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod responses;
pub mod state;
