// Composition root for the activities bounded context.
//
// - state: wires the in-memory roster into the use case handlers.
// - http: the axum router, static front end and root redirect.
// - graphql: the merged schema and its endpoint.

pub mod graphql;
pub mod http;
pub mod state;
