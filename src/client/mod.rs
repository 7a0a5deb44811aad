// Tagmarks backend client
// Plumbing (rest_client), endpoint bindings (bookmark_api), read cache
// (query_cache) and the CRUD orchestrator (bookmark_store).

pub mod bookmark_api;
pub mod bookmark_store;
pub mod query_cache;
pub mod rest_client;
