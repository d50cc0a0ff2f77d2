//! Sinkhole catalog feature: the entity model, its serialized forms, and the
//! CRUD surface over the collection.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/sinkholes` | List all sinkholes, newest first |
//! | POST | `/api/sinkholes` | Create a sinkhole |
//! | GET | `/api/sinkholes/{id}` | Retrieve one sinkhole |
//! | PUT | `/api/sinkholes/{id}` | Replace a sinkhole |
//! | PATCH | `/api/sinkholes/{id}` | Partially update a sinkhole |
//! | DELETE | `/api/sinkholes/{id}` | Delete a sinkhole |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SinkholeService;
