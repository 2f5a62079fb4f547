//! File-metadata records.
//!
//! Files reference a category; listing joins the category name in, and
//! files whose category is gone render the uncategorized sentinel.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/files` | List all files with category names |
//! | POST | `/files` | Create a file record |
//! | DELETE | `/files/{id}` | Delete a file record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FileService;
