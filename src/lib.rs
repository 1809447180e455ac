//! Storyliner — swipe-curation and sequencing for visual prompt catalogs.
//!
//! A session holds three coupled ordered collections: the catalog of all
//! available prompts, the curated set the user approved by swiping, and the
//! sequence that becomes the final storyline. Prompts move between the
//! collections under strict transfer rules, and the sequence can be
//! snapshotted into a versioned JSON export document.

pub mod core;
pub mod schema;
