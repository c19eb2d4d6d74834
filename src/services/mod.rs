//! Services layer
//!
//! The entry points the (external) controller layer calls. Services
//! coordinate the repositories; they do not validate input.

pub mod blog;

pub use blog::BlogService;
