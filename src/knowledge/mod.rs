//! Static knowledge base: role requirements and course recommendations

pub mod builtin;
pub mod store;

pub use store::{CourseCatalog, KnowledgeBase, RequirementSource, RoleKey, RoleRequirement};
