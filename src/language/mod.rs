mod registry;

pub use registry::{CommentKind, CommentRule, LanguageRegistry, LanguageRuleSet};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
