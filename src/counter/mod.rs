mod classifier;
mod reader;

pub use classifier::{LineClassifier, LineCountRecord, classify_with};
pub use reader::{FileReader, RealFileReader, read_source};

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageRegistry;

    #[test]
    fn classifier_integration_with_registry() {
        let registry = LanguageRegistry::default();
        let classifier = LineClassifier::new(&registry);

        let source = "public class A {\n    // note\n    int x;\n}\n";
        let record = classifier.classify(source, "cs");

        assert_eq!(record, LineCountRecord::new(3, 1, 1));
    }
}
