mod example_diff;

use std::{fs, path::Path};

use example_diff::ExampleDiff;
use paragraph_diff::diff_paragraphs;
use serde::Deserialize;

#[test]
fn test_examples() {
    for example in &get_all_examples() {
        example.assert_eq(&diff_paragraphs(example.original(), example.modified()));
    }
}

#[test]
fn test_examples_have_consistent_text_diffs() {
    for example in &get_all_examples() {
        example.assert_consistent_text_diffs(&diff_paragraphs(
            example.original(),
            example.modified(),
        ));
    }
}

#[test]
fn test_examples_inverse_way() {
    for example in &get_all_examples() {
        let forward = diff_paragraphs(example.original(), example.modified());
        let inverse = diff_paragraphs(example.modified(), example.original());

        assert_eq!(forward.len(), inverse.len());
        for (forward, inverse) in forward.iter().zip(&inverse) {
            assert_eq!(forward.original(), inverse.modified());
            assert_eq!(forward.original_index(), inverse.modified_index());
            assert_eq!(forward.modified_index(), inverse.original_index());
        }
    }
}

fn get_all_examples() -> Vec<ExampleDiff> {
    let examples_dir = Path::new("tests/resources");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut examples = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let example =
                    ExampleDiff::deserialize(document).expect("Failed to deserialize example");
                examples.push(example);
            }
        }
    }

    assert!(!examples.is_empty(), "No examples found");
    examples
}
