use std::{env, fs, process};

use paragraph_diff::diff_paragraphs;

/// Prints the paragraphs that differ between two versions of a file, one line
/// per changed or shifted paragraph.
///
/// Run it with:
/// `cargo run --example diff-file original.txt modified.txt`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: diff-file <original> <modified>");
        process::exit(1);
    }

    let original_file = &args[1];
    let modified_file = &args[2];

    let original_content = fs::read_to_string(original_file).unwrap_or_else(|e| {
        eprintln!("Error reading {original_file}: {e}");
        process::exit(1);
    });

    let modified_content = fs::read_to_string(modified_file).unwrap_or_else(|e| {
        eprintln!("Error reading {modified_file}: {e}");
        process::exit(1);
    });

    let diffs = diff_paragraphs(&original_content, &modified_content);
    if diffs.is_empty() {
        println!("The files are identical");
        return;
    }

    for diff in &diffs {
        match diff.diff() {
            Some(text_diff) => println!("{diff} {text_diff}"),
            None => println!("{diff}"),
        }
    }
}
