//! # Loader Tests
//!
//! Tests for comment stripping and whitespace tokenizing.

use std::io::Write;

use pretty_assertions::assert_eq;

use rtl_core::sim::loader;

fn tokens(source: &str) -> Vec<String> {
    loader::tokenize(source)
}

#[test]
fn test_tokens_are_maximal_nonwhitespace_runs() {
    assert_eq!(tokens("setd 5 outputd"), ["setd", "5", "outputd"]);
    assert_eq!(tokens("setd   5\t\toutputd"), ["setd", "5", "outputd"]);
}

#[test]
fn test_comment_runs_to_end_of_line() {
    assert_eq!(
        tokens("setd 5 # store five\noutputd"),
        ["setd", "5", "outputd"]
    );
}

#[test]
fn test_comment_only_line_yields_leading_empty_token() {
    // The stripped source starts with the comment's newline, so the split
    // keeps a single leading empty token and counter positions match sources
    // that open with a comment header.
    assert_eq!(tokens("# cat program\ninputc outputc"), ["", "inputc", "outputc"]);
}

#[test]
fn test_leading_whitespace_yields_leading_empty_token() {
    assert_eq!(tokens("  setd 5"), ["", "setd", "5"]);
}

#[test]
fn test_empty_and_comment_only_sources() {
    assert_eq!(tokens(""), Vec::<String>::new());
    assert_eq!(tokens("# nothing here"), Vec::<String>::new());
    assert_eq!(tokens("# a\n# b"), [""]);
}

#[test]
fn test_hash_mid_token_still_strips() {
    assert_eq!(tokens("setd 5 outputd# trailing"), ["setd", "5", "outputd"]);
}

#[test]
fn test_strip_comments_preserves_line_structure() {
    let stripped = loader::strip_comments("a # x\nb # y\nc");
    assert_eq!(stripped, "a \nb \nc");
}

#[test]
fn test_load_program_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# demo").unwrap();
    writeln!(file, "gsetd 3 {{ g-- }} outputd").unwrap();

    let program = loader::load_program(file.path()).unwrap();
    assert_eq!(program, ["", "gsetd", "3", "{", "g--", "}", "outputd"]);
}

#[test]
fn test_load_program_missing_file_errors() {
    assert!(loader::load_program(std::path::Path::new("/no/such/file.rtl")).is_err());
}
