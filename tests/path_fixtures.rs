//! Data-driven tests over `tests/fixtures/*.path`.
//!
//! Each `.path` file sits next to either a `.tags` file with the expected tag
//! output or an `.err` file with the expected diagnostic code.

use datatest_stable::Utf8Path;

/// Format a colored inline diff using dissimilar
fn format_inline_diff(expected: &str, actual: &str) -> String {
    use dissimilar::Chunk;

    let mut out = String::new();
    for chunk in dissimilar::diff(expected, actual) {
        match chunk {
            Chunk::Equal(text) => out.push_str(text),
            Chunk::Delete(text) => {
                out.push_str("\x1b[31m[-");
                out.push_str(text);
                out.push_str("-]\x1b[0m");
            }
            Chunk::Insert(text) => {
                out.push_str("\x1b[32m{+");
                out.push_str(text);
                out.push_str("+}\x1b[0m");
            }
        }
    }
    out
}

fn test_path_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let source = source.trim_end_matches(['\r', '\n']);

    let tags_file = path.with_extension("tags");
    let err_file = path.with_extension("err");

    let result = pathtags::path_to_tags(source);

    if err_file.exists() {
        let expected_code = std::fs::read_to_string(&err_file)?;
        let expected_code = expected_code.trim();
        match result {
            Ok(tags) => panic!(
                "{path}: expected error {expected_code}, got output:\n{tags}"
            ),
            Err(report) => {
                let code = report.code().map(|c| c.to_string());
                assert_eq!(
                    code.as_deref(),
                    Some(expected_code),
                    "{path}: wrong diagnostic: {report:?}"
                );
            }
        }
    } else {
        let expected = std::fs::read_to_string(&tags_file)
            .map_err(|e| format!("{path}: missing {tags_file}: {e}"))?;
        let expected = expected.trim_end_matches(['\r', '\n']);
        let actual = match result {
            Ok(tags) => tags,
            Err(report) => panic!("{path}: conversion failed: {report:?}"),
        };
        if actual != expected {
            panic!(
                "tag mismatch for {path}:\n{}",
                format_inline_diff(expected, &actual)
            );
        }
    }

    Ok(())
}

datatest_stable::harness! {
    { test = test_path_file, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.path$" },
}
