use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use star_testgen::writer::append_block;
use star_testgen::{generate_day, walk_data_dirs};

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Builds a realistic project layout: a fixture tree and a matching solution
/// tree, returning the root.
fn project_with_day(files: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().unwrap();
    for (name, content) in files {
        write_file(&root.path().join("tests/data/2017/13").join(name), content);
    }
    write_file(
        &root.path().join("src/yr2017/day13.rs"),
        "pub fn star1(input: &str) -> String {\n    todo!()\n}\n",
    );
    root
}

#[test]
fn test_full_day_pipeline() {
    let root = project_with_day(&[
        ("1.in", "0: 3\n1: 2\n4: 4\n6: 4\n"),
        ("1.out.1", "24\n"),
        ("1.out.2", "10\n"),
        ("me.in", "0: 4\n1: 2\n"),
        ("me.out.1", "1300\n"),
        ("me.out.2", "3870382\n"),
    ]);

    let days = walk_data_dirs(&root.path().join("tests/data")).unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].year, "2017");
    assert_eq!(days[0].day, "13");

    let block = generate_day(&days[0].path).unwrap();

    assert_eq!(
        block,
        "\n\
         #[cfg(test)]\n\
         mod test {\n\
         \x20   use super::*;\n\
         \x20   use indoc::indoc;\n\
         \n\
         \x20   star_test!(example1a, star1, IN1, \"24\");\n\
         \x20   star_test!(me1, star1, ME, \"1300\");\n\
         \n\
         \x20   star_test!(example1b, star2, IN1, \"10\");\n\
         \x20   star_test!(me2, star2, ME, \"3870382\");\n\
         \n\
         \x20   const IN1: &str = indoc!{\"\n\
         \x20       0: 3\n\
         \x20       1: 2\n\
         \x20       4: 4\n\
         \x20       6: 4\n\
         \x20   \"};\n\
         \n\
         \x20   const ME: &str = indoc!{\"\n\
         \x20       0: 4\n\
         \x20       1: 2\n\
         \x20   \"};\n\
         }\n"
    );

    let target = days[0]
        .solution_file(&root.path().join("src"))
        .unwrap();
    append_block(&target, &block).unwrap();

    let content = fs::read_to_string(&target).unwrap();
    assert!(content.starts_with("pub fn star1"));
    assert!(content.ends_with(&block));
}

#[test]
fn test_walk_covers_every_year_and_day() {
    let root = TempDir::new().unwrap();
    for dir in ["2015/1", "2015/2", "2017/13"] {
        fs::create_dir_all(root.path().join("tests/data").join(dir)).unwrap();
    }

    let days = walk_data_dirs(&root.path().join("tests/data")).unwrap();
    let found: Vec<String> = days
        .iter()
        .map(|d| format!("{}/{}", d.year, d.day))
        .collect();

    assert_eq!(found, vec!["2015/1", "2015/2", "2017/13"]);
}

#[test]
fn test_day_with_leading_zero_targets_stripped_name() {
    let root = TempDir::new().unwrap();
    write_file(&root.path().join("tests/data/2018/07/foo.in"), "5\n");

    let days = walk_data_dirs(&root.path().join("tests/data")).unwrap();
    let target = days[0].solution_file(Path::new("src")).unwrap();

    assert_eq!(target, Path::new("src/yr2018/day7.rs"));
}

#[test]
fn test_input_shared_across_days_is_not_shared_state() {
    // Identical content in two different day directories must not alias:
    // every day gets its own registry.
    let root = TempDir::new().unwrap();
    for day in ["1", "2"] {
        write_file(
            &root.path().join("tests/data/2015").join(day).join("me.in"),
            "abc\ndef\n",
        );
        write_file(
            &root
                .path()
                .join("tests/data/2015")
                .join(day)
                .join("me.out.1"),
            "42\n",
        );
    }

    let days = walk_data_dirs(&root.path().join("tests/data")).unwrap();
    let first = generate_day(&days[0].path).unwrap();
    let second = generate_day(&days[1].path).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("const ME"));
}

#[test]
fn test_output_with_quote_uses_raw_literal() {
    let root = TempDir::new().unwrap();
    let day = root.path().join("tests/data/2016/5");
    write_file(&day.join("foo.in"), "seed\n");
    write_file(&day.join("foo.out.1"), "\"password\"\n");

    let block = generate_day(&day).unwrap();

    assert!(block.contains("star_test!(foo, star1, \"seed\", r#\"\"password\"\"#);"));
}

#[test]
fn test_unrecognized_fixture_aborts_generation() {
    let root = TempDir::new().unwrap();
    let day = root.path().join("tests/data/2016/5");
    write_file(&day.join("foo.in"), "seed\n");
    write_file(&day.join("foo.out.3"), "odd\n");

    assert!(generate_day(&day).is_err());
}
