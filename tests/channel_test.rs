mod common;
use common::*;
use std::path::PathBuf;

fn temp_file(name: &str) -> String {
    let mut path: PathBuf = std::env::temp_dir();
    path.push(format!("spaghetti_basic_{}_{}", std::process::id(), name));
    path.to_string_lossy().into_owned()
}

#[test]
fn test_print_and_input_channels() {
    let path = temp_file("sauce.txt");
    let s = run(&[
        format!(r#"10 OPEN "{}" FOR OUTPUT AS #1"#, path).as_str(),
        r#"20 PRINT #1, "TOMATO,3""#,
        r#"30 PRINT #1, "BASIL""#,
        "40 CLOSE #1",
        format!(r#"50 OPEN "{}" FOR INPUT AS #1"#, path).as_str(),
        "60 INPUT #1, A$, N",
        "70 INPUT #1, B$",
        "80 CLOSE",
        r#"90 PRINT A$; N; B$"#,
    ]);
    assert_eq!(s, "TOMATO3BASIL\n");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "TOMATO,3\nBASIL\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_append_and_mat_print() {
    let path = temp_file("append.txt");
    let s = run(&[
        format!(r#"10 OPEN "{}" FOR OUTPUT AS #2"#, path).as_str(),
        r#"20 PRINT #2, "FIRST""#,
        "30 CLOSE #2",
        format!(r#"40 OPEN "{}" FOR APPEND AS #2"#, path).as_str(),
        "50 MAT I = IDENTITY(2)",
        "60 MAT PRINT #2, I",
    ]);
    assert_eq!(s, "");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "FIRST\n{{1,0},{0,1}}\n"
    );
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_channel_errors() {
    assert_eq!(
        run(&[r#"10 PRINT #2, "X""#]),
        "BAD FILE NUMBER IN 10; #2 IS NOT OPEN\n"
    );
    assert_eq!(run(&["10 CLOSE #3"]), "BAD FILE NUMBER IN 10; #3 IS NOT OPEN\n");
    let missing = temp_file("missing.txt");
    assert!(run(&[format!(r#"10 OPEN "{}" FOR INPUT AS #1"#, missing).as_str()])
        .starts_with("FILE NOT FOUND IN 10"));
}

#[test]
fn test_input_past_end() {
    let path = temp_file("short.txt");
    std::fs::write(&path, "1\n").unwrap();
    let s = run(&[
        format!(r#"10 OPEN "{}" FOR INPUT AS #1"#, path).as_str(),
        "20 INPUT #1, A",
        "30 PRINT A",
        "40 INPUT #1, B",
    ]);
    assert_eq!(s, "1\nINPUT PAST END IN 40; #1\n");
    let s = run(&[
        format!(r#"10 OPEN "{}" FOR INPUT AS #1"#, path).as_str(),
        r#"20 PRINT #1, "X""#,
    ]);
    assert_eq!(s, "BAD FILE MODE IN 20; #1 IS OPEN FOR INPUT\n");
    std::fs::remove_file(&path).unwrap();
}
