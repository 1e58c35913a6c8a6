mod common;
use basic::mach::{Config, Runtime};
use common::*;

#[test]
fn test_mat_read_and_print() {
    let s = run(&[
        "10 DIM A(2, 3)",
        "20 MAT READ A",
        "30 MAT PRINT A",
        "40 DATA 1, 2, 3, 4, 5, 6",
    ]);
    assert_eq!(s, "{{1,2,3},{4,5,6}}\n");
}

#[test]
fn test_elements_start_at_zero() {
    let s = run(&[
        "10 DIM A(2, 2), N$(2)",
        "20 A(0, 1) = 2",
        "30 N$(1) = \"ONE\"",
        "40 PRINT A(0, 1) + A(1, 1); N$(1); N$(0); \"|\"",
    ]);
    assert_eq!(s, "2ONE|\n");
}

#[test]
fn test_subscript_out_of_range_continues() {
    let s = run(&[
        "10 DIM A(2)",
        "20 A(5) = 1",
        "30 PRINT A(7)",
        "40 PRINT \"OK\"",
    ]);
    assert_eq!(
        s,
        "0\nOK\nSUBSCRIPT OUT OF RANGE IN 20; A(5)\nSUBSCRIPT OUT OF RANGE IN 30; A(7)\n"
    );
}

#[test]
fn test_undefined_matrix() {
    assert_eq!(run(&["10 MAT PRINT Q"]), "UNDEFINED MATRIX IN 10; Q\n");
}

#[test]
fn test_mat_mult() {
    let s = run(&[
        "10 DIM A(2, 3), B(3, 2)",
        "20 MAT READ A, B",
        "30 MAT MULT C = A * B",
        "40 MAT PRINT C",
        "50 DATA 1, 2, 3, 4, 5, 6",
        "60 DATA 7, 8, 9, 10, 11, 12",
    ]);
    assert_eq!(s, "{{58,64},{139,154}}\n");
}

#[test]
fn test_failed_mat_leaves_target() {
    let mut r = Runtime::default();
    r.enter("10 DIM A(2, 3)");
    r.enter("20 MAT C = IDENTITY(2)");
    r.enter("30 MAT MULT C = A * A");
    r.enter("40 PRINT \"NOT REACHED\"");
    r.enter("RUN");
    assert!(exec(&mut r).starts_with("DIMENSION MISMATCH IN 30"));
    r.enter("MAT PRINT C");
    assert_eq!(exec(&mut r), "{{1,0},{0,1}}\n");
}

#[test]
fn test_determinant() {
    let s = run(&[
        "10 DIM A(3, 3)",
        "20 MAT READ A",
        "30 MAT D = DETERMINANT(A)",
        "40 PRINT D; \" \"; DET(A)",
        "50 DATA 2, 0, 1, 1, 3, 2, 1, 1, 2",
    ]);
    assert_eq!(s, "6 6\n");
}

#[test]
fn test_determinant_of_singular_matrix() {
    let s = run(&[
        "10 DIM A(2, 2)",
        "20 MAT READ A",
        "30 PRINT DET(A)",
        "40 DATA 1, 2, 2, 4",
    ]);
    assert_eq!(s, "0\n");
}

#[test]
fn test_rank_and_trace() {
    let s = run(&[
        "10 DIM A(2, 2)",
        "20 MAT READ A",
        "30 MAT R = RANK(A)",
        "40 MAT T = TRACE(A)",
        "50 PRINT R, T",
        "60 DATA 1, 2, 2, 4",
    ]);
    assert_eq!(s, "1 5\n");
}

#[test]
fn test_inverse() {
    let s = run(&[
        "10 DIM A(2, 2)",
        "20 MAT READ A",
        "30 MAT B = INVERSE(A)",
        "40 MAT PRINT B",
        "50 DATA 4, 7, 2, 6",
    ]);
    assert_eq!(s, "{{0.6,-0.7},{-0.2,0.4}}\n");
}

#[test]
fn test_inverse_of_singular_matrix() {
    let s = run(&[
        "10 DIM A(2, 2)",
        "20 MAT READ A",
        "30 MAT B = INVERSE(A)",
        "40 DATA 1, 2, 2, 4",
    ]);
    assert!(s.starts_with("SINGULAR MATRIX IN 30"));
}

#[test]
fn test_constructors_and_transpose() {
    let s = run(&[
        "10 MAT I = IDENTITY(2)",
        "20 MAT Z = ZEROS(2)",
        "30 MAT O = ONES(1, 2)",
        "40 DIM A(2, 3)",
        "50 MAT READ A",
        "60 MAT T = TRANSPOSE(A)",
        "70 MAT D = DIAGONAL(I)",
        "80 MAT PRINT I, Z, O, T, D",
        "90 DATA 1, 2, 3, 4, 5, 6",
    ]);
    assert_eq!(
        s,
        "{{1,0},{0,1}}\n{0,0}\n{{1,1}}\n{{1,4},{2,5},{3,6}}\n{{1},{1}}\n"
    );
}

#[test]
fn test_element_wise() {
    let s = run(&[
        "10 DIM A(2), B(2)",
        "20 MAT READ A, B",
        "30 MAT C = A + B",
        "40 MAT D = A * 2",
        "50 MAT E = 10 - A",
        "60 MAT F = A",
        "70 MAT PRINT C, D, E, F",
        "80 DATA 1, 2, 10, 20",
    ]);
    assert_eq!(s, "{11,22}\n{2,4}\n{9,8}\n{1,2}\n");
}

#[test]
fn test_element_wise_errors() {
    let s = run(&["10 DIM A(2), B(3)", "20 MAT C = A - B"]);
    assert!(s.starts_with("DIMENSION MISMATCH IN 20"));
    let s = run(&["10 DIM A(2)", "20 MAT C = A / 0"]);
    assert!(s.starts_with("DIVISION BY ZERO IN 20"));
}

#[test]
fn test_mat_power() {
    let s = run(&[
        "10 DIM A(2, 2)",
        "20 MAT READ A",
        "30 MAT POWER B = A ^ 5",
        "40 MAT POWER C = A ^ 0",
        "50 MAT PRINT B, C",
        "60 DATA 1, 1, 1, 0",
    ]);
    assert_eq!(s, "{{8,5},{5,3}}\n{{1,0},{0,1}}\n");
}

#[test]
fn test_mat_solve() {
    let s = run(&[
        "10 DIM A(2, 2), B(2, 1)",
        "20 MAT READ A, B",
        "30 MAT SOLVE X = A \\ B",
        "40 MAT PRINT X",
        "50 DATA 2, 1, 1, 3, 3, 5",
    ]);
    assert_eq!(s, "{{0.8},{1.4}}\n");
}

#[test]
fn test_mat_lu() {
    let s = run(&[
        "10 DIM A(2, 2)",
        "20 MAT READ A",
        "30 MAT LU X = A",
        "40 MAT PRINT X_L, X_U",
        "50 DATA 4, 3, 6, 3",
    ]);
    assert_eq!(s, "{{1,0},{1.5,1}}\n{{4,3},{0,-1.5}}\n");
}

#[test]
fn test_sparse_matches_dense() {
    let program = [
        "10 DIM A(3, 3)",
        "20 MAT READ A",
        "30 MAT MULT B = A * A",
        "40 MAT C = INVERSE(A)",
        "50 MAT D = TRANSPOSE(B)",
        "60 MAT PRINT B, C, D",
        "70 PRINT DET(A); \" \"; RANK(A); \" \"; TRACE(A)",
        "80 DATA 2, 0, 0, 0, 0, 1, 0, 4, 0",
    ];
    let mut dense = Runtime::default();
    let mut sparse = Runtime::new(Config {
        dense_threshold: 4,
        ..Config::default()
    });
    for line in &program {
        dense.enter(line);
        sparse.enter(line);
    }
    dense.enter("RUN");
    sparse.enter("RUN");
    let s = exec(&mut dense);
    assert_eq!(s, exec(&mut sparse));
    assert!(s.ends_with("-8 3 2\n"));
}

#[test]
fn test_huge_sparse_matrix() {
    let s = run(&[
        "10 DIM B(100000, 100000)",
        "20 B(99999, 99999) = 1",
        "30 PRINT B(99999, 99999) + B(5, 5)",
    ]);
    assert_eq!(s, "1\n");
}

#[test]
fn test_huge_sparse_identity_and_transpose() {
    let s = run(&[
        "10 MAT I = IDENTITY(100000)",
        "20 DIM B(100000, 100000)",
        "30 B(1, 2) = 5",
        "40 MAT C = TRANSPOSE(B)",
        "50 PRINT TRACE(I); \" \"; C(2, 1)",
        "60 PRINT DET(B)",
    ]);
    assert_eq!(
        s,
        "100000 5\nOVERFLOW IN 60; 100000x100000 MATRIX TOO LARGE TO COPY\n"
    );
}

#[test]
fn test_parenthesised_condition_evaluates_once() {
    let s = run(&[
        "10 DIM A(2, 2)",
        "20 IF (A(5, 1) + 1) * 2 = 2 THEN PRINT \"Y\"",
        "30 IF (A(1, 6) = 0) AND 1 THEN PRINT \"Z\"",
    ]);
    assert_eq!(
        s,
        "Y\nZ\nSUBSCRIPT OUT OF RANGE IN 20; A(5, 1)\nSUBSCRIPT OUT OF RANGE IN 30; A(1, 6)\n"
    );
}

#[test]
fn test_short_inverse_and_transpose_names() {
    let s = run(&[
        "10 DIM A(2, 2)",
        "20 MAT READ A",
        "30 MAT B = INV(A)",
        "40 MAT C = TRANS(A)",
        "50 BEEP",
        "60 MAT PRINT B, C",
        "70 DATA 4, 7, 2, 6",
    ]);
    assert_eq!(s, "{{0.6,-0.7},{-0.2,0.4}}\n{{4,2},{7,6}}\n");
}
