mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_for_loop() {
    let s = run(&["10 FOR I = 1 TO 3", "20 PRINT I;", "30 NEXT I", "40 PRINT"]);
    assert_eq!(s, "123\n");
}

#[test]
fn test_for_loop_negative_step() {
    let s = run(&["10 FOR I = 3 TO 1 STEP -1", "20 PRINT I;", "30 NEXT", "40 PRINT"]);
    assert_eq!(s, "321\n");
}

#[test]
fn test_for_loop_always_runs_once() {
    let s = run(&["10 FOR I = 5 TO 1", "20 PRINT I", "30 NEXT I", "40 PRINT I"]);
    assert_eq!(s, "5\n6\n");
}

#[test]
fn test_next_with_list_of_variables() {
    let s = run(&[
        "10 FOR X = 1 TO 2",
        "20 FOR Y = 5 TO 6",
        "30 PRINT X, Y",
        "40 NEXT Y, X",
    ]);
    assert_eq!(s, "1 5\n1 6\n2 5\n2 6\n");
}

#[test]
fn test_breaking_out_of_for_loop_with_goto() {
    let s = run(&[
        "10 FOR I = 1 TO 2",
        "20 FOR J = 1 TO 5",
        "30 PRINT I, J",
        "40 GOTO 60",
        "50 NEXT J",
        "60 NEXT I",
    ]);
    assert_eq!(s, "1 1\n2 1\n");
}

#[test]
fn test_next_without_for() {
    let s = run(&["10 NEXT I"]);
    assert_eq!(s, "NEXT WITHOUT FOR IN 10; I\n");
}

#[test]
fn test_gosub_returns_to_following_line() {
    let s = run(&[
        "10 GOSUB 100",
        "20 PRINT \"BACK\"",
        "30 END",
        "100 PRINT \"SUB\"",
        "110 RETURN",
    ]);
    assert_eq!(s, "SUB\nBACK\n");
}

#[test]
fn test_gosub_overflow() {
    let mut r = Runtime::default();
    r.enter("5 N = 0");
    r.enter("10 N = N + 1");
    r.enter("20 GOSUB 10");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "OVERFLOW IN 20; TOO MANY NESTED GOSUBS\n");
    r.enter("PRINT N");
    assert_eq!(exec(&mut r), "16\n");
}

#[test]
fn test_gosub_to_missing_line() {
    let s = run(&["10 GOSUB 99"]);
    assert_eq!(s, "UNDEFINED LINE IN 10; NO LINE 99\n");
}

#[test]
fn test_return_without_gosub() {
    let s = run(&["10 RETURN"]);
    assert_eq!(s, "RETURN WITHOUT GOSUB IN 10\n");
}

#[test]
fn test_on_goto() {
    let s = run(&[
        "10 ON 2 GOTO 100, 200",
        "100 PRINT \"A\"",
        "110 END",
        "200 PRINT \"B\"",
    ]);
    assert_eq!(s, "B\n");
}

#[test]
fn test_on_gosub() {
    let s = run(&[
        "10 FOR I = 1 TO 2",
        "20 ON I GOSUB 100, 200",
        "30 NEXT I",
        "40 END",
        "100 PRINT \"ONE\"",
        "110 RETURN",
        "200 PRINT \"TWO\"",
        "210 RETURN",
    ]);
    assert_eq!(s, "ONE\nTWO\n");
}

#[test]
fn test_on_index_out_of_range() {
    let s = run(&["10 ON 3 GOTO 100, 200", "100 END", "200 END"]);
    assert_eq!(s, "ILLEGAL FUNCTION CALL IN 10; ON INDEX 3 OUT OF RANGE 1 TO 2\n");
    let s = run(&["10 ON 0 GO TO 100", "100 END"]);
    assert_eq!(s, "ILLEGAL FUNCTION CALL IN 10; ON INDEX 0 OUT OF RANGE 1 TO 1\n");
}

#[test]
fn test_while_wend() {
    let s = run(&[
        "10 I = 0",
        "20 WHILE I < 3",
        "30 PRINT I;",
        "40 I = I + 1",
        "50 WEND",
        "60 PRINT",
    ]);
    assert_eq!(s, "012\n");
}

#[test]
fn test_while_false_skips_body() {
    let s = run(&[
        "10 WHILE 0",
        "20 WHILE 1",
        "30 PRINT \"NO\"",
        "40 WEND",
        "50 WEND",
        "60 PRINT \"DONE\"",
    ]);
    assert_eq!(s, "DONE\n");
}

#[test]
fn test_wend_without_while() {
    assert_eq!(run(&["10 WEND"]), "WEND WITHOUT WHILE IN 10\n");
}

#[test]
fn test_repeat_until() {
    let s = run(&[
        "10 N = 1",
        "20 REPEAT",
        "30 N = N * 2",
        "40 UNTIL N > 100",
        "50 PRINT N",
    ]);
    assert_eq!(s, "128\n");
}

#[test]
fn test_until_without_repeat() {
    assert_eq!(run(&["10 UNTIL 1"]), "UNTIL WITHOUT REPEAT IN 10\n");
}

#[test]
fn test_stop_and_end() {
    let s = run(&["10 PRINT 1", "20 STOP", "30 PRINT 2"]);
    assert_eq!(s, "1\nBREAK IN 20\n");
    let mut r = Runtime::default();
    r.enter("10 X = 5");
    r.enter("20 END");
    r.enter("30 X = 6");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "5\n");
}

#[test]
fn test_if_branches() {
    let s = run(&[
        "10 A = 10",
        "20 IF A < 30 THEN PRINT A ELSE 50",
        "30 A = A + 10",
        "40 GOTO 20",
        "50 IF A = 30 AND NOT A > 40 GOTO 70",
        "60 PRINT \"MISSED\"",
        "70 IF A$ = \"\" THEN 90",
        "80 PRINT \"MISSED\"",
        "90 PRINT \"DONE\"",
    ]);
    assert_eq!(s, "10\n20\nDONE\n");
}

#[test]
fn test_direct_goto_keeps_variables() {
    let mut r = Runtime::default();
    r.enter("10 PRINT \"NO\"");
    r.enter("20 PRINT X");
    r.enter("X = 7");
    assert_eq!(exec(&mut r), "");
    r.enter("GOTO 20");
    assert_eq!(exec(&mut r), "7\n");
}

#[test]
fn test_interrupt() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10");
    r.enter("RUN");
    assert!(exec_n(&mut r, 10).ends_with("Execution cycles exceeded.\n"));
    r.interrupt();
    assert_eq!(exec(&mut r), "BREAK IN 10\n");
}

#[test]
fn test_loop_overflow() {
    let mut r = Runtime::default();
    r.enter("10 N = 0");
    r.enter("20 N = N + 1");
    r.enter("30 REPEAT");
    r.enter("40 REPEAT");
    r.enter("50 GOTO 20");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "OVERFLOW IN 40; TOO MANY NESTED LOOPS\n");
    r.enter("PRINT N");
    assert_eq!(exec(&mut r), "8\n");
}

#[test]
fn test_on_index_not_a_number() {
    let s = run(&["10 ON ACS(2) GOTO 20, 30", "20 END", "30 END"]);
    assert_eq!(s, "ILLEGAL FUNCTION CALL IN 10; ON INDEX NaN OUT OF RANGE 1 TO 2\n");
    let s = run(&["10 ON POW(-1, 0.5) GOSUB 20", "20 END"]);
    assert_eq!(s, "ILLEGAL FUNCTION CALL IN 10; ON INDEX NaN OUT OF RANGE 1 TO 1\n");
}
