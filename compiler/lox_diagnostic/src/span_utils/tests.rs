use super::*;

#[test]
fn test_table_single_line() {
    let table = LineOffsetTable::build("print 1;");
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(7), 1);
}

#[test]
fn test_table_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(12), 3);
}

#[test]
fn test_blank_lines_and_offsets_past_end() {
    let source = "var a = 1;\n\n  print a;\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(11), 2);
    assert_eq!(table.line_from_offset(14), 3);
    assert_eq!(table.line_from_offset(99), 4);
}
