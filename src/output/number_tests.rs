use super::*;

#[test]
fn small_numbers_have_no_separator() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(7), "7");
    assert_eq!(format_number(999), "999");
}

#[test]
fn separators_every_three_digits() {
    assert_eq!(format_number(1_000), "1,000");
    assert_eq!(format_number(12_345), "12,345");
    assert_eq!(format_number(123_456), "123,456");
    assert_eq!(format_number(1_234_567), "1,234,567");
}

#[test]
fn total_line_pads_label_and_right_aligns_count() {
    let mut output = Vec::new();
    write_total_line(&mut output, "  ", "Total Files:", 12_345);
    write_total_line(&mut output, "", "Total Comment Lines:", 7);

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "  Total Files:             12,345\nTotal Comment Lines:          7\n"
    );
}
