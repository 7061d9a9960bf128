use std::io::Write;

/// Format a count with `,` between groups of three digits.
#[must_use]
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Write one row of an overall-totals block: the label padded to a fixed
/// column, then the formatted count right-aligned.
pub(super) fn write_total_line(output: &mut Vec<u8>, indent: &str, label: &str, value: usize) {
    writeln!(output, "{indent}{label:<21}{:>10}", format_number(value)).ok();
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
