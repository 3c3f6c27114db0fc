pub const CSV_HEADER: &str = "Index,Value";
pub const PREVIEW_COUNT: usize = 5;
pub const RULE: &str = "--------------------------------------";

pub fn format_value(value: f64) -> String {
    format!("{:.4}", value)
}

pub fn csv_row(index: usize, value: f64) -> String {
    format!("{},{:.4}", index, value)
}

/// `index` is zero-based; previews are numbered from 1.
pub fn preview_line(index: usize, value: f64) -> String {
    format!("Sample {}: {:.4}", index + 1, value)
}

pub fn bar(count: usize, largest: usize, width: usize) -> String {
    if largest == 0 {
        return String::new();
    }
    let len = (count * width + largest - 1) / largest;
    "#".repeat(len)
}
