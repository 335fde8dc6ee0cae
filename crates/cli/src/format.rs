//! Text rendering for progress values.

/// Render a fraction as a rounded percentage, e.g. `0.428` -> `"43%"`.
pub fn format_percentage(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Render a fraction as a fixed-width text bar, e.g. `[######--------------]`.
pub fn render_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_whole_numbers() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(3.0 / 7.0), "43%");
        assert_eq!(format_percentage(1.0), "100%");
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(render_bar(0.0, 10), "[----------]");
        assert_eq!(render_bar(0.5, 10), "[#####-----]");
        assert_eq!(render_bar(1.0, 10), "[##########]");
    }

    #[test]
    fn bar_clamps_out_of_range_fractions() {
        assert_eq!(render_bar(1.7, 4), "[####]");
        assert_eq!(render_bar(-0.3, 4), "[----]");
    }
}
