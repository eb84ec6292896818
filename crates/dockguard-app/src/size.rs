//! The `size` use case: aggregate container-runtime layer history.

use dockguard_domain::history::{parse_history, SizeBreakdown};

/// Aggregate history lines fetched by the caller (typically via
/// `dockguard_scan::image_history`).
pub fn run_size<S: AsRef<str>>(lines: &[S]) -> SizeBreakdown {
    parse_history(lines.iter().map(S::as_ref))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_known_layer_sizes() {
        let lines = [
            "10MB: RUN pip install -r requirements.txt",
            "512KB: COPY . /app",
            "1GB: FROM python:3.10",
        ];
        let breakdown = run_size(&lines);
        assert_eq!(
            breakdown.total_bytes,
            10 * 1024 * 1024 + 512 * 1024 + 1024 * 1024 * 1024
        );
        assert_eq!(breakdown.layers.len(), 3);
    }
}
