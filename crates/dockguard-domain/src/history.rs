//! Parsing of container-runtime layer history (`<size>: <command>` lines).

/// One parsed layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerInfo {
    /// The size exactly as the runtime printed it (`10MB`, `0B`, ...).
    pub size: String,
    pub size_bytes: u64,
    /// The instruction that created the layer.
    pub created_by: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SizeBreakdown {
    pub layers: Vec<LayerInfo>,
    pub total_bytes: u64,
}

/// Parse history lines in `<size>: <command>` form. Lines without a colon
/// or without a recognized byte suffix are skipped, not errors.
pub fn parse_history<'a, I>(lines: I) -> SizeBreakdown
where
    I: IntoIterator<Item = &'a str>,
{
    let mut breakdown = SizeBreakdown::default();
    for line in lines {
        let Some((size_str, created_by)) = line.split_once(':') else {
            continue;
        };
        let size_str = size_str.trim();
        let Some(bytes) = size_to_bytes(size_str) else {
            continue;
        };
        breakdown.total_bytes += bytes;
        breakdown.layers.push(LayerInfo {
            size: size_str.to_string(),
            size_bytes: bytes,
            created_by: created_by.trim().to_string(),
        });
    }
    breakdown
}

/// Convert a `B`/`KB`/`MB`/`GB` suffixed size into bytes, 1024 per step.
/// Returns `None` for anything else.
pub fn size_to_bytes(size: &str) -> Option<u64> {
    let size = size.trim().to_uppercase();
    let (number, factor) = if let Some(v) = size.strip_suffix("GB") {
        (v, 1024u64.pow(3))
    } else if let Some(v) = size.strip_suffix("MB") {
        (v, 1024u64.pow(2))
    } else if let Some(v) = size.strip_suffix("KB") {
        (v, 1024)
    } else if let Some(v) = size.strip_suffix('B') {
        (v, 1)
    } else {
        return None;
    };
    let value: f64 = number.trim().parse().ok()?;
    if value < 0.0 {
        return None;
    }
    Some((value * factor as f64).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_each_unit_at_1024_per_step() {
        assert_eq!(size_to_bytes("512B"), Some(512));
        assert_eq!(size_to_bytes("512KB"), Some(512 * 1024));
        assert_eq!(size_to_bytes("10MB"), Some(10 * 1024 * 1024));
        assert_eq!(size_to_bytes("1GB"), Some(1024 * 1024 * 1024));
    }

    #[test]
    fn fractional_sizes_parse() {
        assert_eq!(size_to_bytes("1.5KB"), Some(1536));
    }

    #[test]
    fn unsuffixed_or_garbage_is_none() {
        assert_eq!(size_to_bytes("10"), None);
        assert_eq!(size_to_bytes("missing"), None);
        assert_eq!(size_to_bytes(""), None);
    }

    #[test]
    fn aggregates_layers_and_skips_malformed_lines() {
        let lines = [
            "10MB: RUN pip install -r requirements.txt",
            "512KB: COPY . /app",
            "no colon here",
            "weird: RUN true",
            "1GB: FROM python:3.10",
        ];
        let breakdown = parse_history(lines);
        assert_eq!(breakdown.layers.len(), 3);
        assert_eq!(
            breakdown.total_bytes,
            10 * 1024 * 1024 + 512 * 1024 + 1024 * 1024 * 1024
        );
        assert_eq!(breakdown.layers[0].created_by, "RUN pip install -r requirements.txt");
    }

    #[test]
    fn empty_input_is_empty_breakdown() {
        assert_eq!(parse_history([]), SizeBreakdown::default());
    }
}
