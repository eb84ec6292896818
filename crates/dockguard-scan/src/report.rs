use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use dockguard_types::{OutputFormat, TargetName};
use time::macros::format_description;
use time::OffsetDateTime;

/// Persist raw scanner output and return the resulting path.
///
/// The directory is created if missing. Filenames carry a second-resolution
/// timestamp; same-second collisions for the same target overwrite, an
/// accepted edge case. No atomic-rename discipline.
pub fn save_report(
    reports_dir: &Utf8Path,
    raw_output: &str,
    target: &TargetName,
    format: OutputFormat,
) -> anyhow::Result<Utf8PathBuf> {
    std::fs::create_dir_all(reports_dir)
        .with_context(|| format!("create directory: {reports_dir}"))?;

    let stamp_format = format_description!("[year][month][day]_[hour][minute][second]");
    let stamp = OffsetDateTime::now_utc()
        .format(&stamp_format)
        .context("format timestamp")?;

    let filename = format!("{}_{}.{}", target.file_stem(), stamp, format.extension());
    let path = reports_dir.join(filename);

    std::fs::write(&path, raw_output).with_context(|| format!("write report: {path}"))?;

    Ok(path)
}
