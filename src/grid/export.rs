//! CSV hand-off for external renderers.
//!
//! Layout for one leg:
//!
//! ```text
//! volatility\spot, 80, 84.44, ..., 120
//! 0.1,             c00, c01,  ..., c09
//! 0.11,            c10, c11,  ..., c19
//! ```

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::grid::types::SensitivityGrid;
use crate::models::types::OptionKind;

/// Corner cell of the header record.
pub const CORNER_LABEL: &str = "volatility\\spot";

/// Write one leg of `grid` as CSV, spot values across, volatility values down.
pub fn write_csv<W: Write>(grid: &SensitivityGrid, kind: OptionKind, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(grid.spot_values().len() + 1);
    header.push(CORNER_LABEL.to_string());
    header.extend(grid.spot_values().iter().map(f64::to_string));
    wtr.write_record(&header)
        .context("failed to write grid header")?;

    for (vol, row) in grid.volatility_values().iter().zip(grid.prices(kind)) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(vol.to_string());
        record.extend(row.iter().map(f64::to_string));
        wtr.write_record(&record)
            .with_context(|| format!("failed to write grid row for volatility {vol}"))?;
    }

    wtr.flush().context("failed to flush grid CSV")?;
    Ok(())
}

/// Write one leg of `grid` to a CSV file, creating or truncating it.
pub fn write_csv_path<P: AsRef<Path>>(
    grid: &SensitivityGrid,
    kind: OptionKind,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(grid, kind, file)
}
