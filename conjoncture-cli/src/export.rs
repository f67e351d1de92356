//! CSV export of one composed panel.

use anyhow::{bail, Context, Result};

use conjoncture_core::format::ValueFormat;
use conjoncture_core::ComposedPanel;

/// Header is the panel's x key followed by one column per channel field.
pub fn panel_csv(panel: &ComposedPanel) -> Result<String> {
    let rows = match &panel.rows {
        Ok(rows) => rows,
        Err(err) => bail!("panel '{}' has no data: {err}", panel.title()),
    };
    let encoding = &panel.descriptor.encoding;

    let mut wtr = csv::Writer::from_writer(vec![]);
    let header: Vec<&str> = std::iter::once(encoding.x_key)
        .chain(encoding.channels.iter().map(|c| c.field))
        .collect();
    wtr.write_record(&header)?;

    for row in rows {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.label.clone());
        record.extend(row.values.iter().zip(encoding.channels).map(|(v, c)| match c.format {
            ValueFormat::Count | ValueFormat::Thousands => format!("{v:.0}"),
            _ => format!("{v:.1}"),
        }));
        wtr.write_record(&record)?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}
