use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv_source::CsvSource;
use crate::error::LoadResult;

/// One row of `mat_data.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRow {
    pub name: String,
    pub stock: u64,
}

/// Load `mat_data.csv` (columns `name`, `stock`; others are ignored).
pub fn load_materials(path: &Path) -> LoadResult<Vec<MaterialRow>> {
    let source = CsvSource::open(path)?;
    let name = source.column("name")?;
    let stock = source.column("stock")?;

    let materials = source
        .rows()
        .map(|row| {
            Ok(MaterialRow {
                name: row.required(name)?.to_string(),
                stock: row.count(stock)?,
            })
        })
        .collect::<LoadResult<Vec<_>>>()?;

    tracing::info!(path = %path.display(), materials = materials.len(), "material data loaded");
    Ok(materials)
}
