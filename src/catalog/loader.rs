/*
Inputs:

    menu table      (Name, Size, Crust, Type, optional per-category topping columns)

    toppings table  (optional, Toppings)

Outputs:

    Vec<CatalogRow>, Vec<ToppingRow>

Both tables arrive in one document, TOON or JSON:

    menu[2]{Name,Size,Crust,Type,"Toppings veg"}:
      Margherita,Small,Thin,veg,"Onion, Olives"
      Margherita,12,Thin,veg,"Onion, Olives"
    toppings[1]{Toppings}:
      Jalapeno

A row missing Name/Size/Crust fails the whole load.
*/
use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::types::{cell_text, CatalogRow, ToppingRow};
use crate::error::CatalogError;

type Record = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toon,
    Json,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    menu: Vec<Record>,
    //absent -> embedded topping layout
    toppings: Option<Vec<Record>>,
}

#[derive(Debug)]
pub(crate) struct LoadedTables {
    pub menu: Vec<CatalogRow>,
    pub toppings: Option<Vec<ToppingRow>>,
}

fn decode(text: &str, format: CatalogFormat) -> Result<CatalogDocument, CatalogError> {
    match format {
        CatalogFormat::Toon => toon_format::decode_default(text).map_err(|e| CatalogError::Toon(e.to_string())),
        CatalogFormat::Json => Ok(serde_json::from_str(text)?),
    }
}

fn take_text(record: &mut Record, table: &'static str, row: usize, column: &str) -> Result<Option<String>, CatalogError> {
    match record.remove(column) {
        None => Ok(None),
        Some(value) => cell_text(&value)
            .map(Some)
            .ok_or_else(|| CatalogError::InvalidCell { table, row, column: column.to_string() }),
    }
}

fn require(record: &mut Record, table: &'static str, row: usize, column: &'static str) -> Result<String, CatalogError> {
    take_text(record, table, row, column)?.ok_or(CatalogError::MissingColumn { table, row, column })
}

fn menu_row(row: usize, mut record: Record) -> Result<CatalogRow, CatalogError> {
    let name = require(&mut record, "menu", row, "Name")?;
    let size = require(&mut record, "menu", row, "Size")?;
    let crust = require(&mut record, "menu", row, "Crust")?;
    let kind = take_text(&mut record, "menu", row, "Type")?.unwrap_or_default();

    let mut out = CatalogRow::new(name, size, crust, kind);
    for column in record.keys().cloned().collect::<Vec<_>>() {
        if let Some(value) = take_text(&mut record, "menu", row, &column)? {
            out.columns.insert(column, value);
        }
    }
    Ok(out)
}

fn topping_row(row: usize, mut record: Record) -> Result<ToppingRow, CatalogError> {
    Ok(ToppingRow::new(require(&mut record, "toppings", row, "Toppings")?))
}

pub(crate) fn load_tables(text: &str, format: CatalogFormat) -> Result<LoadedTables, CatalogError> {
    let doc = decode(text, format)?;

    let menu = doc
        .menu
        .into_iter()
        .enumerate()
        .map(|(i, r)| menu_row(i, r))
        .collect::<Result<Vec<_>, _>>()?;

    let toppings = doc
        .toppings
        .map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, r)| topping_row(i, r))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    debug!(
        menu_rows = menu.len(),
        topping_rows = toppings.as_ref().map_or(0, Vec::len),
        ?format,
        "loaded catalog tables"
    );
    Ok(LoadedTables { menu, toppings })
}
