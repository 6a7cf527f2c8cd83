//! SQL insert documents rendered from decoded CSV rows.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use denki_core::{DEFAULT_ID, category_id, columns, manufacturer_id};

use crate::parser::{Row, field};

const PRODUCTS_INSERT: &str = "INSERT INTO products (product_id, product_name, model_number, category_id, manufacturer_id, price, size, size_unit, color, features, series, release_date, warranty_period, energy_rating) VALUES";
const INVENTORY_INSERT: &str =
    "INSERT INTO inventory (product_id, warehouse_id, current_stock, stock_status) VALUES";

/// Double every single quote so the value can sit between `'` delimiters.
pub fn escape_sql(value: &str) -> Cow<'_, str> {
    if value.contains('\'') {
        Cow::Owned(value.replace('\'', "''"))
    } else {
        Cow::Borrowed(value)
    }
}

/// A value placed in a `VALUES` tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqlValue<'a> {
    /// Quoted and escaped.
    Text(&'a str),
    /// Embedded as written. An empty value becomes `NULL`.
    Number(&'a str),
    Integer(i64),
}

impl fmt::Display for SqlValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Text(value) => write!(f, "'{}'", escape_sql(value)),
            SqlValue::Number(value) if value.trim().is_empty() => f.write_str("NULL"),
            SqlValue::Number(value) => f.write_str(value.trim()),
            SqlValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

fn tuple(values: &[SqlValue<'_>]) -> String {
    let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("({})", joined.join(", "))
}

/// A rendered SQL file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlDocument {
    pub file_name: &'static str,
    /// Human-readable subject, e.g. `製品データ`.
    pub title: &'static str,
    pub contents: String,
    pub rows: usize,
}

impl SqlDocument {
    fn render(
        file_name: &'static str,
        title: &'static str,
        database: &str,
        insert: &str,
        values: Vec<String>,
    ) -> Self {
        let mut contents = format!("-- {title}\nUSE {database};\n\n");
        if values.is_empty() {
            contents.push_str(&format!("-- {title}がありません\n"));
        } else {
            contents.push_str(insert);
            contents.push('\n');
            contents.push_str(&values.join(",\n"));
            contents.push_str(";\n");
        }
        Self {
            file_name,
            title,
            contents,
            rows: values.len(),
        }
    }
}

/// Rows whose names fell back to [`DEFAULT_ID`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LookupDefaults {
    pub categories: usize,
    pub manufacturers: usize,
}

pub fn products_document(
    rows: &[Row],
    database: &str,
    defaults: &mut LookupDefaults,
) -> SqlDocument {
    let values = rows
        .iter()
        .map(|row| {
            let category = category_id(field(row, columns::CATEGORY)).unwrap_or_else(|| {
                defaults.categories += 1;
                DEFAULT_ID
            });
            let manufacturer =
                manufacturer_id(field(row, columns::MANUFACTURER)).unwrap_or_else(|| {
                    defaults.manufacturers += 1;
                    DEFAULT_ID
                });
            tuple(&[
                SqlValue::Number(field(row, columns::NO)),
                SqlValue::Text(field(row, columns::PRODUCT_NAME)),
                SqlValue::Text(field(row, columns::MODEL_NUMBER)),
                SqlValue::Integer(category.into()),
                SqlValue::Integer(manufacturer.into()),
                SqlValue::Number(field(row, columns::PRICE)),
                SqlValue::Number(field(row, columns::SIZE)),
                SqlValue::Text(field(row, columns::SIZE_UNIT)),
                SqlValue::Text(field(row, columns::COLOR)),
                SqlValue::Text(field(row, columns::FEATURE)),
                SqlValue::Text(field(row, columns::SERIES)),
                SqlValue::Text(field(row, columns::RELEASE_DATE)),
                SqlValue::Number(field(row, columns::WARRANTY_PERIOD)),
                SqlValue::Text(field(row, columns::ENERGY_RATING)),
            ])
        })
        .collect();
    SqlDocument::render("01_products.sql", "製品データ", database, PRODUCTS_INSERT, values)
}

pub fn inventory_document(rows: &[Row], database: &str) -> SqlDocument {
    let values = rows
        .iter()
        .map(|row| {
            tuple(&[
                SqlValue::Number(field(row, columns::NO)),
                SqlValue::Text(field(row, columns::WAREHOUSE_CODE)),
                SqlValue::Number(field(row, columns::CURRENT_STOCK)),
                SqlValue::Text(field(row, columns::STOCK_STATUS)),
            ])
        })
        .collect();
    SqlDocument::render("02_inventory.sql", "在庫データ", database, INVENTORY_INSERT, values)
}

/// Direction of a shipment document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentKind {
    Incoming,
    Outgoing,
}

impl ShipmentKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ShipmentKind::Incoming => "03_incoming_shipments.sql",
            ShipmentKind::Outgoing => "04_outgoing_shipments.sql",
        }
    }

    fn title(self) -> &'static str {
        match self {
            ShipmentKind::Incoming => "入荷データ",
            ShipmentKind::Outgoing => "出荷データ",
        }
    }

    fn table(self) -> &'static str {
        match self {
            ShipmentKind::Incoming => "incoming_shipments",
            ShipmentKind::Outgoing => "outgoing_shipments",
        }
    }

    fn date_column(self) -> &'static str {
        match self {
            ShipmentKind::Incoming => columns::INCOMING_DATE,
            ShipmentKind::Outgoing => columns::OUTGOING_DATE,
        }
    }

    fn quantity_column(self) -> &'static str {
        match self {
            ShipmentKind::Incoming => columns::INCOMING_QUANTITY,
            ShipmentKind::Outgoing => columns::OUTGOING_QUANTITY,
        }
    }

    /// Quantity of a row that qualifies as a shipment: a non-empty date and
    /// a quantity that parses as a positive integer.
    ///
    /// The whole trimmed value must be an integer. A leading-integer prefix
    /// such as `12abc` or `1.5` does not count, which is stricter than a
    /// `parseInt`-style reading that would take `12` and `1`.
    pub fn shipped_quantity(self, row: &Row) -> Option<i64> {
        if field(row, self.date_column()).is_empty() {
            return None;
        }
        field(row, self.quantity_column())
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|quantity| *quantity > 0)
    }
}

pub fn shipments_document(rows: &[Row], database: &str, kind: ShipmentKind) -> SqlDocument {
    let values = rows
        .iter()
        .filter_map(|row| {
            let quantity = kind.shipped_quantity(row)?;
            Some(tuple(&[
                SqlValue::Number(field(row, columns::NO)),
                SqlValue::Integer(quantity),
                SqlValue::Text(field(row, kind.date_column())),
            ]))
        })
        .collect();
    let insert = format!(
        "INSERT INTO {} (product_id, quantity, shipment_date) VALUES",
        kind.table()
    );
    SqlDocument::render(kind.file_name(), kind.title(), database, &insert, values)
}

/// All four documents in file order, plus lookup fallbacks seen while
/// rendering products.
pub fn emit_documents(rows: &[Row], database: &str) -> (Vec<SqlDocument>, LookupDefaults) {
    let mut defaults = LookupDefaults::default();
    let documents = vec![
        products_document(rows, database, &mut defaults),
        inventory_document(rows, database),
        shipments_document(rows, database, ShipmentKind::Incoming),
        shipments_document(rows, database, ShipmentKind::Outgoing),
    ];
    (documents, defaults)
}
