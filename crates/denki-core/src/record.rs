use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};

/// Column names of the inventory CSV, in file order.
pub mod columns {
    pub const NO: &str = "No";
    pub const PRODUCT_NAME: &str = "商品名";
    pub const MODEL_NUMBER: &str = "型式";
    pub const CATEGORY: &str = "カテゴリ";
    pub const MANUFACTURER: &str = "メーカー";
    pub const PRICE: &str = "価格";
    pub const SIZE: &str = "サイズ";
    pub const SIZE_UNIT: &str = "サイズ単位";
    pub const COLOR: &str = "カラー";
    pub const FEATURE: &str = "特徴";
    pub const SERIES: &str = "シリーズ";
    pub const CURRENT_STOCK: &str = "在庫数";
    pub const INCOMING_QUANTITY: &str = "入荷数";
    pub const INCOMING_DATE: &str = "入荷日";
    pub const OUTGOING_QUANTITY: &str = "出荷数";
    pub const OUTGOING_DATE: &str = "出荷日";
    pub const STOCK_STATUS: &str = "在庫状況";
    pub const WAREHOUSE_CODE: &str = "倉庫コード";
    pub const ORDER_FLAG: &str = "注文フラグ";
    pub const ORDER_STATUS: &str = "注文ステータス";
    pub const RATING: &str = "評価";
    pub const RELEASE_DATE: &str = "発売日";
    pub const WARRANTY_PERIOD: &str = "保証期間";
    pub const ENERGY_RATING: &str = "省エネ評価";
}

/// Fixed 24-column header of the inventory CSV.
pub const HEADER: [&str; 24] = [
    columns::NO,
    columns::PRODUCT_NAME,
    columns::MODEL_NUMBER,
    columns::CATEGORY,
    columns::MANUFACTURER,
    columns::PRICE,
    columns::SIZE,
    columns::SIZE_UNIT,
    columns::COLOR,
    columns::FEATURE,
    columns::SERIES,
    columns::CURRENT_STOCK,
    columns::INCOMING_QUANTITY,
    columns::INCOMING_DATE,
    columns::OUTGOING_QUANTITY,
    columns::OUTGOING_DATE,
    columns::STOCK_STATUS,
    columns::WAREHOUSE_CODE,
    columns::ORDER_FLAG,
    columns::ORDER_STATUS,
    columns::RATING,
    columns::RELEASE_DATE,
    columns::WARRANTY_PERIOD,
    columns::ENERGY_RATING,
];

/// Date format used by every date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Classification of a record's current stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StockStatus {
    InStock,
    Low,
    AwaitingRestock,
}

impl StockStatus {
    /// Statuses a record with an unremarkable stock level may carry. This is
    /// every variant.
    pub const MID_RANGE: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::Low,
        StockStatus::AwaitingRestock,
    ];

    /// Status forced by the stock level, or `None` when the level leaves the
    /// choice open among [`StockStatus::MID_RANGE`].
    pub fn forced_by(current_stock: u32) -> Option<StockStatus> {
        match current_stock {
            0 => Some(StockStatus::AwaitingRestock),
            1..=4 => Some(StockStatus::Low),
            101.. => Some(StockStatus::InStock),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "在庫あり",
            StockStatus::Low => "残りわずか",
            StockStatus::AwaitingRestock => "入荷待ち",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One inventory item with its descriptive and stock fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecord {
    pub sequence: u32,
    pub product_name: String,
    pub model_number: String,
    pub category: String,
    pub manufacturer: String,
    pub price: u32,
    pub size: u32,
    pub size_unit: String,
    pub color: String,
    pub feature: String,
    pub series: String,
    pub current_stock: u32,
    pub incoming_quantity: u32,
    pub incoming_date: NaiveDate,
    pub outgoing_quantity: u32,
    pub outgoing_date: Option<NaiveDate>,
    pub stock_status: StockStatus,
    pub warehouse_code: String,
    pub order_flag: bool,
    pub order_status: String,
    pub rating: f32,
    pub release_date: NaiveDate,
    pub warranty_years: u8,
    pub energy_rating: String,
}

impl InventoryRecord {
    /// Check the stock and date invariants every record must satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.outgoing_quantity > self.incoming_quantity {
            return Err(self.invalid("outgoing quantity exceeds incoming quantity"));
        }
        if self.current_stock != self.incoming_quantity - self.outgoing_quantity {
            return Err(self.invalid("current stock does not match incoming minus outgoing"));
        }
        if self.incoming_date < self.release_date {
            return Err(self.invalid("incoming date precedes release date"));
        }
        match (self.outgoing_quantity, self.outgoing_date) {
            (0, Some(_)) => return Err(self.invalid("outgoing date set without shipments")),
            (1.., None) => return Err(self.invalid("outgoing shipments without a date")),
            (_, Some(date)) if date < self.incoming_date => {
                return Err(self.invalid("outgoing date precedes incoming date"));
            }
            _ => {}
        }
        if let Some(forced) = StockStatus::forced_by(self.current_stock) {
            if forced != self.stock_status {
                return Err(self.invalid("stock status does not match stock level"));
            }
        } else if !StockStatus::MID_RANGE.contains(&self.stock_status) {
            return Err(self.invalid("stock status outside mid-range set"));
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> Error {
        Error::InvalidRecord {
            sequence: self.sequence,
            message: message.to_string(),
        }
    }
}
