use chrono::{Datelike, NaiveDate};
use rand::Rng;

use denki_core::catalog::{
    CATEGORIES, COLORS, FEATURES, MANUFACTURERS, MODEL_PREFIXES, ORDER_STATUSES, RATINGS, SERIES,
    WAREHOUSE_CODES, WARRANTY_YEARS,
};
use denki_core::{Category, InventoryRecord, StockStatus};

use super::{date_between, pick, price_between, window_start};

const INCOMING_MIN: u32 = 10;
const INCOMING_MAX: u32 = 200;
const ORDER_PROBABILITY: f64 = 0.3;
const MAX_ENERGY_STARS: usize = 5;

/// Token arrangements a product name may follow.
pub const NAME_PATTERNS: usize = 5;

struct NameParts<'a> {
    manufacturer: &'a str,
    category: &'a str,
    series: &'a str,
    feature: &'a str,
    color: &'a str,
    size: String,
}

impl NameParts<'_> {
    fn render(&self, pattern: usize) -> String {
        let Self {
            manufacturer: m,
            category: c,
            series: s,
            feature: f,
            color: col,
            size,
        } = self;
        match pattern {
            0 => format!("{m} {c} {s} {size} {col}"),
            1 => format!("{m} {s} {c} {f} {size}"),
            2 => format!("{m} {c} {f} {col} {size}"),
            3 => format!("{m} {s} {size} {c} {col}"),
            _ => format!("{m} {c} {col} {size} {f}"),
        }
    }
}

/// Draws inventory records from the reference catalog.
///
/// Every draw is independent. Stock and date ordering hold by construction.
#[derive(Debug, Clone, Copy)]
pub struct InventoryGenerator {
    today: NaiveDate,
    window_start: NaiveDate,
}

impl InventoryGenerator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            window_start: window_start(today),
        }
    }

    pub fn generate<R>(&self, sequence: u32, rng: &mut R) -> InventoryRecord
    where
        R: Rng + ?Sized,
    {
        let category = pick(CATEGORIES, rng);
        let manufacturer = *pick(MANUFACTURERS, rng);
        let color = *pick(COLORS, rng);
        let feature = *pick(FEATURES, rng);
        let series = *pick(SERIES, rng);
        let size = rng.random_range(category.size_range());

        let release_date = date_between(self.window_start, self.today, rng);
        let model_number = model_number(category, release_date.year(), rng);
        let parts = NameParts {
            manufacturer,
            category: category.name,
            series,
            feature,
            color,
            size: format!("{size}{}", category.size_unit),
        };
        let product_name = parts.render(rng.random_range(0..NAME_PATTERNS));
        let price = price_between(category.price_min, category.price_max, rng);

        let incoming_quantity = rng.random_range(INCOMING_MIN..=INCOMING_MAX);
        let outgoing_quantity = rng.random_range(0..=incoming_quantity);
        let current_stock = incoming_quantity - outgoing_quantity;

        let incoming_date = date_between(release_date, self.today, rng);
        let outgoing_date =
            (outgoing_quantity > 0).then(|| date_between(incoming_date, self.today, rng));

        let stock_status = StockStatus::forced_by(current_stock)
            .unwrap_or_else(|| *pick(&StockStatus::MID_RANGE, rng));

        let warehouse_code = *pick(WAREHOUSE_CODES, rng);
        let order_flag = rng.random_bool(ORDER_PROBABILITY);
        let order_status = if order_flag {
            *pick(&ORDER_STATUSES[1..], rng)
        } else {
            ORDER_STATUSES[0]
        };
        let rating = *pick(RATINGS, rng);
        let warranty_years = *pick(WARRANTY_YEARS, rng);
        let energy_rating = "★".repeat(rng.random_range(1..=MAX_ENERGY_STARS));

        InventoryRecord {
            sequence,
            product_name,
            model_number,
            category: category.name.to_string(),
            manufacturer: manufacturer.to_string(),
            price,
            size,
            size_unit: category.size_unit.to_string(),
            color: color.to_string(),
            feature: feature.to_string(),
            series: series.to_string(),
            current_stock,
            incoming_quantity,
            incoming_date,
            outgoing_quantity,
            outgoing_date,
            stock_status,
            warehouse_code: warehouse_code.to_string(),
            order_flag,
            order_status: order_status.to_string(),
            rating,
            release_date,
            warranty_years,
            energy_rating,
        }
    }
}

/// `<prefix>-<category code><yy><serial>`, e.g. `MD-テレ241234`.
fn model_number<R>(category: &Category, year: i32, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let prefix = pick(MODEL_PREFIXES, rng);
    let serial = rng.random_range(1000..=9999);
    format!(
        "{prefix}-{}{:02}{serial}",
        category.code(),
        year.rem_euclid(100)
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn name_patterns_are_distinct() {
        let parts = NameParts {
            manufacturer: "ソニー",
            category: "テレビ",
            series: "プロ",
            feature: "高画質",
            color: "ブラック",
            size: "55インチ".to_string(),
        };
        let rendered: std::collections::HashSet<String> =
            (0..NAME_PATTERNS).map(|idx| parts.render(idx)).collect();
        assert_eq!(rendered.len(), NAME_PATTERNS);
        assert!(rendered.contains("ソニー テレビ プロ 55インチ ブラック"));
    }

    #[test]
    fn model_number_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let category = &CATEGORIES[0];
        let model = model_number(category, 2024, &mut rng);
        let (prefix, rest) = model.split_once('-').expect("prefix separator");
        assert!(MODEL_PREFIXES.contains(&prefix));
        assert!(rest.starts_with("テレ24"));
        let serial: String = rest.chars().skip(4).collect();
        assert_eq!(serial.len(), 4);
        assert!(serial.parse::<u32>().is_ok_and(|value| (1000..=9999).contains(&value)));
    }
}
