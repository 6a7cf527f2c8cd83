//! Reference tables shared by the generator and the converter.
//!
//! Category and manufacturer identifiers are the 1-based position of the
//! entry in [`CATEGORIES`] and [`MANUFACTURERS`]. The converter resolves
//! display names through [`category_id`] and [`manufacturer_id`].

use std::ops::RangeInclusive;

use serde::Serialize;

/// Identifier used when a name is missing from a lookup table.
pub const DEFAULT_ID: u32 = 1;

/// A product category with the ranges every record in it must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub price_min: u32,
    pub price_max: u32,
    pub size_unit: &'static str,
    pub size_min: u32,
    pub size_max: u32,
}

impl Category {
    const fn new(
        name: &'static str,
        price: (u32, u32),
        size_unit: &'static str,
        size: (u32, u32),
    ) -> Self {
        Self {
            name,
            price_min: price.0,
            price_max: price.1,
            size_unit,
            size_min: size.0,
            size_max: size.1,
        }
    }

    pub fn price_range(&self) -> RangeInclusive<u32> {
        self.price_min..=self.price_max
    }

    pub fn size_range(&self) -> RangeInclusive<u32> {
        self.size_min..=self.size_max
    }

    /// First two characters of the category name, used in model numbers.
    pub fn code(&self) -> String {
        self.name.chars().take(2).collect()
    }
}

pub const CATEGORIES: &[Category] = &[
    Category::new("テレビ", (30_000, 300_000), "インチ", (24, 85)),
    Category::new("冷蔵庫", (50_000, 350_000), "L", (100, 600)),
    Category::new("洗濯機", (30_000, 200_000), "kg", (5, 12)),
    Category::new("エアコン", (40_000, 250_000), "畳", (6, 20)),
    Category::new("電子レンジ", (10_000, 80_000), "L", (15, 30)),
    Category::new("掃除機", (8_000, 100_000), "W", (500, 2000)),
    Category::new("オーディオ", (15_000, 200_000), "W", (20, 200)),
    Category::new("デジタルカメラ", (30_000, 250_000), "MP", (12, 50)),
    Category::new("ノートパソコン", (60_000, 300_000), "インチ", (13, 17)),
    Category::new("タブレット", (20_000, 150_000), "インチ", (8, 13)),
    Category::new("スマートフォン", (30_000, 200_000), "インチ", (5, 7)),
    Category::new("炊飯器", (8_000, 100_000), "合", (3, 10)),
    Category::new("ドライヤー", (3_000, 30_000), "W", (800, 1500)),
    Category::new("加湿器", (5_000, 50_000), "L", (2, 10)),
    Category::new("扇風機", (3_000, 40_000), "cm", (20, 40)),
];

pub const MANUFACTURERS: &[&str] = &[
    "ソニー",
    "パナソニック",
    "シャープ",
    "東芝",
    "日立",
    "三菱電機",
    "アイリスオーヤマ",
    "ダイキン",
    "富士通",
    "キヤノン",
    "エプソン",
    "カシオ",
    "アップル",
    "サムスン",
    "LG",
    "ファーウェイ",
    "デル",
    "レノボ",
    "エイスース",
    "バルミューダ",
    "ダイソン",
    "フィリップス",
    "ブラウン",
    "タイガー",
    "象印",
];

pub const COLORS: &[&str] = &[
    "ブラック",
    "ホワイト",
    "シルバー",
    "ゴールド",
    "レッド",
    "ブルー",
    "グリーン",
    "ピンク",
    "パープル",
    "ブラウン",
    "ベージュ",
    "グレー",
    "ネイビー",
    "オレンジ",
    "イエロー",
    "チタン",
    "マットブラック",
    "クリア",
];

pub const FEATURES: &[&str] = &[
    "省エネ",
    "ハイスペック",
    "コンパクト",
    "大容量",
    "高画質",
    "高音質",
    "防水",
    "軽量",
    "スマート機能",
    "音声操作",
    "AI搭載",
    "IoT対応",
    "タッチパネル",
    "リモコン付き",
    "自動運転",
    "静音設計",
    "高速処理",
    "大画面",
    "4K対応",
    "5G対応",
    "防塵",
    "長時間バッテリー",
    "急速充電",
];

pub const SERIES: &[&str] = &[
    "プレミアム",
    "スタンダード",
    "エコ",
    "プロ",
    "ライト",
    "アドバンス",
    "ネオ",
    "スマート",
    "クラシック",
    "ウルトラ",
    "マックス",
    "ミニ",
    "スリム",
    "ワイド",
    "ハイブリッド",
    "デラックス",
    "エリート",
    "ベーシック",
];

pub const WAREHOUSE_CODES: &[&str] = &["TK01", "OS02", "NG03", "FK04", "SP05", "KN06", "HK07", "SD08"];

/// Order statuses. The first entry means "not ordered".
pub const ORDER_STATUSES: &[&str] = &["未注文", "注文済", "キャンセル", "納品済", "返品"];

pub const RATINGS: &[f32] = &[1.0, 2.0, 3.0, 3.5, 4.0, 4.5, 5.0];

pub const WARRANTY_YEARS: &[u8] = &[1, 3, 5];

pub const MODEL_PREFIXES: &[&str] = &["MD", "EL", "AP", "HM", "DG", "SM", "AV", "PC"];

pub fn category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.name == name)
}

/// Resolve a category display name to its identifier.
pub fn category_id(name: &str) -> Option<u32> {
    CATEGORIES
        .iter()
        .position(|category| category.name == name)
        .map(|idx| idx as u32 + 1)
}

/// Resolve a manufacturer display name to its identifier.
pub fn manufacturer_id(name: &str) -> Option<u32> {
    MANUFACTURERS
        .iter()
        .position(|manufacturer| *manufacturer == name)
        .map(|idx| idx as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ids_follow_table_order() {
        assert_eq!(category_id("テレビ"), Some(1));
        assert_eq!(category_id("扇風機"), Some(15));
        assert_eq!(manufacturer_id("ソニー"), Some(1));
        assert_eq!(manufacturer_id("LG"), Some(15));
        assert_eq!(manufacturer_id("象印"), Some(25));
    }

    #[test]
    fn unknown_names_are_unmapped() {
        assert_eq!(category_id("ラジオ"), None);
        assert_eq!(manufacturer_id(""), None);
    }

    #[test]
    fn category_code_counts_characters() {
        let tv = category("テレビ").expect("tv category");
        assert_eq!(tv.code(), "テレ");
        let ac = category("エアコン").expect("ac category");
        assert_eq!(ac.code(), "エア");
    }

    #[test]
    fn ranges_are_well_formed() {
        for category in CATEGORIES {
            assert!(category.price_min <= category.price_max, "{}", category.name);
            assert!(category.size_min <= category.size_max, "{}", category.name);
        }
    }
}
