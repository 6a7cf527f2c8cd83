use denki_convert::script::{ImportTarget, import_script};
use denki_convert::sql::{emit_documents, inventory_document, products_document, shipments_document};
use denki_convert::{LookupDefaults, Row, ShipmentKind, escape_sql};
use denki_core::{HEADER, columns};

const DATABASE: &str = "electronics_inventory";

fn row(overrides: &[(&str, &str)]) -> Row {
    let mut row: Row = HEADER
        .iter()
        .map(|name| (name.to_string(), String::new()))
        .collect();
    let defaults = [
        (columns::NO, "1"),
        (columns::PRODUCT_NAME, "ソニー テレビ プロ 55インチ ブラック"),
        (columns::MODEL_NUMBER, "MD-テレ241234"),
        (columns::CATEGORY, "テレビ"),
        (columns::MANUFACTURER, "ソニー"),
        (columns::PRICE, "120000"),
        (columns::SIZE, "55"),
        (columns::SIZE_UNIT, "インチ"),
        (columns::COLOR, "ブラック"),
        (columns::FEATURE, "高画質"),
        (columns::SERIES, "プロ"),
        (columns::CURRENT_STOCK, "40"),
        (columns::INCOMING_QUANTITY, "50"),
        (columns::INCOMING_DATE, "2024-03-01"),
        (columns::OUTGOING_QUANTITY, "10"),
        (columns::OUTGOING_DATE, "2024-04-01"),
        (columns::STOCK_STATUS, "在庫あり"),
        (columns::WAREHOUSE_CODE, "TK01"),
        (columns::ORDER_FLAG, "0"),
        (columns::ORDER_STATUS, "未注文"),
        (columns::RATING, "4.5"),
        (columns::RELEASE_DATE, "2024-01-15"),
        (columns::WARRANTY_PERIOD, "3"),
        (columns::ENERGY_RATING, "★★★"),
    ];
    for (name, value) in defaults.iter().chain(overrides) {
        row.insert(name.to_string(), value.to_string());
    }
    row
}

#[test]
fn products_resolve_lookup_ids() {
    let rows = vec![
        row(&[]),
        row(&[
            (columns::NO, "2"),
            (columns::CATEGORY, "扇風機"),
            (columns::MANUFACTURER, "象印"),
        ]),
    ];
    let mut defaults = LookupDefaults::default();
    let document = products_document(&rows, DATABASE, &mut defaults);

    assert_eq!(document.file_name, "01_products.sql");
    assert_eq!(document.rows, 2);
    assert!(document.contents.starts_with("-- 製品データ\nUSE electronics_inventory;\n\n"));
    assert!(document.contents.contains(
        "(1, 'ソニー テレビ プロ 55インチ ブラック', 'MD-テレ241234', 1, 1, 120000, 55, 'インチ', 'ブラック', '高画質', 'プロ', '2024-01-15', 3, '★★★'),\n(2, "
    ));
    assert!(document.contents.contains(", 15, 25, 120000,"));
    assert!(document.contents.ends_with("'★★★');\n"));
    assert_eq!(defaults, LookupDefaults::default());
}

#[test]
fn unmapped_names_default_to_one_and_are_counted() {
    let rows = vec![row(&[
        (columns::CATEGORY, "ラジオ"),
        (columns::MANUFACTURER, "不明メーカー"),
    ])];
    let mut defaults = LookupDefaults::default();
    let document = products_document(&rows, DATABASE, &mut defaults);

    assert!(document.contents.contains("'MD-テレ241234', 1, 1, 120000"));
    assert_eq!(
        defaults,
        LookupDefaults {
            categories: 1,
            manufacturers: 1,
        }
    );
}

#[test]
fn text_fields_are_escaped() {
    let rows = vec![row(&[(columns::PRODUCT_NAME, "It's a 'TV'")])];
    let mut defaults = LookupDefaults::default();
    let document = products_document(&rows, DATABASE, &mut defaults);

    assert!(document.contents.contains("'It''s a ''TV'''"));
}

#[test]
fn escaping_doubles_each_quote_in_place() {
    for value in ["'", "a'b", "''", "x'y'z'", "テ'レ"] {
        let escaped = escape_sql(value);
        assert_eq!(
            escaped.matches('\'').count(),
            value.matches('\'').count() * 2
        );
        assert_eq!(escaped.replace("''", "'"), value);
    }
    assert_eq!(escape_sql("plain"), "plain");
}

#[test]
fn inventory_row_per_record() {
    let rows = vec![row(&[]), row(&[(columns::NO, "2"), (columns::CURRENT_STOCK, "0")])];
    let document = inventory_document(&rows, DATABASE);

    assert_eq!(document.rows, 2);
    assert!(document.contents.contains(
        "INSERT INTO inventory (product_id, warehouse_id, current_stock, stock_status) VALUES\n(1, 'TK01', 40, '在庫あり'),\n(2, 'TK01', 0, '在庫あり');\n"
    ));
}

#[test]
fn outgoing_filter_drops_empty_dates_and_zero_quantities() {
    let rows = vec![
        row(&[]),
        row(&[
            (columns::NO, "2"),
            (columns::OUTGOING_QUANTITY, "0"),
            (columns::OUTGOING_DATE, ""),
        ]),
        row(&[(columns::NO, "3"), (columns::OUTGOING_DATE, "")]),
        row(&[(columns::NO, "4"), (columns::OUTGOING_QUANTITY, "0")]),
        row(&[(columns::NO, "5"), (columns::OUTGOING_QUANTITY, "abc")]),
    ];
    let document = shipments_document(&rows, DATABASE, ShipmentKind::Outgoing);

    assert_eq!(document.file_name, "04_outgoing_shipments.sql");
    assert_eq!(document.rows, 1);
    assert!(document.contents.contains(
        "INSERT INTO outgoing_shipments (product_id, quantity, shipment_date) VALUES\n(1, 10, '2024-04-01');\n"
    ));
}

#[test]
fn quantity_with_trailing_text_is_not_a_shipment() {
    let rows = vec![
        row(&[(columns::INCOMING_QUANTITY, "12abc")]),
        row(&[(columns::NO, "2"), (columns::INCOMING_QUANTITY, "1.5")]),
        row(&[(columns::NO, "3"), (columns::INCOMING_QUANTITY, " 7 ")]),
    ];

    assert_eq!(ShipmentKind::Incoming.shipped_quantity(&rows[0]), None);
    assert_eq!(ShipmentKind::Incoming.shipped_quantity(&rows[1]), None);
    assert_eq!(ShipmentKind::Incoming.shipped_quantity(&rows[2]), Some(7));

    let document = shipments_document(&rows, DATABASE, ShipmentKind::Incoming);
    assert_eq!(document.rows, 1);
    assert!(document.contents.contains("\n(3, 7, '2024-03-01');\n"));
}

#[test]
fn empty_shipment_set_emits_comment_only() {
    let rows = vec![row(&[(columns::INCOMING_DATE, "")])];
    let document = shipments_document(&rows, DATABASE, ShipmentKind::Incoming);

    assert_eq!(document.rows, 0);
    assert_eq!(
        document.contents,
        "-- 入荷データ\nUSE electronics_inventory;\n\n-- 入荷データがありません\n"
    );
    assert!(!document.contents.contains("INSERT"));
}

#[test]
fn documents_come_in_file_order() {
    let rows = vec![row(&[])];
    let (documents, _) = emit_documents(&rows, DATABASE);
    let names: Vec<&str> = documents.iter().map(|doc| doc.file_name).collect();
    assert_eq!(
        names,
        vec![
            "01_products.sql",
            "02_inventory.sql",
            "03_incoming_shipments.sql",
            "04_outgoing_shipments.sql",
        ]
    );
}

#[test]
fn import_script_runs_schema_then_documents() {
    let rows = vec![row(&[])];
    let (documents, _) = emit_documents(&rows, DATABASE);
    let script = import_script(
        ImportTarget {
            client_command: "mysql -u root -p",
            database: DATABASE,
            schema_path: "../create-database-complete.sql",
        },
        &documents,
    );

    let commands: Vec<&str> = script
        .lines()
        .filter(|line| line.starts_with("mysql"))
        .collect();
    assert_eq!(
        commands,
        vec![
            "mysql -u root -p < ../create-database-complete.sql",
            "mysql -u root -p electronics_inventory < 01_products.sql",
            "mysql -u root -p electronics_inventory < 02_inventory.sql",
            "mysql -u root -p electronics_inventory < 03_incoming_shipments.sql",
            "mysql -u root -p electronics_inventory < 04_outgoing_shipments.sql",
        ]
    );
    assert!(script.starts_with("@echo off\n"));
    assert!(script.contains("echo 製品データをインポート中...\n"));
    assert!(script.ends_with("pause\n"));
}
