use std::fs;
use std::path::PathBuf;

use denki_convert::{
    ConversionEngine, ConvertError, ConvertOptions, REPAIRED_INPUT_NAME, TextEncoding,
    repair_encoding,
};

/// "No,商品名,カテゴリ\n1,ソニー テレビ,テレビ\n" in EUC-JP.
const EUC_JP_CSV: &[u8] = &[
    0x4e, 0x6f, 0x2c, 0xbe, 0xa6, 0xc9, 0xca, 0xcc, 0xbe, 0x2c, 0xa5, 0xab, 0xa5, 0xc6, 0xa5,
    0xb4, 0xa5, 0xea, 0x0a, 0x31, 0x2c, 0xa5, 0xbd, 0xa5, 0xcb, 0xa1, 0xbc, 0x20, 0xa5, 0xc6,
    0xa5, 0xec, 0xa5, 0xd3, 0x2c, 0xa5, 0xc6, 0xa5, 0xec, 0xa5, 0xd3, 0x0a,
];

fn options_for(dir: &PathBuf) -> ConvertOptions {
    ConvertOptions {
        input_dir: dir.clone(),
        out_dir: dir.join("sql_import"),
        ..ConvertOptions::default()
    }
}

#[test]
fn euc_jp_export_is_rewritten_as_utf8() {
    let dir = temp_dir("euc");
    let input = dir.join("electronics_data.csv");
    let output = dir.join(REPAIRED_INPUT_NAME);
    fs::write(&input, EUC_JP_CSV).expect("write euc-jp csv");

    let repair = repair_encoding(&input, &output).expect("repair encoding");

    assert_eq!(repair.detected, TextEncoding::EucJp);
    let text = fs::read_to_string(&output).expect("read repaired csv");
    assert_eq!(text, "No,商品名,カテゴリ\n1,ソニー テレビ,テレビ\n");
    assert_eq!(repair.bytes_written, text.len());
    assert_eq!(fs::read(&input).expect("read original"), EUC_JP_CSV);
}

#[test]
fn conversion_stays_strict_until_repaired() {
    let dir = temp_dir("strict");
    let input = dir.join("electronics_data.csv");
    fs::write(&input, EUC_JP_CSV).expect("write euc-jp csv");

    let before = ConversionEngine::new(options_for(&dir)).run();
    assert!(matches!(before, Err(ConvertError::Decode { .. })));
    assert!(!dir.join("sql_import").exists());

    repair_encoding(&input, &dir.join(REPAIRED_INPUT_NAME)).expect("repair encoding");
    let result = ConversionEngine::new(options_for(&dir))
        .run()
        .expect("convert repaired csv");

    assert!(result.report.input_path.ends_with(REPAIRED_INPUT_NAME));
    assert_eq!(result.report.encoding, TextEncoding::Utf8);
    assert_eq!(result.report.rows_decoded, 1);
    let products = fs::read_to_string(&result.files[0]).expect("read products");
    assert!(products.contains("(1, 'ソニー テレビ', '', 1, 1, NULL,"));
}

#[test]
fn shift_jis_export_is_detected() {
    let dir = temp_dir("sjis");
    let input = dir.join("legacy.csv");
    // "テレビ" in Shift_JIS.
    fs::write(&input, [0x83, 0x65, 0x83, 0x8c, 0x83, 0x72]).expect("write sjis");

    let repair = repair_encoding(&input, &dir.join("out.csv")).expect("repair encoding");
    assert_eq!(repair.detected, TextEncoding::ShiftJis);
    assert_eq!(
        fs::read_to_string(dir.join("out.csv")).expect("read output"),
        "テレビ"
    );
}

#[test]
fn undetectable_bytes_are_reported() {
    let dir = temp_dir("unknown");
    let input = dir.join("broken.csv");
    let output = dir.join("broken_fixed.csv");
    fs::write(&input, [b'N', b'o', 0xff, 0xff, b'\n']).expect("write bytes");

    let result = repair_encoding(&input, &output);
    assert!(matches!(result, Err(ConvertError::UnknownEncoding { .. })));
    assert!(!output.exists());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = temp_dir("absent");
    let result = repair_encoding(&dir.join("nope.csv"), &dir.join("out.csv"));
    assert!(matches!(result, Err(ConvertError::Read { .. })));
}

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("denki_repair_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}
