use std::fmt;
use std::str::FromStr;

use encoding_rs::{EUC_JP, Encoding, ISO_2022_JP, SHIFT_JIS, UTF_8};
use serde::{Deserialize, Serialize};

/// File-name marker selecting the Shift_JIS decoder.
const SHIFT_JIS_MARKER: &str = "sjis";

/// Text encodings the converter can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Utf8,
    ShiftJis,
    EucJp,
    Iso2022Jp,
}

impl TextEncoding {
    /// Encodings tried when repairing a file of unknown encoding, in order.
    pub const REPAIR_ORDER: [TextEncoding; 4] = [
        TextEncoding::Utf8,
        TextEncoding::ShiftJis,
        TextEncoding::EucJp,
        TextEncoding::Iso2022Jp,
    ];

    /// Pick the decoder from the input file name, falling back to UTF-8.
    pub fn for_file_name(name: &str) -> Self {
        if name.contains(SHIFT_JIS_MARKER) {
            TextEncoding::ShiftJis
        } else {
            TextEncoding::Utf8
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf8",
            TextEncoding::ShiftJis => "shift_jis",
            TextEncoding::EucJp => "euc_jp",
            TextEncoding::Iso2022Jp => "iso_2022_jp",
        }
    }

    /// Decode raw bytes, returning `None` on any malformed sequence.
    ///
    /// A leading byte-order mark for the encoding is removed.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        let (text, had_errors) = self.encoding().decode_with_bom_removal(bytes);
        if had_errors {
            None
        } else {
            Some(text.into_owned())
        }
    }

    fn encoding(self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => UTF_8,
            TextEncoding::ShiftJis => SHIFT_JIS,
            TextEncoding::EucJp => EUC_JP,
            TextEncoding::Iso2022Jp => ISO_2022_JP,
        }
    }
}

/// Decode bytes of unknown encoding by trying [`TextEncoding::REPAIR_ORDER`].
///
/// Several encodings can decode the same bytes without errors (EUC-JP kana
/// also reads as half-width katakana under Shift_JIS, and ISO-2022-JP is
/// plain ASCII to the others). Among the clean decodes the one with the
/// fewest half-width katakana and control characters wins, earlier
/// encodings winning ties.
pub fn detect_and_decode(bytes: &[u8]) -> Option<(TextEncoding, String)> {
    TextEncoding::REPAIR_ORDER
        .iter()
        .filter_map(|&encoding| encoding.decode(bytes).map(|text| (encoding, text)))
        .min_by_key(|(_, text)| suspicious_chars(text))
}

fn suspicious_chars(text: &str) -> usize {
    text.chars()
        .filter(|&c| {
            ('\u{ff61}'..='\u{ff9f}').contains(&c)
                || (c.is_control() && !matches!(c, '\t' | '\r' | '\n'))
        })
        .count()
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "shift_jis" | "shift-jis" | "sjis" | "cp932" => Ok(TextEncoding::ShiftJis),
            "euc_jp" | "euc-jp" => Ok(TextEncoding::EucJp),
            "iso_2022_jp" | "iso-2022-jp" => Ok(TextEncoding::Iso2022Jp),
            other => Err(format!(
                "unsupported encoding '{other}' (expected utf8, shift_jis, euc_jp or iso_2022_jp)"
            )),
        }
    }
}
