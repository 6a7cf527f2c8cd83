//! Windows batch script that imports the generated SQL files in order.

use crate::sql::SqlDocument;

/// File name of the generated import script.
pub const IMPORT_SCRIPT_NAME: &str = "import_all.bat";

/// Database client settings referenced by the script.
#[derive(Debug, Clone, Copy)]
pub struct ImportTarget<'a> {
    pub client_command: &'a str,
    pub database: &'a str,
    pub schema_path: &'a str,
}

/// Render the script: schema first, then each document in the given order.
///
/// Nothing is executed or checked; the script only names the files.
pub fn import_script(target: ImportTarget<'_>, documents: &[SqlDocument]) -> String {
    let mut script = String::from("@echo off\n");
    script.push_str("echo 電化製品データベースへのデータインポートを開始します...\n");
    push_step(
        &mut script,
        "データベーススキーマを作成中...",
        &format!("{} < {}", target.client_command, target.schema_path),
    );
    for document in documents {
        push_step(
            &mut script,
            &format!("{}をインポート中...", document.title),
            &format!(
                "{} {} < {}",
                target.client_command, target.database, document.file_name
            ),
        );
    }
    script.push_str("echo.\n");
    script.push_str("echo インポート完了！\n");
    script.push_str("pause\n");
    script
}

fn push_step(script: &mut String, label: &str, command: &str) {
    script.push_str("echo.\n");
    script.push_str(&format!("echo {label}\n"));
    script.push_str(command);
    script.push('\n');
}
