use std::fs;
use std::io;
use std::path::Path;

/// Write `data` to `path`, creating the parent directory when missing.
pub fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory_and_leaves_only_the_file() {
        let dir = std::env::temp_dir().join(format!("denki_output_{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("01_products.sql");

        write_file(&path, b"-- first\n").unwrap();
        write_file(&path, b"-- second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "-- second\n");
        let names: Vec<String> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["01_products.sql".to_string()]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = std::env::temp_dir().join(format!("denki_output_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(dir.join("02_inventory.sql")).unwrap();

        assert!(write_file(&dir.join("02_inventory.sql"), b"x").is_err());
        let names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["02_inventory.sql".to_string()]);

        let _ = fs::remove_dir_all(&dir);
    }
}
