// src/file.rs

use std::{error::Error, fs, path::Path};

/// Create the directory if missing; refuse to write through a file.
pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Treat a `-o` value as a directory when it already is one or the user
/// wrote a trailing separator.
pub fn is_dir_hint(p: &Path) -> bool {
    if p.is_dir() {
        return true;
    }
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Write a whole file, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_separator_is_a_dir_hint() {
        assert!(is_dir_hint(Path::new("out/")));
        assert!(is_dir_hint(Path::new("out\\")));
        assert!(!is_dir_hint(Path::new("out/report.html")));
    }

    #[test]
    fn write_text_creates_parents() {
        let dir = std::env::temp_dir().join(format!("debt_scrape_file_{}", std::process::id()));
        let path = dir.join("nested").join("x.txt");
        write_text(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = std::env::temp_dir().join(format!("debt_scrape_dirfile_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("not_a_dir");
        fs::write(&file, "x").unwrap();
        assert!(ensure_directory(&file).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
