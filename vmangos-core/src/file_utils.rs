//! File utility functions.

use crate::error::{ConvertError, Result};
use encoding_rs::Encoding;
use std::path::{Path, PathBuf};

/// Resolve an encoding label such as `utf-8` or `windows-1252`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ConvertError::UnknownEncoding(label.to_string()))
}

/// Decode raw bytes, dropping a leading BOM. Malformed input is an error.
pub fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(ConvertError::Decode(format!(
            "Input is not valid {} text",
            encoding.name()
        )));
    }
    Ok(text.into_owned())
}

/// Read a whole text file in the given encoding.
pub fn read_text_file(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = std::fs::read(path)?;
    decode_text(&bytes, encoding)
}

/// `<dir>/<stem>_converted.sql` next to the input file.
pub fn converted_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{}_converted.sql", stem);
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_output_path() {
        assert_eq!(
            converted_output_path(Path::new("/data/dumps/world.save")),
            PathBuf::from("/data/dumps/world_converted.sql")
        );
        assert_eq!(
            converted_output_path(Path::new("world.save")),
            PathBuf::from("world_converted.sql")
        );
        assert_eq!(
            converted_output_path(Path::new("dumps/world.v2.save")),
            PathBuf::from("dumps/world.v2_converted.sql")
        );
    }

    #[test]
    fn test_decode_strips_bom() {
        let bytes = b"\xEF\xBB\xBF[OBJECT]\nTYPE=3";
        let text = decode_text(bytes, encoding_rs::UTF_8).unwrap();
        assert!(text.starts_with("[OBJECT]"));
    }

    #[test]
    fn test_decode_rejects_malformed_utf8() {
        let result = decode_text(b"TYPE=\xFF\xFE3", encoding_rs::UTF_8);
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }

    #[test]
    fn test_decode_latin1() {
        let encoding = encoding_for_label("windows-1252").unwrap();
        let text = decode_text(b"NAME=Caf\xE9", encoding).unwrap();
        assert_eq!(text, "NAME=Café");
    }

    #[test]
    fn test_unknown_encoding_label() {
        assert!(matches!(
            encoding_for_label("klingon-8"),
            Err(ConvertError::UnknownEncoding(_))
        ));
    }
}
