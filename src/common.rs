use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// категория неназначенных кодпоинтов, в UnicodeData.txt не перечисляется
pub const UNASSIGNED: &str = "Cn";

/// кодпоинт в шестнадцатеричной записи, не больше LAST_CODEPOINT
pub fn parse_code(source: &str, line: usize) -> Result<u32>
{
    let source = source.trim();

    let code = match u32::from_str_radix(source, 16) {
        Ok(code) => code,
        Err(_) => return malformed!(line, "bad codepoint '{}'", source),
    };

    if code > LAST_CODEPOINT {
        return malformed!(line, "codepoint U+{:04X} is out of range", code);
    }

    Ok(code)
}

/// прочитать файл базы данных целиком
pub fn read_source(path: impl AsRef<Path>) -> Result<String>
{
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests
{
    use super::*;
    use test_case::test_case;

    #[test_case("0041", 0x41; "bmp")]
    #[test_case(" 1F600 ", 0x1F600; "surrounding spaces")]
    #[test_case("10FFFF", LAST_CODEPOINT; "last codepoint")]
    fn parses_codepoints(source: &str, expected: u32)
    {
        assert_eq!(parse_code(source, 1).unwrap(), expected);
    }

    #[test_case("110000"; "beyond unicode")]
    #[test_case("00G1"; "not hex")]
    #[test_case(""; "empty")]
    fn rejects_bad_codepoints(source: &str)
    {
        assert!(matches!(
            parse_code(source, 7),
            Err(Error::MalformedRecord { line: 7, .. })
        ));
    }
}
