use std::ops::RangeInclusive;

use crate::common::parse_code;
use crate::error::Result;

use super::{PropertyKind, Stage};

/// запись Scripts.txt: кодпоинт или диапазон и название письменности
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRecord
{
    pub line: usize,
    pub codes: RangeInclusive<u32>,
    pub script: String,
}

impl ScriptRecord
{
    /// `0041..005A    ; Latin # L&  [26] ...`, комментарий уже отрезан
    fn parse(line: usize, data: &str) -> Result<Self>
    {
        let (codes, script) = match data.split_once(';') {
            Some(fields) => fields,
            None => return malformed!(line, "missing ';' in '{}'", data),
        };

        let codes = match codes.split_once("..") {
            Some((start, end)) => parse_code(start, line)? ..= parse_code(end, line)?,
            None => {
                let code = parse_code(codes, line)?;
                code ..= code
            }
        };

        if codes.is_empty() {
            return malformed!(
                line,
                "range U+{:04X}..U+{:04X} is reversed",
                codes.start(),
                codes.end()
            );
        }

        // в расширенных файлах после названия могут идти другие поля
        let script = script.split(';').next().unwrap_or_default().trim();

        if script.is_empty() {
            return malformed!(line, "missing script name");
        }

        Ok(Self {
            line,
            codes,
            script: script.to_owned(),
        })
    }
}

/// разбор Scripts.txt: пустые строки и комментарии пропускаются
pub fn parse_scripts(source: &str) -> Result<Vec<ScriptRecord>>
{
    let mut records = vec![];

    for (index, line) in source.lines().enumerate() {
        let data = match line.find('#') {
            Some(position) => &line[.. position],
            None => line,
        }
        .trim();

        if data.is_empty() {
            continue;
        }

        records.push(ScriptRecord::parse(index + 1, data)?);
    }

    Ok(records)
}

/// кодпоинты по письменностям. пропуски не заполняются: кодпоинт без записи
/// просто не относится ни к одной письменности
pub fn build(records: &[ScriptRecord]) -> Stage
{
    let mut stage = Stage::new();

    for record in records {
        stage.extend(PropertyKind::Script, &record.script, record.codes.clone());
    }

    stage
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::Error;
    use crate::tables::PropertyTable;

    const SCRIPTS: &str = "\
# Scripts-15.1.0.txt
# Date: 2023-07-28, 16:01:07 GMT

# ================================================

0000..001F    ; Common # Cc  [32] <control-0000>..<control-001F>
0020          ; Common # Zs       SPACE

0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
0061..007A    ; Latin # L&  [26] LATIN SMALL LETTER A..LATIN SMALL LETTER Z
0021..0023    ; Common # Po   [3] EXCLAMATION MARK..NUMBER SIGN
";

    #[test]
    fn parses_records_and_skips_comments()
    {
        let records = parse_scripts(SCRIPTS).unwrap();

        assert_eq!(records.len(), 5);
        assert_eq!(
            records[1],
            ScriptRecord {
                line: 7,
                codes: 0x20 ..= 0x20,
                script: "Common".to_owned(),
            }
        );
    }

    #[test]
    fn accumulates_codepoints_per_script()
    {
        let records = parse_scripts(SCRIPTS).unwrap();

        let mut table = PropertyTable::new();
        table.merge(build(&records)).unwrap();

        let common = table.get("Common").unwrap();
        assert_eq!(common.len(), 32 + 1 + 3);
        assert_eq!(common.kind(), PropertyKind::Script);
        assert!(common.contains(0x22));

        let latin = table.get("Latin").unwrap();
        assert_eq!(latin.len(), 52);
        assert!(!latin.contains(0x5B));

        // пропуски письменностями не заполняются
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rejects_malformed_lines()
    {
        assert!(matches!(
            parse_scripts("0041..005A Latin\n"),
            Err(Error::MalformedRecord { line: 1, .. })
        ));
        assert!(matches!(
            parse_scripts("# header\n005A..0041 ; Latin\n"),
            Err(Error::MalformedRecord { line: 2, .. })
        ));
        assert!(matches!(
            parse_scripts("0041..00ZZ ; Latin\n"),
            Err(Error::MalformedRecord { .. })
        ));
        assert!(matches!(
            parse_scripts("0041 ;   # no name\n"),
            Err(Error::MalformedRecord { .. })
        ));
    }
}
