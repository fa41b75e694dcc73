use crate::common::{parse_code, LAST_CODEPOINT, UNASSIGNED};
use crate::error::{Error, Result};

use super::{PropertyKind, Stage};

/// запись UnicodeData.txt: код, название и общая категория (колонки 0, 1, 2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeDataRecord
{
    /// номер строки в файле, для сообщений об ошибках
    pub line: usize,
    pub code: u32,
    pub name: String,
    pub gc: String,
}

/// граница блока, записанного в UnicodeData.txt двумя строками
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeBound
{
    First,
    Last,
}

impl UnicodeDataRecord
{
    pub fn parse(line: usize, source: &str) -> Result<Self>
    {
        let props: Vec<&str> = source.split(';').collect();

        if props.len() < 3 {
            return malformed!(line, "expected at least 3 fields, found {}", props.len());
        }

        let code = parse_code(props[0], line)?;
        let gc = props[2].trim();

        if gc.len() != 2 || !gc.bytes().all(|b| b.is_ascii_alphabetic()) {
            return malformed!(line, "bad general category '{}'", gc);
        }

        Ok(Self {
            line,
            code,
            name: props[1].trim().to_owned(),
            gc: gc.to_owned(),
        })
    }

    /// основная категория - первая буква общей
    pub fn major(&self) -> &str
    {
        &self.gc[.. 1]
    }

    /// <CJK Ideograph, First> .. <CJK Ideograph, Last>
    fn range_bound(&self) -> Option<RangeBound>
    {
        if !self.name.starts_with('<') {
            return None;
        }

        if self.name.ends_with(", First>") {
            Some(RangeBound::First)
        } else if self.name.ends_with(", Last>") {
            Some(RangeBound::Last)
        } else {
            None
        }
    }
}

/// разбор UnicodeData.txt, пустые строки пропускаются
pub fn parse_unicode_data(source: &str) -> Result<Vec<UnicodeDataRecord>>
{
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| UnicodeDataRecord::parse(index + 1, line))
        .collect()
}

/// разложить кодпоинты по общим и основным категориям.
/// кодпоинты, пропущенные в базе, попадают в Cn (и в основную категорию C)
pub fn build(records: &[UnicodeDataRecord]) -> Result<Stage>
{
    let mut stage = Stage::new();

    let mut expected_next: u32 = 0;
    let mut previous: Option<u32> = None;
    let mut range_start: Option<&UnicodeDataRecord> = None;

    for record in records {
        if let Some(previous) = previous {
            if record.code <= previous {
                return Err(Error::Ordering {
                    line: record.line,
                    previous,
                    current: record.code,
                });
            }
        }

        previous = Some(record.code);

        let start = match (range_start.take(), record.range_bound()) {
            (None, Some(RangeBound::First)) => {
                range_start = Some(record);
                continue;
            }
            (None, Some(RangeBound::Last)) => {
                return malformed!(record.line, "'{}' closes a range that was not opened", record.name);
            }
            (Some(first), Some(RangeBound::Last)) => {
                if first.gc != record.gc {
                    return malformed!(
                        record.line,
                        "range U+{:04X}..U+{:04X} changes category from {} to {}",
                        first.code,
                        record.code,
                        first.gc,
                        record.gc
                    );
                }

                first.code
            }
            (Some(first), _) => {
                return malformed!(record.line, "range opened by '{}' is not closed", first.name);
            }
            (None, None) => record.code,
        };

        fill_unassigned(&mut stage, expected_next, start);

        stage.extend(PropertyKind::GeneralCategory, &record.gc, start ..= record.code);
        stage.extend(PropertyKind::MajorCategory, record.major(), start ..= record.code);

        expected_next = record.code + 1;
    }

    if let Some(first) = range_start {
        return malformed!(first.line, "range opened by '{}' is not closed", first.name);
    }

    // хвост до конца кодового пространства
    fill_unassigned(&mut stage, expected_next, LAST_CODEPOINT + 1);

    Ok(stage)
}

/// пробел в базе: кодпоинты from .. to не назначены
fn fill_unassigned(stage: &mut Stage, from: u32, to: u32)
{
    if from >= to {
        return;
    }

    stage.extend(PropertyKind::GeneralCategory, UNASSIGNED, from .. to);
    stage.extend(PropertyKind::MajorCategory, &UNASSIGNED[.. 1], from .. to);
}
