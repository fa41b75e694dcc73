use tracing::debug;

use crate::error::{Error, Result};
use crate::tables::{PropertyKind, PropertyTable};

use ranges::{compress, CodepointRange};

pub mod ranges;

/// свойство, сжатое в диапазоны
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedProperty
{
    pub name: String,
    pub kind: PropertyKind,
    pub ranges: Vec<CodepointRange>,
}

impl EncodedProperty
{
    /// количество кодпоинтов во всех диапазонах
    pub fn codepoints(&self) -> usize
    {
        self.ranges.iter().map(|r| r.len() as usize).sum()
    }
}

/// сжать все свойства таблицы в порядке имён. пустое свойство - ошибка сборки
pub fn encode_table(table: &PropertyTable) -> Result<Vec<EncodedProperty>>
{
    table
        .iter()
        .map(|(name, set)| {
            let ranges = compress(set.codes()).ok_or_else(|| Error::EmptyProperty(name.to_owned()))?;

            debug!(property = name, ranges = ranges.len(), codepoints = set.len(), "encoded");

            Ok(EncodedProperty {
                name: name.to_owned(),
                kind: set.kind(),
                ranges,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::tables::PropertySet;

    #[test]
    fn encodes_in_name_order()
    {
        let mut table = PropertyTable::new();
        table
            .insert("Lu", PropertySet::finalize(PropertyKind::GeneralCategory, vec![0x41, 0x42]))
            .unwrap();
        table
            .insert("L", PropertySet::finalize(PropertyKind::MajorCategory, vec![0x41, 0x42, 0x61]))
            .unwrap();

        let encoded = encode_table(&table).unwrap();

        assert_eq!(encoded.len(), 2);
        assert_eq!(encoded[0].name, "L");
        assert_eq!(encoded[0].kind, PropertyKind::MajorCategory);
        assert_eq!(encoded[0].ranges.len(), 2);
        assert_eq!(encoded[0].codepoints(), 3);
        assert_eq!(encoded[1].name, "Lu");
        assert_eq!(encoded[1].ranges, [CodepointRange { start: 0x41, end: 0x42 }]);
    }

    #[test]
    fn empty_property_fails_the_build()
    {
        let mut table = PropertyTable::new();
        table
            .insert("Punct", PropertySet::finalize(PropertyKind::PosixClass, vec![]))
            .unwrap();

        assert!(matches!(
            encode_table(&table),
            Err(Error::EmptyProperty(name)) if name == "Punct"
        ));
    }
}
