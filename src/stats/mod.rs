use std::collections::HashMap;

use crate::encode::EncodedProperty;

/// статистика по сжатым свойствам, сгруппированная по виду свойства
#[derive(Debug, Clone, Default)]
pub struct PropertyStats
{
    pub blocks: HashMap<String, PropertyStatsBlock>,
}

#[derive(Debug, Clone)]
pub struct PropertyStatsBlock
{
    pub count: usize,
    pub order: usize,
    pub entries: HashMap<String, String>,
}

impl PropertyStats
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// собрать статистику: для каждого свойства - количество диапазонов и кодпоинтов
    pub fn collect(properties: &[EncodedProperty]) -> Self
    {
        let mut stats = Self::new();

        for property in properties {
            stats.touch(property.kind.label()).inc(
                &property.name,
                format!(
                    "{} ranges, {} codepoints",
                    property.ranges.len(),
                    property.codepoints()
                ),
            );
        }

        stats
    }

    /// добавляем ключ
    pub fn touch(&mut self, key: impl AsRef<str>) -> &mut PropertyStatsBlock
    {
        let order = self.blocks.values().map(|e| e.order).max().unwrap_or(0) + 1;

        self.blocks
            .entry(key.as_ref().to_string())
            .or_insert(PropertyStatsBlock {
                count: 0,
                order,
                entries: HashMap::new(),
            })
    }

    /// количество свойств во всех блоках
    pub fn total(&self) -> usize
    {
        self.blocks.values().map(|b| b.count).sum()
    }
}

impl PropertyStatsBlock
{
    /// учесть свойство и его описание
    pub fn inc(&mut self, name: impl AsRef<str>, description: impl AsRef<str>)
    {
        self.count += 1;
        self.entries
            .insert(name.as_ref().to_string(), description.as_ref().to_string());
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::encode::ranges::CodepointRange;
    use crate::tables::PropertyKind;

    #[test]
    fn groups_properties_by_kind()
    {
        let properties = vec![
            EncodedProperty {
                name: "L".to_owned(),
                kind: PropertyKind::MajorCategory,
                ranges: vec![CodepointRange { start: 0x41, end: 0x5A }],
            },
            EncodedProperty {
                name: "Ll".to_owned(),
                kind: PropertyKind::GeneralCategory,
                ranges: vec![
                    CodepointRange { start: 0x61, end: 0x7A },
                    CodepointRange::single(0xB5),
                ],
            },
            EncodedProperty {
                name: "Lu".to_owned(),
                kind: PropertyKind::GeneralCategory,
                ranges: vec![CodepointRange { start: 0x41, end: 0x5A }],
            },
        ];

        let stats = PropertyStats::collect(&properties);

        assert_eq!(stats.blocks.len(), 2);
        assert_eq!(stats.total(), 3);

        let general = &stats.blocks["General Category"];
        assert_eq!(general.count, 2);
        assert_eq!(general.order, 2);
        assert_eq!(general.entries["Ll"], "2 ranges, 27 codepoints");
        assert_eq!(stats.blocks["Major Category"].order, 1);
    }
}
