use std::collections::{BTreeMap, HashMap};

use crate::common::LAST_CODEPOINT;
use crate::error::{Error, Result};

pub mod categories;
pub mod scripts;

/// вид свойства, определяет подпись блока в выходном файле
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind
{
    /// двухбуквенная категория: Lu, Nd, Cn ...
    GeneralCategory,
    /// первая буква категории: L, N, C ...
    MajorCategory,
    /// письменность из Scripts.txt
    Script,
    /// составной класс (POSIX bracket)
    PosixClass,
}

impl PropertyKind
{
    pub fn label(&self) -> &'static str
    {
        match self {
            PropertyKind::GeneralCategory => "General Category",
            PropertyKind::MajorCategory => "Major Category",
            PropertyKind::Script => "Script",
            PropertyKind::PosixClass => "POSIX Bracket",
        }
    }
}

/// готовый набор кодпоинтов свойства: отсортирован, без повторов, больше не меняется
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySet
{
    kind: PropertyKind,
    codes: Vec<u32>,
}

impl PropertySet
{
    /// зафиксировать накопленные кодпоинты
    pub fn finalize(kind: PropertyKind, mut codes: Vec<u32>) -> Self
    {
        codes.sort_unstable();
        codes.dedup();

        Self { kind, codes }
    }

    pub fn kind(&self) -> PropertyKind
    {
        self.kind
    }

    pub fn codes(&self) -> &[u32]
    {
        self.codes.as_slice()
    }

    pub fn len(&self) -> usize
    {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.codes.is_empty()
    }

    pub fn contains(&self, code: u32) -> bool
    {
        self.codes.binary_search(&code).is_ok()
    }
}

/// кодпоинты, накопленные одной стадией сборки. до слияния с таблицей никому не видны
#[derive(Debug, Default)]
pub struct Stage
{
    sets: HashMap<String, (PropertyKind, Vec<u32>)>,
}

impl Stage
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// добавить кодпоинт в свойство; если свойства нет - создать
    pub fn push(&mut self, kind: PropertyKind, name: &str, code: u32)
    {
        self.touch(kind, name).push(code);
    }

    pub fn extend(&mut self, kind: PropertyKind, name: &str, codes: impl IntoIterator<Item = u32>)
    {
        self.touch(kind, name).extend(codes);
    }

    fn touch(&mut self, kind: PropertyKind, name: &str) -> &mut Vec<u32>
    {
        &mut self
            .sets
            .entry(name.to_owned())
            .or_insert_with(|| (kind, vec![]))
            .1
    }

    /// кодпоинты свойства в порядке добавления
    pub fn get(&self, name: &str) -> Option<&[u32]>
    {
        self.sets.get(name).map(|(_, codes)| codes.as_slice())
    }

    pub fn len(&self) -> usize
    {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.sets.is_empty()
    }
}

/// таблица свойств: имя -> готовый набор кодпоинтов, упорядочена по имени
#[derive(Debug, Default)]
pub struct PropertyTable
{
    sets: BTreeMap<String, PropertySet>,
}

impl PropertyTable
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// влить результат стадии. свойства того же вида объединяются,
    /// совпадение имени со свойством другого вида - ошибка
    pub fn merge(&mut self, stage: Stage) -> Result<()>
    {
        for (name, (kind, mut codes)) in stage.sets {
            if let Some(existing) = self.sets.get(&name) {
                if existing.kind != kind {
                    return Err(Error::DuplicateProperty(name));
                }

                codes.extend_from_slice(existing.codes());
            }

            self.sets.insert(name, PropertySet::finalize(kind, codes));
        }

        Ok(())
    }

    /// добавить вычисленный набор под новым именем
    pub fn insert(&mut self, name: &str, set: PropertySet) -> Result<()>
    {
        if self.sets.contains_key(name) {
            return Err(Error::DuplicateProperty(name.to_owned()));
        }

        self.sets.insert(name.to_owned(), set);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&PropertySet>
    {
        self.sets.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySet)>
    {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn len(&self) -> usize
    {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.sets.is_empty()
    }

    /// каждый кодпоинт 0 ..= 10FFFF должен входить ровно в одну основную и ровно в одну общую категорию
    pub fn verify_partition(&self) -> Result<()>
    {
        for kind in [PropertyKind::GeneralCategory, PropertyKind::MajorCategory] {
            let mut counts = vec![0usize; LAST_CODEPOINT as usize + 1];

            self.sets
                .values()
                .filter(|set| set.kind == kind)
                .flat_map(|set| set.codes.iter())
                .for_each(|&code| counts[code as usize] += 1);

            if let Some((code, &count)) = counts.iter().enumerate().find(|(_, count)| **count != 1) {
                return Err(Error::Partition {
                    code: code as u32,
                    count,
                });
            }
        }

        Ok(())
    }
}
