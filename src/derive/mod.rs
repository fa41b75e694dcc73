//! составные классы (POSIX brackets): объединение и разность готовых наборов таблицы.
//!
//! порядок в [`DERIVATIONS`] и есть порядок вычисления: класс может ссылаться на другой
//! класс через [`Operand::Class`], только если тот уже вычислен и лежит в таблице.

use std::borrow::Cow;

use tracing::{debug, info};

use crate::common::{LAST_CODEPOINT, UNASSIGNED};
use crate::error::{Error, Result};
use crate::tables::{PropertyKind, PropertySet, PropertyTable};

use Operand::*;


/// операнд выражения над наборами
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand
{
    /// категория или письменность; если в базе её нет - пустой набор
    Property(&'static str),
    /// ранее вычисленный составной класс
    Class(&'static str),
    /// диапазон кодпоинтов, границы включены
    Range(u32, u32),
    /// отдельные кодпоинты
    Codes(&'static [u32]),
}

/// правило вычисления класса: name = union - minus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation
{
    pub name: &'static str,
    pub union: Vec<Operand>,
    pub minus: Vec<Operand>,
}

lazy_static! {
    /// составные классы в порядке вычисления
    pub static ref DERIVATIONS: Vec<Derivation> = vec![
        derivation!("Alnum" = [Property("L"), Property("M"), Property("Nd")]),
        derivation!("Alpha" = [Property("L"), Property("M")]),
        derivation!("Any" = [Range(0, LAST_CODEPOINT)]),
        derivation!("Ascii" = [Range(0x0000, 0x007F)]),
        derivation!("Assigned" = [Range(0, LAST_CODEPOINT)] - [Property(UNASSIGNED)]),
        derivation!("Blank" = [Property("Zs"), Codes(&[0x0009])]),
        derivation!("Cntrl" = [
            Property("Cc"),
            Property("Cf"),
            Property(UNASSIGNED),
            Property("Co"),
            Property("Cs")
        ]),
        derivation!("Digit" = [Property("Nd")]),
        derivation!("LC" = [Property("Lu"), Property("Ll"), Property("Lt")]),
        derivation!("Lower" = [Property("Ll")]),
        derivation!("Punct" = [
            Property("Pc"),
            Property("Pd"),
            Property("Pe"),
            Property("Pf"),
            Property("Pi"),
            Property("Po"),
            Property("Ps")
        ]),
        derivation!("Space" = [
            Property("Zs"),
            Property("Zl"),
            Property("Zp"),
            Range(0x0009, 0x000D),
            Codes(&[0x0085])
        ]),
        derivation!("Upper" = [Property("Lu")]),
        derivation!("Xdigit" = [Range(0x0030, 0x0039), Range(0x0041, 0x0046), Range(0x0061, 0x0066)]),
        derivation!("Word" = [Property("L"), Property("M"), Property("Nd"), Property("Pc")]),
        // видимые символы: всё, кроме пробельных, управляющих, неназначенных и суррогатов
        derivation!("Graph" = [Range(0, LAST_CODEPOINT)] - [
            Class("Space"),
            Property("Cc"),
            Property(UNASSIGNED),
            Property("Cs")
        ]),
        derivation!("Print" = [Class("Graph"), Class("Space")]),
    ];
}

/// вычислить все составные классы и добавить их в таблицу
pub fn derive_all(table: &mut PropertyTable) -> Result<()>
{
    derive_with(table, DERIVATIONS.as_slice())?;

    info!(classes = DERIVATIONS.len(), "derived classes");

    Ok(())
}

/// вычислить классы по порядку; каждый следующий видит предыдущие
pub fn derive_with(table: &mut PropertyTable, derivations: &[Derivation]) -> Result<()>
{
    for derivation in derivations {
        let set = derive(table, derivation)?;

        debug!(class = derivation.name, codepoints = set.len(), "derived");

        table.insert(derivation.name, set)?;
    }

    Ok(())
}

/// вычислить один класс. наборы таблицы только читаются
pub fn derive(table: &PropertyTable, derivation: &Derivation) -> Result<PropertySet>
{
    let mut union = vec![];

    for operand in derivation.union.iter() {
        union.extend_from_slice(&resolve(table, derivation, operand)?);
    }

    // объединение может содержать повторы, finalize их убирает
    let union = PropertySet::finalize(PropertyKind::PosixClass, union);

    if derivation.minus.is_empty() {
        return Ok(union);
    }

    let mut minus = vec![];

    for operand in derivation.minus.iter() {
        minus.extend_from_slice(&resolve(table, derivation, operand)?);
    }

    let minus = PropertySet::finalize(PropertyKind::PosixClass, minus);

    Ok(PropertySet::finalize(
        PropertyKind::PosixClass,
        difference(union.codes(), minus.codes()),
    ))
}

/// кодпоинты операнда
fn resolve<'a>(
    table: &'a PropertyTable,
    derivation: &Derivation,
    operand: &Operand,
) -> Result<Cow<'a, [u32]>>
{
    let codes = match *operand {
        Property(name) => match table.get(name) {
            Some(set) => Cow::Borrowed(set.codes()),
            None => {
                debug!(class = derivation.name, property = name, "property is absent, read as empty");
                Cow::Borrowed(&[][..])
            }
        },
        Class(name) => match table.get(name) {
            Some(set) if set.kind() == PropertyKind::PosixClass => Cow::Borrowed(set.codes()),
            _ => {
                return Err(Error::UnresolvedClass {
                    class: derivation.name.to_owned(),
                    operand: name.to_owned(),
                })
            }
        },
        Range(start, end) => Cow::Owned((start ..= end).collect()),
        Codes(codes) => Cow::Borrowed(codes),
    };

    Ok(codes)
}

/// разность отсортированных наборов без повторов
fn difference(from: &[u32], minus: &[u32]) -> Vec<u32>
{
    let mut result = Vec::with_capacity(from.len());
    let mut minus = minus.iter().peekable();

    for &code in from {
        while minus.next_if(|&&m| m < code).is_some() {}

        if minus.peek() != Some(&&code) {
            result.push(code);
        }
    }

    result
}
