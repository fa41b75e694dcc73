use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::encode::EncodedProperty;
use crate::error::{Error, Result};
use crate::stats::PropertyStats;

use format::format_ranges;

pub mod format;

/// блок таблицы одного свойства: количество диапазонов, затем пары начало-конец
pub fn format_property(property: &EncodedProperty) -> String
{
    format!(
        "\n/* '{name}': {kind} */\n\
        static const OnigCodePoint CR_{name}[] = {{\n\
        \t{count},\n\
        {ranges}\
        }}; /* CR_{name} */\n",
        name = property.name,
        kind = property.kind.label(),
        count = property.ranges.len(),
        ranges = format_ranges(property.ranges.as_slice()),
    )
}

/// все свойства в одном тексте, в порядке следования
pub fn format_properties(properties: &[EncodedProperty]) -> String
{
    properties.iter().map(format_property).collect()
}

/// записать таблицы свойств. текст собирается целиком до создания файла
pub fn write_properties(filename: impl AsRef<Path>, properties: &[EncodedProperty]) -> Result<()>
{
    write_file(filename.as_ref(), format_properties(properties))
}

/// записать статистику по свойствам
pub fn write_stats(filename: impl AsRef<Path>, stats: &PropertyStats) -> Result<()>
{
    let mut output = String::new();

    let mut headers: Vec<&String> = stats.blocks.keys().collect();
    headers.sort_by_key(|k| stats.blocks[*k].order);

    headers
        .iter()
        .map(|&k| (k, &stats.blocks[k]))
        .for_each(|(header, block)| {
            output.push_str(format!("{}. {} ({})\n", block.order, header, block.count).as_str());
        });

    output.push('\n');

    headers
        .iter()
        .map(|&k| (k, &stats.blocks[k]))
        .for_each(|(header, block)| {
            output.push_str(format!("{}. {} ({})\n\n", block.order, header, block.count).as_str());

            let mut names: Vec<&String> = block.entries.keys().collect();
            names.sort();

            names
                .iter()
                .map(|&name| (name, &block.entries[name]))
                .for_each(|(name, description)| {
                    output.push_str(format!("{} - {}\n", name, description).as_str());
                });

            output.push('\n');
        });

    write_file(filename.as_ref(), output)
}

fn write_file(path: &Path, output: String) -> Result<()>
{
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;

    write!(file, "{}", output).map_err(io_error)
}
