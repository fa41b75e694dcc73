use crate::encode::ranges::CodepointRange;

/// кодпоинт в выходной таблице: 0x и не меньше 4 шестнадцатеричных цифр
pub fn format_code(code: u32) -> String
{
    format!("{:#06x}", code)
}

/// диапазоны по одному на строку: `\t0x0041, 0x005a,`
pub fn format_ranges(ranges: &[CodepointRange]) -> String
{
    let mut output = String::new();

    for range in ranges {
        output.push('\t');
        output.push_str(format_code(range.start).as_str());
        output.push_str(", ");
        output.push_str(format_code(range.end).as_str());
        output.push_str(",\n");
    }

    output
}

#[cfg(test)]
mod tests
{
    use super::*;
    use test_case::test_case;

    #[test_case(0, "0x0000")]
    #[test_case(0x5A, "0x005a")]
    #[test_case(0xFFFF, "0xffff")]
    #[test_case(0x10FFFF, "0x10ffff")]
    fn formats_codepoints(code: u32, expected: &str)
    {
        assert_eq!(format_code(code), expected);
    }
}
