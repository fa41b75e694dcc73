/// непрерывный диапазон кодпоинтов, границы включены
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRange
{
    pub start: u32,
    pub end: u32,
}

impl CodepointRange
{
    pub fn single(code: u32) -> Self
    {
        Self {
            start: code,
            end: code,
        }
    }

    /// количество кодпоинтов в диапазоне
    pub fn len(&self) -> u32
    {
        self.end - self.start + 1
    }
}

/// сжать отсортированные кодпоинты без повторов в минимальный список диапазонов.
/// соседние кодпоинты всегда склеиваются, поэтому между диапазонами есть хотя бы один пропуск.
/// None - кодпоинтов нет
pub fn compress(codes: &[u32]) -> Option<Vec<CodepointRange>>
{
    debug_assert!(codes.windows(2).all(|w| w[0] < w[1]));

    let (&first, rest) = codes.split_first()?;

    let mut ranges = vec![];
    let mut current = CodepointRange::single(first);

    for &code in rest {
        match code == current.end + 1 {
            true => current.end = code,
            false => {
                ranges.push(current);
                current = CodepointRange::single(code);
            }
        }
    }

    ranges.push(current);

    Some(ranges)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use test_case::test_case;

    fn pairs(codes: &[u32]) -> Vec<(u32, u32)>
    {
        compress(codes)
            .unwrap()
            .iter()
            .map(|r| (r.start, r.end))
            .collect()
    }

    fn expand(ranges: &[CodepointRange]) -> Vec<u32>
    {
        ranges.iter().flat_map(|r| r.start ..= r.end).collect()
    }

    #[test_case(&[5, 6, 7, 10, 11, 20], &[(5, 7), (10, 11), (20, 20)]; "mixed runs")]
    #[test_case(&[42], &[(42, 42)]; "single codepoint")]
    #[test_case(&[0, 1, 2, 3], &[(0, 3)]; "one run")]
    #[test_case(&[1, 3, 5], &[(1, 1), (3, 3), (5, 5)]; "no neighbours")]
    #[test_case(&[0x10FFFE, 0x10FFFF], &[(0x10FFFE, 0x10FFFF)]; "end of codespace")]
    fn compresses(codes: &[u32], expected: &[(u32, u32)])
    {
        assert_eq!(pairs(codes), expected);
    }

    #[test]
    fn empty_input_has_no_ranges()
    {
        assert_eq!(compress(&[]), None);
    }

    #[test]
    fn ranges_are_lossless_and_separated()
    {
        let codes: Vec<u32> = (0 .. 3000u32)
            .filter(|c| c % 7 != 0 && c % 11 != 3)
            .chain(0xE000 ..= 0xF8FF)
            .chain([0x1F600, 0x10FFFF])
            .collect();

        let ranges = compress(&codes).unwrap();

        assert_eq!(expand(&ranges), codes);
        assert_eq!(ranges.iter().map(|r| r.len() as usize).sum::<usize>(), codes.len());

        for pair in ranges.windows(2) {
            assert!(pair[0].start <= pair[0].end);
            assert!(pair[0].end + 1 < pair[1].start);
        }
    }
}
