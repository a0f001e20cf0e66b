//! Splitting a world dump into `[OBJECT]` blocks.
//!
//! ```text
//! [OBJECT]
//! TYPE=3
//! XYZ=-8913.2 -137.6 80.5 2.1
//! SPAWN=1234
//! [object]
//! ...
//! ```

const OBJECT_MARKER: &str = "[OBJECT]";

/// Trimmed, non-empty lines found between two markers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawBlock<'a> {
    pub lines: Vec<&'a str>,
}

impl<'a> RawBlock<'a> {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn is_marker(line: &str) -> bool {
    line.get(..OBJECT_MARKER.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(OBJECT_MARKER))
}

/// Iterator over the blocks of a decoded dump, in file order.
///
/// Content before the first marker forms a block of its own, as does
/// anything after the last one. Blocks without lines are never yielded.
pub struct BlockReader<'a, I> {
    lines: I,
    current: RawBlock<'a>,
    done: bool,
}

impl<'a, I> BlockReader<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            current: RawBlock::default(),
            done: false,
        }
    }
}

impl<'a, I> Iterator for BlockReader<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = RawBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for raw in self.lines.by_ref() {
            let line = raw.trim();
            if is_marker(line) {
                let block = std::mem::take(&mut self.current);
                if !block.is_empty() {
                    return Some(block);
                }
            } else if !line.is_empty() {
                self.current.lines.push(line);
            }
        }

        self.done = true;
        let block = std::mem::take(&mut self.current);
        (!block.is_empty()).then_some(block)
    }
}

/// Blocks of a whole dump held in memory. `\n`, `\r\n` and a lone `\r`
/// all end a line.
pub fn blocks(text: &str) -> BlockReader<'_, std::str::Split<'_, [char; 2]>> {
    BlockReader::new(text.split(['\r', '\n']))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_markers() {
        let text = "[OBJECT]\nTYPE=3\nXYZ=1 2 3 4\n[OBJECT]\nTYPE=5\n";
        let found: Vec<_> = blocks(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].lines, vec!["TYPE=3", "XYZ=1 2 3 4"]);
        assert_eq!(found[1].lines, vec!["TYPE=5"]);
    }

    #[test]
    fn test_marker_is_case_insensitive_and_trimmed() {
        let text = "  [object]  \nTYPE=3\n\t[Object] trailing text\nTYPE=5";
        let found: Vec<_> = blocks(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].lines, vec!["TYPE=5"]);
    }

    #[test]
    fn test_trailing_block_without_marker_is_flushed() {
        let found: Vec<_> = blocks("[OBJECT]\nTYPE=3\nSPAWN=1").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].lines, vec!["TYPE=3", "SPAWN=1"]);
    }

    #[test]
    fn test_empty_lines_and_blocks_are_skipped() {
        let text = "\n\n[OBJECT]\n\n[OBJECT]\n   \nTYPE=3\n\n  XYZ=1 2 3 4  \n[OBJECT]\n";
        let found: Vec<_> = blocks(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].lines, vec!["TYPE=3", "XYZ=1 2 3 4"]);
    }

    #[test]
    fn test_content_before_first_marker() {
        let found: Vec<_> = blocks("VERSION=2\n[OBJECT]\nTYPE=3").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].lines, vec!["VERSION=2"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(blocks("").count(), 0);
        assert_eq!(blocks("[OBJECT]\n[OBJECT]").count(), 0);
    }

    #[test]
    fn test_windows_line_endings() {
        let found: Vec<_> = blocks("[OBJECT]\r\nTYPE=3\r\nSPAWN=7\r\n").collect();
        assert_eq!(found[0].lines, vec!["TYPE=3", "SPAWN=7"]);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let found: Vec<_> = blocks("[OBJECT]\rTYPE=3\rXYZ=1 2 3 4\rSPAWN=7\r[OBJECT]\rTYPE=5\r").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].lines, vec!["TYPE=3", "XYZ=1 2 3 4", "SPAWN=7"]);
        assert_eq!(found[1].lines, vec!["TYPE=5"]);
    }
}
