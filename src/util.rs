use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One puzzle of a batch file: its 1-based line number and raw cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleLine {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Splits a line on whitespace and commas. Blank lines and `#` comments
/// yield `None`.
pub fn parse_line(line: &str) -> Option<Vec<String>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return None;
    }

    Some(
        content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

pub fn parse_puzzles<R: BufRead>(reader: R) -> io::Result<Vec<PuzzleLine>> {
    let mut result: Vec<PuzzleLine> = vec![];

    for (idx, line) in reader.lines().enumerate() {
        if let Some(cells) = parse_line(&line?) {
            result.push(PuzzleLine {
                line: idx + 1,
                cells,
            });
        }
    }

    Ok(result)
}

pub fn read_puzzles(path: &Path) -> io::Result<Vec<PuzzleLine>> {
    let file = fs::File::open(path)?;
    parse_puzzles(BufReader::new(file))
}
