//! Reads experiment data files: one whitespace-separated pair of unsigned
//! integers per line, e.g. `u v` edge lists or `id color` assignments.
//!
//! Blank lines and lines starting with `#` are skipped. Anything else that
//! isn't exactly two u32 words is an error reporting the 1-indexed line.
//!
//! Files are mmapped, so the user must promise they won't be concurrently
//! modified while being read.

use std::fs::File;
use std::path::Path;

use bstr::ByteSlice;
use memmap::MmapOptions;

use crate::error::{Error, Result};

/// An iterator over byte slices separated by a delimiter.
/// The iterated-over slices won't contain the delimiter, but may be empty.
#[derive(Clone)]
struct DelimIter<'a> {
    bytes: &'a [u8],
    pos: usize,
    delim: u8,
}

impl<'a> DelimIter<'a> {
    fn new(bytes: &'a [u8], delim: u8) -> Self {
        Self {
            bytes,
            pos: 0,
            delim,
        }
    }
}

impl<'a> Iterator for DelimIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.pos == self.bytes.len() {
            None
        } else {
            let start = self.pos;
            let bytes = &self.bytes[start..];
            let (end, new_pos) = match bytes.find_byte(self.delim) {
                None => (bytes.len(), bytes.len()),
                Some(next_line) => (next_line, next_line + 1),
            };
            self.pos = start + new_pos;
            Some(&bytes[..end])
        }
    }
}

pub(crate) fn read_pairs(path: &Path) -> Result<Vec<(u32, u32)>> {
    let file = File::open(path)?;
    // mapping a zero-length file fails on most platforms
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }
    // SAFETY: see module documentation, the caller promises no concurrent writers
    let mmap = unsafe { MmapOptions::new().map(&file)? };
    parse_pairs(&mmap, path)
}

fn parse_pairs(bytes: &[u8], path: &Path) -> Result<Vec<(u32, u32)>> {
    let parse_error = |line: usize, message: String| Error::Parse {
        path: path.to_owned(),
        line,
        message,
    };

    let mut pairs = Vec::new();
    for (i, line) in DelimIter::new(bytes, b'\n').enumerate() {
        let line = line.trim();
        if line.is_empty() || line[0] == b'#' {
            continue;
        }
        let mut words = line.fields();
        let mut next_u32 = || -> Result<u32> {
            let word = words
                .next()
                .ok_or_else(|| parse_error(i + 1, "expected two integers".to_owned()))?;
            word.to_str()
                .ok()
                .and_then(|w| w.parse().ok())
                .ok_or_else(|| {
                    parse_error(i + 1, format!("bad integer {:?}", word.to_str_lossy()))
                })
        };
        let pair = (next_u32()?, next_u32()?);
        if words.next().is_some() {
            return Err(parse_error(i + 1, "trailing words after pair".to_owned()));
        }
        pairs.push(pair);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn parse(text: &str) -> Result<Vec<(u32, u32)>> {
        parse_pairs(text.as_bytes(), &PathBuf::from("test.edges"))
    }

    #[test]
    fn test_delim_iter() {
        let words: Vec<_> = DelimIter::new(b"a b  c", b' ').collect();
        assert_eq!(words, vec![&b"a"[..], &b"b"[..], &b""[..], &b"c"[..]]);
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let pairs = parse("# header\n0 1\n\n  2\t3  \r\n#4 5\n6 7").unwrap();
        assert_eq!(pairs, vec![(0, 1), (2, 3), (6, 7)]);
    }

    #[test]
    fn test_parse_errors_report_line() {
        match parse("0 1\n2\n") {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
        match parse("0 1\n1 -3\n") {
            Err(Error::Parse { line, message, .. }) => {
                assert_eq!(line, 2);
                assert!(message.contains("-3"), "{}", message);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse("0 1 2\n").is_err());
    }

    #[test]
    fn test_read_pairs_from_disk() {
        let dir = std::env::temp_dir().join(format!("fairsub-reader-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let full = dir.join("full.edges");
        fs::write(&full, "0 1\n1 2\n").unwrap();
        assert_eq!(read_pairs(&full).unwrap(), vec![(0, 1), (1, 2)]);

        let empty = dir.join("empty.edges");
        fs::write(&empty, "").unwrap();
        assert!(read_pairs(&empty).unwrap().is_empty());

        assert!(matches!(
            read_pairs(&dir.join("missing.edges")),
            Err(Error::Io(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
