//! Line emitter - lazy lines across a sequence of files
//!
//! Files are processed strictly one at a time: the next file is opened only
//! after the previous one is exhausted, and the open handle is released the
//! moment its lines run out or the iterator is dropped early.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::pipeline::PipelineError;

/// Lazy sequence of lines read from a sequence of file paths.
///
/// Lines keep their terminators and arrive in file-then-line order. An open
/// or read failure is yielded as [`PipelineError::Io`] carrying the
/// offending path; the consumer decides whether to stop.
pub struct FileLines<I> {
    paths: I,
    current: Option<OpenFile>,
}

struct OpenFile {
    path: PathBuf,
    reader: BufReader<File>,
}

impl<I> FileLines<I>
where
    I: Iterator<Item = PathBuf>,
{
    pub fn new(paths: I) -> Self {
        Self {
            paths,
            current: None,
        }
    }
}

impl<I> Iterator for FileLines<I>
where
    I: Iterator<Item = PathBuf>,
{
    type Item = Result<String, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(open) = self.current.as_mut() {
                let mut line = String::new();
                match open.reader.read_line(&mut line) {
                    // exhausted: release the handle before the next file
                    Ok(0) => self.current = None,
                    Ok(_) => return Some(Ok(line)),
                    Err(err) => {
                        let path = open.path.clone();
                        self.current = None;
                        return Some(Err(PipelineError::Io { path, source: err }));
                    }
                }
            } else {
                let path = self.paths.next()?;
                match File::open(&path) {
                    Ok(file) => {
                        self.current = Some(OpenFile {
                            path,
                            reader: BufReader::new(file),
                        });
                    }
                    Err(err) => return Some(Err(PipelineError::Io { path, source: err })),
                }
            }
        }
    }
}
