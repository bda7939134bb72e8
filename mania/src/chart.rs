//! The `.osu` chart format, as far as rearranging columns is concerned

use crate::{
    columns::{ColumnCount, ColumnCountError, ColumnRange},
    order::ColumnOrder,
    rewrite::{LineKind, Section, VERSION_KEY, rearrange_lines},
};
use std::{
    ffi::OsString,
    fmt,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use tempfile::Builder;
use thiserror::Error;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// The extension of osu! chart files
pub const EXTENSION: &str = "osu";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// The line terminator a chart is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    Lf,

    /// `\r\n`, which is what the osu! editor writes
    #[default]
    CrLf,
}

impl LineEnding {
    /// Detect the line ending of a text from its first line terminator
    ///
    /// Texts without any terminator get the default.
    pub fn detect(text: &str) -> Self {
        match text.find(['\r', '\n']) {
            Some(index) if text[index..].starts_with("\r\n") => Self::CrLf,
            Some(_) => Self::Lf,
            None => Self::default(),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// An osu! chart, loaded as a sequence of lines
///
/// The chart format is a line-based, INI-like text format with `[Sections]`. Rearranging
/// columns only touches two kinds of lines, so there's no need to parse charts into a full
/// object model. A [`Chart`] just keeps the lines around (and the line ending they were
/// separated by), so unknown content survives a round-trip untouched.
///
/// ```no_run
/// # use mania::{chart::{output_path, Chart}, columns::ColumnRange, order::ColumnOrder};
/// # use std::path::Path;
/// let path = Path::new("song [Normal].osu");
/// let chart = Chart::from_path(path)?;
///
/// let columns = chart.column_count(ColumnRange::default())?;
/// let order = ColumnOrder::parse("2143", columns)?;
///
/// // Writes to "song [Normal] [2143].osu"
/// chart.rearrange(&order).to_path(output_path(path, &order)?)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    lines: Vec<String>,
    line_ending: LineEnding,
}

impl Chart {
    /// Create a chart from its lines (without terminators)
    pub fn new(lines: Vec<String>, line_ending: LineEnding) -> Self {
        Self { lines, line_ending }
    }

    /// Split a text into a chart
    ///
    /// Lines can be terminated by `\n`, `\r\n` or a lone `\r`. A terminator at the very end of
    /// the text doesn't start another (empty) line, and a leading byte order mark is dropped.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let line_ending = LineEnding::detect(text);

        let mut lines = Vec::new();
        let mut rest = text;

        while let Some(index) = rest.find(['\r', '\n']) {
            lines.push(rest[..index].to_owned());

            let terminator = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[index + terminator..];
        }

        if !rest.is_empty() {
            lines.push(rest.to_owned());
        }

        Self { lines, line_ending }
    }

    /// Deserialize a chart from an arbitrary I/O reader
    ///
    /// Fails with [`io::ErrorKind::InvalidData`] if the content isn't valid UTF-8.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, io::Error>
    where
        R: Read,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        Ok(Self::parse(&text))
    }

    /// Deserialize a chart from a path on disk (.osu)
    pub fn from_path<P>(path: P) -> Result<Self, io::Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let chart = Self::from_reader(std::fs::File::open(path)?)?;
        tracing::debug!(path = %path.display(), lines = chart.lines.len(), "loaded chart");

        Ok(chart)
    }

    /// The lines making up the chart, without terminators
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The line terminator used when serializing
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// The number of columns, from the `CircleSize:` line
    pub fn column_count(&self, range: ColumnRange) -> Result<ColumnCount, ColumnCountError> {
        ColumnCount::from_lines(&self.lines, range)
    }

    /// The difficulty name, from the first `Version:` line
    pub fn version(&self) -> Option<&str> {
        self.lines
            .iter()
            .find_map(|line| line.strip_prefix(VERSION_KEY))
            .map(str::trim)
    }

    /// The number of notes (non-blank lines) in the `[HitObjects]` section
    pub fn hit_object_count(&self) -> usize {
        let mut section = Section::default();

        self.lines
            .iter()
            .filter(|line| section.advance(line) == LineKind::HitObject)
            .count()
    }

    /// Create a new chart with the columns rearranged according to `order`
    ///
    /// See [`rearrange_lines()`] for what changes.
    pub fn rearrange(&self, order: &ColumnOrder) -> Self {
        Self {
            lines: rearrange_lines(&self.lines, order),
            line_ending: self.line_ending,
        }
    }

    /// Serialize the chart to an arbitrary I/O writer
    ///
    /// Every line is terminated, including the last one.
    pub fn to_writer<W>(&self, mut writer: W) -> Result<(), io::Error>
    where
        W: Write,
    {
        let ending = self.line_ending.as_str();
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(ending.as_bytes())?;
        }

        writer.flush()
    }

    /// Serialize the chart to a path on disk (.osu)
    ///
    /// The chart is written to a temporary file next to `path` first, which is then moved into
    /// place. If anything fails, nothing is left behind at `path`.
    pub fn to_path<P>(&self, path: P) -> Result<(), io::Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        builder.prefix(".mania").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            builder.permissions(Permissions::from_mode(0o644));
        }

        let mut file = builder.tempfile_in(directory)?;
        self.to_writer(io::BufWriter::new(file.as_file_mut()))?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|error| error.error)?;

        tracing::debug!(path = %path.display(), lines = self.lines.len(), "wrote chart");

        Ok(())
    }
}

impl From<&str> for Chart {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ending = self.line_ending.as_str();
        for line in &self.lines {
            write!(f, "{line}{ending}")?;
        }

        Ok(())
    }
}

/// The path a rearranged chart is written to
///
/// This is the original path, with the order in brackets appended to the file stem:
/// `charts/song.osu` becomes `charts/song [2143].osu`.
pub fn output_path(input: &Path, order: &ColumnOrder) -> Result<PathBuf, OutputPathError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| OutputPathError::NoFileName(input.to_owned()))?;

    let mut name = OsString::from(stem);
    name.push(format!(" [{order}]"));

    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    Ok(input.with_file_name(name))
}

/// Error returned from [`output_path()`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputPathError {
    /// The input path doesn't end in a file name
    #[error("{} does not point to a file", .0.display())]
    NoFileName(PathBuf),
}
