//! The interactive rearranging session
//!
//! A [`Session`] alternates between asking for a chart and asking for column orders to apply to
//! it. It never prints anything itself: every input produces a [`Reply`] with the messages to
//! show, which [`terminal`](crate::terminal) takes care of.

use crate::utils::{clean_path_input, display_name, has_extension};
use mania::{
    chart::{output_path, Chart, OutputPathError, EXTENSION},
    columns::{ColumnCount, ColumnCountError, ColumnRange},
    order::{ColumnOrder, OrderInput, ParseOrderError, NEW_FILE_SENTINEL},
};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// The input that ends the session when asked for a chart
pub const EXIT_SENTINEL: &str = "exit";

/// How a [`Message`] should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
    Plain,
}

/// A line of output for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tone: Tone,
    pub text: String,
}

impl Message {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Tone::Error, text)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }
}

/// Whether the session wants more input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// The response to a single line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub messages: Vec<Message>,
    pub step: Step,
}

impl Reply {
    fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            step: Step::Continue,
        }
    }

    fn exit() -> Self {
        Self {
            messages: Vec::new(),
            step: Step::Exit,
        }
    }
}

/// The chart a session is currently rearranging
struct Loaded {
    path: PathBuf,
    chart: Chart,
    columns: ColumnCount,
}

/// An interactive session, see the [module documentation](self)
pub struct Session {
    range: ColumnRange,
    loaded: Option<Loaded>,
}

impl Session {
    /// Start a session, asking for a chart first
    pub fn new(range: ColumnRange) -> Self {
        Self {
            range,
            loaded: None,
        }
    }

    /// The column count of the loaded chart, if a chart is loaded
    pub fn columns(&self) -> Option<ColumnCount> {
        self.loaded.as_ref().map(|loaded| loaded.columns)
    }

    /// The text to ask the user for the next input with
    pub fn prompt(&self) -> String {
        match self.columns() {
            Some(columns) => format!(
                "Enter new column order (e.g., for {columns} = {}) or '{}' for different file: ",
                ColumnOrder::example(columns),
                NEW_FILE_SENTINEL,
            ),
            None => "File path: ".to_owned(),
        }
    }

    /// Handle a line of user input
    pub fn submit(&mut self, input: &str) -> Reply {
        if self.loaded.is_some() {
            self.submit_order(input)
        } else {
            self.submit_path(input)
        }
    }

    fn submit_path(&mut self, input: &str) -> Reply {
        let input = clean_path_input(input);

        if input.is_empty() {
            return Reply::new(vec![Message::error(SessionError::PathEmpty.to_string())]);
        }

        if input.eq_ignore_ascii_case(EXIT_SENTINEL) {
            return Reply::exit();
        }

        self.open(Path::new(input))
    }

    /// Try to load the chart at `path`, to apply orders to afterwards
    pub fn open(&mut self, path: &Path) -> Reply {
        self.loaded = None;

        let path = match validate_path(path) {
            Ok(path) => path,
            Err(error) => return Reply::new(vec![Message::error(error.to_string())]),
        };

        let mut messages = vec![Message::info(format!("File found: {}", display_name(&path)))];

        match load(&path, self.range) {
            Ok((chart, columns)) => {
                messages.push(Message::info(format!("Detected column count: {columns}")));
                self.loaded = Some(Loaded {
                    path,
                    chart,
                    columns,
                });
            }
            Err(error) => messages.push(Message::error(error.to_string())),
        }

        Reply::new(messages)
    }

    fn submit_order(&mut self, input: &str) -> Reply {
        let Some(loaded) = &self.loaded else {
            return Reply::new(Vec::new());
        };

        let order = match OrderInput::parse(input, loaded.columns) {
            Ok(OrderInput::Order(order)) => order,
            Ok(OrderInput::NewFile) => {
                self.loaded = None;
                return Reply::new(Vec::new());
            }
            Err(error) => return Reply::new(order_error(error, loaded.columns)),
        };

        let mut messages = vec![Message::info(format!("Applying column order: {order}"))];

        match write(&loaded.path, &loaded.chart, &order) {
            Ok(output) => {
                messages.push(Message::success(format!(
                    "Successfully created: {}",
                    display_name(&output)
                )));
                messages.push(Message::plain(""));

                // Back to picking a chart
                self.loaded = None;
            }
            Err(error) => messages.push(Message::error(error.to_string())),
        }

        Reply::new(messages)
    }
}

/// The messages for a rejected order, with an example where that helps
fn order_error(error: ParseOrderError, columns: ColumnCount) -> Vec<Message> {
    let show_example = matches!(
        error,
        ParseOrderError::LengthMismatch { .. } | ParseOrderError::NotAPermutation { .. }
    );

    let mut messages = vec![Message::error(SessionError::from(error).to_string())];
    if show_example {
        messages.push(Message::plain(format!(
            "Example: {}",
            ColumnOrder::example(columns)
        )));
    }

    messages
}

/// Check that `path` points to an existing `.osu` file
pub fn validate_path(path: &Path) -> Result<PathBuf, SessionError> {
    if path.as_os_str().is_empty() {
        return Err(SessionError::PathEmpty);
    }

    if !path.is_file() {
        return Err(SessionError::FileNotFound(path.to_owned()));
    }

    if !has_extension(path, EXTENSION) {
        return Err(SessionError::WrongExtension(path.to_owned()));
    }

    Ok(path.to_owned())
}

/// Read the chart at `path` and determine its column count
pub fn load(path: &Path, range: ColumnRange) -> Result<(Chart, ColumnCount), SessionError> {
    let chart = Chart::from_path(path).map_err(|source| SessionError::Read {
        path: path.to_owned(),
        source,
    })?;

    let columns = chart.column_count(range)?;

    Ok((chart, columns))
}

/// Rearrange `chart` (read from `path`) and write it next to the original
///
/// Returns the path of the new chart.
pub fn write(path: &Path, chart: &Chart, order: &ColumnOrder) -> Result<PathBuf, SessionError> {
    let output = output_path(path, order)?;

    chart
        .rearrange(order)
        .to_path(&output)
        .map_err(|source| SessionError::Write {
            path: output.clone(),
            source,
        })?;

    tracing::info!(input = %path.display(), output = %output.display(), %order, "rearranged chart");

    Ok(output)
}

/// Everything that can go wrong during a session
///
/// None of these end the session, they're shown to the user, who can then try again.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Path cannot be empty.")]
    PathEmpty,

    #[error("File not found.")]
    FileNotFound(PathBuf),

    #[error("File must have .osu extension.")]
    WrongExtension(PathBuf),

    #[error("{0}.")]
    ColumnCount(#[from] ColumnCountError),

    #[error("{0}.")]
    Order(#[from] ParseOrderError),

    #[error("{0}.")]
    OutputPath(#[from] OutputPathError),

    #[error("Could not read {}: {source}", display_name(.path))]
    Read { path: PathBuf, source: io::Error },

    #[error("Could not write {}: {source}", display_name(.path))]
    Write { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CHART: &str = "osu file format v14\n\
        \n\
        [Metadata]\n\
        Version:Hard\n\
        \n\
        [Difficulty]\n\
        CircleSize:4\n\
        \n\
        [HitObjects]\n\
        64,192,1000,1,0,0:0:0:0:\n\
        448,192,1500,1,0,0:0:0:0:\n";

    fn setup(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn texts(reply: &Reply) -> Vec<&str> {
        reply.messages.iter().map(|m| m.text.as_str()).collect()
    }

    fn file_count(dir: &TempDir) -> usize {
        fs::read_dir(dir.path()).unwrap().count()
    }

    #[test]
    fn full_round() {
        let (dir, path) = setup("chart.osu", CHART);
        let mut session = Session::new(ColumnRange::default());
        assert_eq!(session.prompt(), "File path: ");

        let reply = session.submit(&format!("\"{}\"\n", path.display()));
        assert_eq!(reply.step, Step::Continue);
        assert_eq!(texts(&reply), ["File found: chart.osu", "Detected column count: 4K"]);
        assert_eq!(
            session.prompt(),
            "Enter new column order (e.g., for 4K = 2134) or 'new' for different file: "
        );

        let reply = session.submit("21/43\n");
        assert_eq!(
            texts(&reply),
            [
                "Applying column order: 2143",
                "Successfully created: chart [2143].osu",
                ""
            ]
        );
        assert_eq!(reply.messages[1].tone, Tone::Success);

        let written = fs::read_to_string(dir.path().join("chart [2143].osu")).unwrap();
        assert!(written.contains("Version:Hard [2143]\n"));
        assert!(written.ends_with("\n192,192,1000,1,0,0:0:0:0:\n320,192,1500,1,0,0:0:0:0:\n"));

        // Back to asking for a chart
        assert_eq!(session.columns(), None);
        assert_eq!(session.submit("exit").step, Step::Exit);
    }

    #[test]
    fn path_errors() {
        let mut session = Session::new(ColumnRange::default());

        let reply = session.submit("  \n");
        assert_eq!(texts(&reply), ["Path cannot be empty."]);
        assert_eq!(reply.messages[0].tone, Tone::Error);

        let reply = session.submit("/definitely/not/here.osu");
        assert_eq!(texts(&reply), ["File not found."]);

        let (_dir, path) = setup("chart.txt", CHART);
        let reply = session.submit(path.to_str().unwrap());
        assert_eq!(texts(&reply), ["File must have .osu extension."]);

        assert_eq!(session.columns(), None);
        assert_eq!(session.submit("EXIT").step, Step::Exit);
    }

    #[test]
    fn extension_is_case_insensitive() {
        let (_dir, path) = setup("CHART.OSU", CHART);
        let mut session = Session::new(ColumnRange::default());

        session.open(&path);
        assert_eq!(session.columns().map(ColumnCount::get), Some(4));
    }

    #[test]
    fn column_count_errors() {
        let mut session = Session::new(ColumnRange::default());

        let (dir, path) = setup("one.osu", &CHART.replace("CircleSize:4", "CircleSize:1"));
        let reply = session.open(&path);
        assert_eq!(
            texts(&reply),
            [
                "File found: one.osu",
                "Unsupported column count 1K, only 3K to 9K is supported."
            ]
        );
        assert_eq!(session.columns(), None);
        assert_eq!(file_count(&dir), 1);

        let (_dir, path) = setup("none.osu", &CHART.replace("CircleSize:4", "HPDrainRate:4"));
        let reply = session.open(&path);
        assert_eq!(reply.messages[1].text, "Could not find CircleSize in file.");
        assert_eq!(session.columns(), None);
    }

    #[test]
    fn order_errors() {
        let (dir, path) = setup("chart.osu", CHART);
        let mut session = Session::new(ColumnRange::default());
        session.open(&path);

        assert_eq!(texts(&session.submit("")), ["Order cannot be empty."]);
        assert_eq!(
            texts(&session.submit("12")),
            ["Order must have exactly 4 digits.", "Example: 2134"]
        );
        assert_eq!(
            texts(&session.submit("12a4")),
            ["Order must contain only digits, found 'a' at position 2."]
        );
        assert_eq!(
            texts(&session.submit("1224")),
            ["Order must be a valid permutation of digits 1-4.", "Example: 2134"]
        );

        // Still waiting for a valid order, and nothing was written
        assert_eq!(session.columns().map(ColumnCount::get), Some(4));
        assert_eq!(file_count(&dir), 1);
    }

    #[test]
    fn new_file() {
        let (dir, path) = setup("chart.osu", CHART);
        let mut session = Session::new(ColumnRange::default());
        session.open(&path);

        let reply = session.submit("New\n");
        assert_eq!(reply, Reply::new(Vec::new()));
        assert_eq!(session.columns(), None);
        assert_eq!(session.prompt(), "File path: ");
        assert_eq!(file_count(&dir), 1);
    }

    #[test]
    fn sessions_are_independent_per_chart() {
        let (dir, path) = setup("chart.osu", CHART);
        let seven = CHART.replace("CircleSize:4", "CircleSize:7");
        let other = dir.path().join("other.osu");
        fs::write(&other, seven).unwrap();

        let mut session = Session::new(ColumnRange::default());
        session.open(&path);
        session.submit("4321");

        session.open(&other);
        assert_eq!(session.columns().map(ColumnCount::get), Some(7));
        session.submit("7654321");

        let written = fs::read_to_string(dir.path().join("other [7654321].osu")).unwrap();
        assert!(written.contains("Version:Hard [7654321]\n"));
        assert!(written.ends_with("\n475,192,1000,1,0,0:0:0:0:\n36,192,1500,1,0,0:0:0:0:\n"));
    }

    #[test]
    fn write_failure_keeps_chart() {
        let (dir, path) = setup("chart.osu", CHART);
        let mut session = Session::new(ColumnRange::default());
        session.open(&path);

        // Occupy the output path with a directory, so the write fails
        fs::create_dir(dir.path().join("chart [2143].osu")).unwrap();

        let reply = session.submit("2143");
        let last = reply.messages.last().unwrap();
        assert_eq!(last.tone, Tone::Error);
        assert!(last.text.starts_with("Could not write chart [2143].osu"));

        // The chart is still loaded, so the user can try another order
        assert_eq!(session.columns().map(ColumnCount::get), Some(4));
        let reply = session.submit("1243");
        assert_eq!(reply.messages[1].text, "Successfully created: chart [1243].osu");
    }

    #[test]
    fn custom_range() {
        let (_dir, path) = setup("chart.osu", &CHART.replace("CircleSize:4", "CircleSize:2"));
        let mut session = Session::new(ColumnRange::new(2, 9).unwrap());

        session.open(&path);
        assert_eq!(
            session.prompt(),
            "Enter new column order (e.g., for 2K = 21) or 'new' for different file: "
        );
    }
}
