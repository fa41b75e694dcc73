use std::path::PathBuf;

/// ошибки сборки таблиц, все фатальные
#[derive(Debug, thiserror::Error)]
pub enum Error
{
    /// строку базы данных не удалось разобрать
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },
    /// кодпоинты UnicodeData.txt идут не по возрастанию
    #[error("line {line}: codepoint U+{current:04X} does not follow U+{previous:04X}")]
    Ordering {
        line: usize,
        previous: u32,
        current: u32,
    },
    /// после сборки и вычисления классов свойство осталось пустым
    #[error("property '{0}' has no codepoints")]
    EmptyProperty(String),
    /// составной класс ссылается на класс, который ещё не вычислен
    #[error("class '{class}' reads '{operand}' before it is built")]
    UnresolvedClass { class: String, operand: String },
    /// свойство с таким именем уже есть в таблице
    #[error("property '{0}' is already defined")]
    DuplicateProperty(String),
    /// кодпоинт входит не ровно в одну категорию
    #[error("codepoint U+{code:04X} belongs to {count} categories of one kind")]
    Partition { code: u32, count: usize },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
