/// ошибка разбора строки базы данных
#[macro_export]
macro_rules! malformed {
    ($line:expr, $($tt:tt)*) => {
        Err($crate::error::Error::MalformedRecord {
            line: $line,
            reason: format!($($tt)*),
        })
    };
}

/// составной класс: объединение операндов, из которого вычитаются операнды после `-`
#[macro_export]
macro_rules! derivation {
    ($name:literal = [$($union:expr),*]) => {
        $crate::derive::Derivation {
            name: $name,
            union: vec![$($union),*],
            minus: vec![],
        }
    };
    ($name:literal = [$($union:expr),*] - [$($minus:expr),*]) => {
        $crate::derive::Derivation {
            name: $name,
            union: vec![$($union),*],
            minus: vec![$($minus),*],
        }
    };
}
