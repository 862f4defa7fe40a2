use core::fmt;
#[cfg(target_family = "wasm")]
use wasm_bindgen::JsValue;

pub type DumpResult<T> = Result<T, DumpError>;

#[derive(Clone, Debug)]
pub struct DumpError {
    pub err_type: DumpErrorType,
    pub msg: Box<str>,
    pub file: Box<str>,
    pub line: u32,
    pub column: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpErrorType {
    /// the project document itself couldn't be decoded
    MalformedProject,
    InternalError,
    /// the caller-supplied sink refused a write
    Io,
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.err_type {
            DumpErrorType::MalformedProject => "malformed project",
            DumpErrorType::InternalError => "internal error",
            DumpErrorType::Io => "write error",
        };
        write!(
            f,
            "{kind}: {} (at {}:{}:{})",
            self.msg, self.file, self.line, self.column
        )
    }
}

impl std::error::Error for DumpError {}

impl From<fmt::Error> for DumpError {
    fn from(_: fmt::Error) -> Self {
        crate::make_dump_io!("couldn't write to output sink")
    }
}

#[cfg(target_family = "wasm")]
impl From<DumpError> for JsValue {
    fn from(val: DumpError) -> JsValue {
        JsValue::from_str(match val.err_type {
            DumpErrorType::MalformedProject => format!("error: {}<br>at {}:{}:{}<br>this is probably a problem with the project file itself; if it opens correctly in the LEGO app, please report it along with this error message", val.msg, val.file, val.line, val.column),
            DumpErrorType::InternalError => format!("error: {}<br>at {}:{}:{}<br>this is probably a bug in blockdump itself. Please report it, with this error message", val.msg, val.file, val.line, val.column),
            DumpErrorType::Io => format!("error: {}<br>at {}:{}:{}", val.msg, val.file, val.line, val.column),
        }.as_str())
    }
}

#[macro_export]
macro_rules! dump_bug {
    ($($args:tt)+) => {{
        return Err($crate::DumpError {
            err_type: $crate::DumpErrorType::InternalError,
            msg: format!("{}", format_args!($($args)*)).into(),
            file: file!().into(),
            line: line!(),
            column: column!()
        });
    }};
}

#[macro_export]
macro_rules! dump_bad_proj {
    ($($args:tt)+) => {{
        return Err($crate::DumpError {
            err_type: $crate::DumpErrorType::MalformedProject,
            msg: format!("{}", format_args!($($args)*)).into(),
            file: file!().into(),
            line: line!(),
            column: column!()
        });
    }};
}

#[macro_export]
macro_rules! make_dump_bug {
    ($($args:tt)+) => {{
        $crate::DumpError {
            err_type: $crate::DumpErrorType::InternalError,
            msg: format!("{}", format_args!($($args)*)).into(),
            file: file!().into(),
            line: line!(),
            column: column!()
        }
    }};
}

#[macro_export]
macro_rules! make_dump_bad_proj {
    ($($args:tt)+) => {{
        $crate::DumpError {
            err_type: $crate::DumpErrorType::MalformedProject,
            msg: format!("{}", format_args!($($args)*)).into(),
            file: file!().into(),
            line: line!(),
            column: column!()
        }
    }};
}

#[macro_export]
macro_rules! make_dump_io {
    ($($args:tt)+) => {{
        $crate::DumpError {
            err_type: $crate::DumpErrorType::Io,
            msg: format!("{}", format_args!($($args)*)).into(),
            file: file!().into(),
            line: line!(),
            column: column!()
        }
    }};
}
