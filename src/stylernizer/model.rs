use crate::error::{Result, StylernizerError};
use std::fmt;
use std::str::FromStr;

/// Extension appended to every saved artifact.
pub const ARTIFACT_EXTENSION: &str = ".svg";

/// Turns a Rust module path (`crate::a::b`) into a dotted module identifier (`crate.a.b`).
pub fn module_id(module_path: &str) -> String {
    module_path.replace("::", ".")
}

/// Builds the base key `module:function`.
pub fn qualified_name(module: &str, function: &str) -> String {
    format!("{}:{}", module, function)
}

/// The dotted module part of a qualified name (everything before the first `:`).
pub fn module_of(name: &str) -> &str {
    name.split_once(':').map(|(m, _)| m).unwrap_or(name)
}

/// The function part of a qualified name (everything after the first `:`).
pub fn function_of(name: &str) -> &str {
    name.split_once(':').map(|(_, f)| f).unwrap_or("")
}

/// File name an artifact is saved under: `:` and `.` become `_`.
pub fn artifact_filename(name: &str) -> String {
    format!(
        "{}{}",
        name.replace([':', '.'], "_"),
        ARTIFACT_EXTENSION
    )
}

/// One value of a parameter sweep. Bound as the sole argument of a plot function.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Seq(Vec<SweepValue>),
}

impl SweepValue {
    /// Key suffix for this value: scalars use their string form, a one-element
    /// sequence uses its element, longer sequences join elements with `_`.
    pub fn suffix(&self) -> String {
        match self {
            SweepValue::Seq(items) if items.len() == 1 => items[0].to_string(),
            SweepValue::Seq(items) => items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join("_"),
            other => other.to_string(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SweepValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SweepValue::Int(v) => Some(*v as f64),
            SweepValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SweepValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[SweepValue]> {
        match self {
            SweepValue::Seq(items) => Some(items),
            _ => None,
        }
    }
}

/// Formats a float the way Python's `str` does: whole values keep `.0`,
/// and exponents outside `-4..16` switch to `1e+16` / `1e-05` notation.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", v);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..16).contains(&exponent) {
        let fixed = v.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

impl fmt::Display for SweepValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepValue::Int(v) => write!(f, "{}", v),
            SweepValue::Float(v) => f.write_str(&format_float(*v)),
            SweepValue::Text(s) => write!(f, "{}", s),
            SweepValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            SweepValue::Seq(items) => {
                let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl From<i64> for SweepValue {
    fn from(v: i64) -> Self {
        SweepValue::Int(v)
    }
}

impl From<i32> for SweepValue {
    fn from(v: i32) -> Self {
        SweepValue::Int(v.into())
    }
}

impl From<u32> for SweepValue {
    fn from(v: u32) -> Self {
        SweepValue::Int(v.into())
    }
}

impl From<f64> for SweepValue {
    fn from(v: f64) -> Self {
        SweepValue::Float(v)
    }
}

impl From<bool> for SweepValue {
    fn from(v: bool) -> Self {
        SweepValue::Bool(v)
    }
}

impl From<&str> for SweepValue {
    fn from(v: &str) -> Self {
        SweepValue::Text(v.to_string())
    }
}

impl From<String> for SweepValue {
    fn from(v: String) -> Self {
        SweepValue::Text(v)
    }
}

impl<T: Into<SweepValue>> From<Vec<T>> for SweepValue {
    fn from(v: Vec<T>) -> Self {
        SweepValue::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SweepValue>, const N: usize> From<[T; N]> for SweepValue {
    fn from(v: [T; N]) -> Self {
        SweepValue::Seq(v.into_iter().map(Into::into).collect())
    }
}

/// Aspect class of a figure canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Orientation {
    type Err = StylernizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "landscape" => Ok(Orientation::Landscape),
            "portrait" => Ok(Orientation::Portrait),
            "square" => Ok(Orientation::Square),
            other => Err(StylernizerError::InvalidArgument(format!(
                "orientation must be one of landscape, portrait, square (got {:?})",
                other
            ))),
        }
    }
}
