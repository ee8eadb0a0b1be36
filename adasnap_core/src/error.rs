use alloc::string::String;

/// A page or line could not be built within the display contract.
///
/// These only happen when a formatter or the paginator is broken. They are
/// never the result of a user decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    LineTooWide { width: usize, max: usize },
    EmptyPage,
    PageOverflow { lines: usize, max: usize },
    EmptySequence,
    InvalidGeometry(&'static str),
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::LineTooWide { width, max } => {
                write!(f, "display line is {width} characters wide but the limit is {max}")
            }
            LayoutError::EmptyPage => write!(f, "page has no lines"),
            LayoutError::PageOverflow { lines, max } => {
                write!(f, "page has {lines} lines but only {max} fit")
            }
            LayoutError::EmptySequence => write!(f, "page sequence has no pages"),
            LayoutError::InvalidGeometry(reason) => {
                write!(f, "invalid display geometry: {reason}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

/// The protocol sent an address type tag we don't know how to label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownAddressKind(pub u8);

impl core::fmt::Display for UnknownAddressKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown address type {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownAddressKind {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    Empty,
    TooDeep(usize),
    Parse(String),
}

impl core::fmt::Display for PathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathError::Empty => write!(f, "derivation path has no components"),
            PathError::TooDeep(depth) => write!(
                f,
                "derivation path has {depth} components, at most {} are allowed",
                crate::path::MAX_PATH_DEPTH
            ),
            PathError::Parse(component) => {
                write!(f, "invalid derivation path component {component:?}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}
