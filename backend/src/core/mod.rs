//! Shared primitives: money representation and id-ID display formatting

pub mod money;

pub use money::{
    format_decimal, format_percent, format_rupiah, parse_percent, parse_rupiah, FormatError,
};
