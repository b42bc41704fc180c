//! Dynamic value model for the Verity validation engine.
//!
//! Everything that crosses the validation boundary is converted once into a
//! [`Value`]: a closed tagged variant over the shapes the engine understands
//! (text, numbers, big integers, booleans, binary buffers, dates, times,
//! sequences, mappings, `null` and the *absent* sentinel). Validators then
//! match on the variant instead of probing runtime types.
//!
//! The crate also owns the two operations every layer above shares:
//!
//! - [`display`], the single value-to-string formatter used by report
//!   messages (dates as `YYYY/MM/DD HH:MM:SS.mmm`, big integers with a
//!   trailing `n`, buffers as their decoded UTF-8 form);
//! - [`deep_equal`], structural equality (order-independent for mapping
//!   keys, order-dependent for sequence elements, instant-based for dates).

pub mod convert;
pub mod display;
pub mod eq;
pub mod kind;
pub mod value;

pub use convert::ValueCastError;
pub use display::display;
pub use eq::deep_equal;
pub use kind::ValueKind;
pub use value::Value;
