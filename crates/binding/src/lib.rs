//! Contract binding for the Human Standard Token.
//!
//! The interface is a static descriptor table rather than generated
//! per-method types: one [`abi::Function`] constant per callable function,
//! one [`abi::Event`] per emitted event, the compiled deployment bytecode,
//! and the constructor argument layout.

pub mod token;
