/// Composite runtime values.
///
/// Defines `Object`, an instance of a host-defined `Class`, which owns a
/// mutable field map and dispatches method calls to the native functions of
/// its class.
pub mod object;

pub mod core;
