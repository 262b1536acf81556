//! Panic payload rendering for isolated startup invocations.

use std::any::Any;

/// Render a caught panic payload as a message string.
///
/// ## Parameters
/// - `payload`: the boxed payload returned by `std::panic::catch_unwind`.
///
/// ## Returns
/// - (`&str`): the panic message for `&str` and `String` payloads, or a fixed
///   placeholder for payloads of any other type.
///
/// ## Notes
/// - Generated executor code calls this to build the error line for a failed
///   startup, so the text here is part of the emitted output contract.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
