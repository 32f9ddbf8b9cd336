use js_sys::Array;
use wasm_bindgen::JsValue;

use crate::console::{Channel, Console};

/// Value type accepted by the host console
pub type HostValue = JsValue;

/// Convert a `log!` argument, owned or borrowed, into a console value
#[must_use]
pub fn to_host_value<T>(value: T) -> JsValue
where
    JsValue: From<T>,
{
    JsValue::from(value)
}

/// The browser's `console` object
///
/// Values are passed through untouched, so the browser applies the `%c`
/// directive in the label itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostConsole;

impl Console for HostConsole {
    type Value = JsValue;

    fn write(&self, channel: Channel, values: Vec<JsValue>) {
        let args: Array = values.into_iter().collect();
        match channel {
            Channel::Debug => web_sys::console::debug(&args),
            Channel::Log => web_sys::console::log(&args),
        }
    }
}
