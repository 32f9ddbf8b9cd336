use crate::config::LoggerConfig;
use crate::console::{Channel, Console};
use crate::host_console::HostConsole;

/// A labelled console logger
///
/// Every call is forwarded to the selected channel as
/// `[label, style, args...]`, with the label carrying a `%c` directive that
/// applies the style.
#[derive(Debug, Clone)]
pub struct Logger<C: Console = HostConsole> {
    channel: Channel,
    label: String,
    style: String,
    console: C,
}

impl<C: Console> Logger<C> {
    #[must_use]
    pub fn new(config: &LoggerConfig, console: C) -> Self {
        Self {
            channel: Channel::for_build(config.production),
            label: config.label_token(),
            style: config.style.render(),
            console,
        }
    }

    /// Forward `args` to the console after the label and style
    pub fn log<I>(&self, args: I)
    where
        I: IntoIterator<Item = C::Value>,
    {
        let args = args.into_iter();
        let mut values = Vec::with_capacity(2 + args.size_hint().0);
        values.push(<C::Value as From<&str>>::from(&self.label));
        values.push(<C::Value as From<&str>>::from(&self.style));
        values.extend(args);
        self.console.write(self.channel, values);
    }

    #[must_use]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }
}
