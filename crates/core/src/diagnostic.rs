//! Diagnostic plumbing shared by every plugin.
//!
//! A failure is reported once, where it is detected, as a single line of the
//! form `<component>::<operation>(): <message>`. The line goes to the `log`
//! facade at error level; the error value itself travels back to the caller.

use std::fmt;

/// Component and operation a diagnostic is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Origin {
    pub component: &'static str,
    pub operation: &'static str,
}

impl Origin {
    pub const fn new(component: &'static str, operation: &'static str) -> Self {
        Self {
            component,
            operation,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}()", self.component, self.operation)
    }
}

/// Emit `err` as one diagnostic line and hand it back.
///
/// Meant for `map_err(report)` at the outermost entry point, so nested hooks
/// never produce a second line for the same failure.
pub fn report<E: fmt::Display>(err: E) -> E {
    log::error!("{err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_renders_as_call() {
        let origin = Origin::new("audio::WavImporter", "open_data");
        assert_eq!(origin.to_string(), "audio::WavImporter::open_data()");
    }

    #[test]
    fn report_returns_the_same_error() {
        let err = report(String::from("trade::ImageConverter::export_to_data(): oops"));
        assert_eq!(err, "trade::ImageConverter::export_to_data(): oops");
    }
}
