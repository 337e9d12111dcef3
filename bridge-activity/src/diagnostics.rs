use log::debug;

use crate::intent::Intent;

/// Tag prefixed to all diagnostic output from the activity.
pub const LOG_TAG: &str = "BridgeActivity";

/// One-way sink for activation diagnostics.
///
/// Injected so the output is observable in tests; shells normally keep the
/// default [`LogSink`].
pub trait DiagnosticsSink: Send + Sync {
    fn line(&self, line: &str);
}

/// Default sink: forwards every line to the `log` crate under [`LOG_TAG`].
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn line(&self, line: &str) {
        debug!(target: LOG_TAG, "{line}");
    }
}

/// Dumps an activation request to `sink`, one line per field.
///
/// An absent intent produces exactly one line. Extras are reported in map
/// iteration order, which is unspecified; an absent value is reported as
/// the literal `null`.
pub(crate) fn log_intent(sink: &dyn DiagnosticsSink, intent: Option<&Intent>) {
    let Some(intent) = intent else {
        sink.line("intent is null");
        return;
    };

    sink.line(&format!("intent action: {}", intent.action().unwrap_or("null")));
    sink.line(&format!("intent data: {}", intent.data().unwrap_or("null")));
    if !intent.flags().is_empty() {
        sink.line(&format!("intent flags: {:?}", intent.flags()));
    }

    if !intent.has_extras() {
        sink.line("no extras in intent");
        return;
    }
    sink.line("intent extras:");
    for (key, value) in intent.extras() {
        match value {
            Some(value) => sink.line(&format!("  {key} = {value}")),
            None => sink.line(&format!("  {key} = null")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::intent::IntentFlags;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl DiagnosticsSink for RecordingSink {
        fn line(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_owned());
        }
    }

    fn position(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("no line contains {needle:?} in {lines:?}"))
    }

    #[test]
    fn absent_intent_produces_a_single_line() {
        let sink = RecordingSink::default();

        log_intent(&sink, None);

        assert_eq!(sink.lines(), vec!["intent is null".to_owned()]);
    }

    #[test]
    fn action_data_and_extras_appear_in_order() {
        let sink = RecordingSink::default();
        let intent = Intent::new()
            .with_action("OPEN")
            .with_data("https://example/x")
            .with_extra("from", "push");

        log_intent(&sink, Some(&intent));

        let lines = sink.lines();
        let action = position(&lines, "OPEN");
        let data = position(&lines, "https://example/x");
        let extra = position(&lines, "from = push");
        assert!(action < data && data < extra, "out of order: {lines:?}");
    }

    #[test]
    fn unset_fields_read_as_null() {
        let sink = RecordingSink::default();

        log_intent(&sink, Some(&Intent::new()));

        let lines = sink.lines();
        assert_eq!(lines[0], "intent action: null");
        assert_eq!(lines[1], "intent data: null");
        assert_eq!(lines[2], "no extras in intent");
    }

    #[test]
    fn absent_extra_value_reads_as_literal_null() {
        let sink = RecordingSink::default();
        let intent = Intent::new().with_absent_extra("payload");

        log_intent(&sink, Some(&intent));

        let lines = sink.lines();
        assert!(lines.contains(&"  payload = null".to_owned()), "{lines:?}");
    }

    #[test]
    fn launch_flags_are_reported_when_set() {
        let sink = RecordingSink::default();
        let intent = Intent::new().with_flags(IntentFlags::NEW_TASK);

        log_intent(&sink, Some(&intent));

        assert_eq!(position(&sink.lines(), "intent flags:"), 2);
    }
}
