// OTD GUI - app/reporter.rs
//
// Process-wide fault reporting.
//
// Architecture:
//   - `ExceptionReporter` is installed as the panic hook before the GUI starts.
//     It may run on any thread; it only formats the fault and sends it.
//   - `FaultInbox` lives on the GUI thread and drains reports each frame.
//     The bootstrapper keeps a second handle to the same queue so reports
//     raised by a panicking GUI thread can still be drained after it unwinds.
//   - All cross-thread communication is via `FatalReport` channel messages.
//
// The hook never panics and never blocks. If every inbox handle has gone
// away the report is still written to the log.

use crate::core::fault::{self, UnhandledFault};
use crate::core::model::FatalReport;
use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::Location;
use std::sync::{mpsc, Arc, Mutex, PoisonError};

/// Create a connected reporter/inbox pair.
pub fn fault_channel() -> (ExceptionReporter, FaultInbox) {
    let (tx, rx) = mpsc::channel();
    (
        ExceptionReporter { tx },
        FaultInbox {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// Sender half: turns panics into [`FatalReport`]s and queues them.
#[derive(Debug, Clone)]
pub struct ExceptionReporter {
    tx: mpsc::Sender<FatalReport>,
}

impl ExceptionReporter {
    /// Register this reporter as the process-wide panic hook.
    ///
    /// Replaces any previously installed hook, including the default one that
    /// prints to stderr; the report is logged instead.
    pub fn install(self) {
        std::panic::set_hook(Box::new(move |info| {
            self.report(info.payload(), info.location());
        }));
        tracing::debug!("Fatal fault reporter installed");
    }

    /// Format one panic and queue it for the GUI thread.
    pub fn report(&self, payload: &(dyn Any + Send), location: Option<&Location<'_>>) {
        let fault = UnhandledFault::from_payload(payload);
        let backtrace = Backtrace::force_capture();
        let report = fault::fatal_report(&fault, location, Some(&backtrace));

        let thread = std::thread::current();
        tracing::error!(
            fault = report.header.as_str(),
            thread = thread.name().unwrap_or("<unnamed>"),
            "Unhandled fault\n{}",
            report.body
        );

        if self.tx.send(report).is_err() {
            tracing::warn!("Fault inbox closed; report was only logged");
        }
    }
}

/// Receiver half, drained on the GUI thread.
///
/// Clones share one queue: a report is taken by whichever handle polls first.
#[derive(Debug, Clone)]
pub struct FaultInbox {
    rx: Arc<Mutex<mpsc::Receiver<FatalReport>>>,
}

impl FaultInbox {
    /// Poll for reports without blocking. Returns all pending reports.
    pub fn poll(&self) -> Vec<FatalReport> {
        // The receiver holds no invariant a poisoning panic could break.
        let rx = self.rx.lock().unwrap_or_else(PoisonError::into_inner);
        let mut reports = Vec::new();
        while let Ok(report) = rx.try_recv() {
            reports.push(report);
        }
        reports
    }

    /// Block until the next report arrives, or `None` once every reporter
    /// has been dropped.
    #[cfg(test)]
    fn recv(&self) -> Option<FatalReport> {
        let rx = self.rx.lock().unwrap_or_else(PoisonError::into_inner);
        rx.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants;

    #[test]
    fn test_report_is_delivered_to_inbox() {
        let (reporter, inbox) = fault_channel();
        let payload: Box<dyn Any + Send> = Box::new("device unreachable");
        reporter.report(payload.as_ref(), Some(Location::caller()));

        let reports = inbox.poll();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].title, constants::FATAL_REPORT_TITLE);
        assert_eq!(reports[0].header, "&str");
        assert!(reports[0].body.contains("device unreachable"));
        assert!(inbox.poll().is_empty(), "poll must drain the queue");
    }

    /// Reports raised on other threads all arrive in the inbox.
    #[test]
    fn test_reports_from_worker_threads() {
        let (reporter, inbox) = fault_channel();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let reporter = reporter.clone();
                std::thread::spawn(move || {
                    let payload: Box<dyn Any + Send> = Box::new(format!("worker {i} failed"));
                    reporter.report(payload.as_ref(), None);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        drop(reporter);

        let mut bodies: Vec<String> = std::iter::from_fn(|| inbox.recv())
            .map(|r| r.body)
            .collect();
        bodies.sort();
        assert_eq!(bodies.len(), 4);
        for (i, body) in bodies.iter().enumerate() {
            assert!(body.contains(&format!("worker {i} failed")), "{body}");
        }
    }

    /// A reporter whose inbox is gone must not panic.
    #[test]
    fn test_report_after_inbox_dropped_is_silent() {
        let (reporter, inbox) = fault_channel();
        drop(inbox);
        let payload: Box<dyn Any + Send> = Box::new(7_i32);
        reporter.report(payload.as_ref(), None);
    }

    /// A clone keeps the queue readable after the original handle is dropped.
    #[test]
    fn test_cloned_inbox_drains_after_original_dropped() {
        let (reporter, inbox) = fault_channel();
        let retained = inbox.clone();
        let payload: Box<dyn Any + Send> = Box::new("render failed");
        reporter.report(payload.as_ref(), None);
        drop(inbox);

        let reports = retained.poll();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].body.contains("render failed"));
    }

    #[test]
    fn test_recv_returns_none_when_reporter_dropped() {
        let (reporter, inbox) = fault_channel();
        drop(reporter);
        assert!(inbox.recv().is_none());
    }
}
