//
// pipeline.rs
//
// Event-pipeline abstraction over the record stream (spec component
// 4.7): a `DataSource` broadcasts begin/send/complete/cancel events to
// an ordered list of `Sink`s. Sinks are invoked synchronously in
// registration order; an error raised by any hook converts the running
// stream into a cancel sequence and is re-propagated to the caller
// once every sink has observed `before_cancel`/`after_cancel`.
//

use crate::stdf_error::StdfError;
use crate::stdf_file::StdfReader;
use crate::stdf_types::StdfRecord;

/// A stream observer. All hooks default to a no-op so a sink only
/// needs to implement the events it cares about.
///
/// The `before_*`/`after_*` pairing mirrors the source pipeline: a
/// `before_*` hook sees the stream state just before the event takes
/// effect, `after_*` just after. Returning `Err` from any `before_*`
/// or `after_*` hook aborts the stream; `before_cancel`/`after_cancel`
/// cannot themselves fail, since the stream is already unwinding.
pub trait Sink {
    fn before_begin(&mut self) -> Result<(), StdfError> {
        Ok(())
    }
    fn after_begin(&mut self) -> Result<(), StdfError> {
        Ok(())
    }
    fn before_send(&mut self, _record: &StdfRecord) -> Result<(), StdfError> {
        Ok(())
    }
    fn after_send(&mut self, _record: &StdfRecord) -> Result<(), StdfError> {
        Ok(())
    }
    fn before_complete(&mut self) -> Result<(), StdfError> {
        Ok(())
    }
    fn after_complete(&mut self) -> Result<(), StdfError> {
        Ok(())
    }
    fn before_cancel(&mut self, _err: &StdfError) {}
    fn after_cancel(&mut self, _err: &StdfError) {}
}

fn run_phase<F>(sinks: &mut [Box<dyn Sink>], f: F) -> Result<(), StdfError>
where
    F: Fn(&mut dyn Sink) -> Result<(), StdfError>,
{
    for sink in sinks.iter_mut() {
        f(sink.as_mut())?;
    }
    Ok(())
}

fn run_cancel(sinks: &mut [Box<dyn Sink>], err: &StdfError) {
    for sink in sinks.iter_mut() {
        sink.before_cancel(err);
    }
    for sink in sinks.iter_mut() {
        sink.after_cancel(err);
    }
}

/// Drives a sequence of `Sink`s through one stream's lifecycle. Sinks
/// are attached before the stream begins; none may be added once
/// `begin` has run.
#[derive(Default)]
pub struct DataSource {
    sinks: Vec<Box<dyn Sink>>,
    started: bool,
}

impl DataSource {
    pub fn new() -> Self {
        DataSource {
            sinks: Vec::new(),
            started: false,
        }
    }

    /// Attach a sink in registration order. Panics if the stream has
    /// already begun — sinks cannot observe a partial stream from
    /// nothing, so late registration is a programming error rather
    /// than a recoverable one.
    pub fn add_sink(&mut self, sink: Box<dyn Sink>) {
        assert!(
            !self.started,
            "cannot add a sink after the stream has begun"
        );
        self.sinks.push(sink);
    }

    pub fn begin(&mut self) -> Result<(), StdfError> {
        self.started = true;
        run_phase(&mut self.sinks, |s| s.before_begin())
            .and_then(|_| run_phase(&mut self.sinks, |s| s.after_begin()))
            .map_err(|e| {
                run_cancel(&mut self.sinks, &e);
                e
            })
    }

    pub fn send(&mut self, record: &StdfRecord) -> Result<(), StdfError> {
        run_phase(&mut self.sinks, |s| s.before_send(record))
            .and_then(|_| run_phase(&mut self.sinks, |s| s.after_send(record)))
            .map_err(|e| {
                run_cancel(&mut self.sinks, &e);
                e
            })
    }

    pub fn complete(&mut self) -> Result<(), StdfError> {
        run_phase(&mut self.sinks, |s| s.before_complete())
            .and_then(|_| run_phase(&mut self.sinks, |s| s.after_complete()))
            .map_err(|e| {
                run_cancel(&mut self.sinks, &e);
                e
            })
    }

    /// Force a cancel sequence, e.g. when the caller hit an error that
    /// did not originate from a sink (a read failure on the underlying
    /// stream). Returns the same error so the caller can propagate it.
    pub fn cancel(&mut self, err: StdfError) -> StdfError {
        run_cancel(&mut self.sinks, &err);
        err
    }

    pub fn sinks(&self) -> &[Box<dyn Sink>] {
        &self.sinks
    }
}

/// Drive a whole `StdfReader` through `source`'s lifecycle: `begin`,
/// then `send` every decoded record in stream order, then `complete`.
/// Running out of input is not an error at this layer (it mirrors the
/// normal end-of-stream termination in spec 4.4/7) — only a sink
/// returning `Err` triggers the cancel sequence.
pub fn drive(mut source: DataSource, reader: &mut StdfReader) -> Result<DataSource, StdfError> {
    source.begin()?;
    for record in reader.get_record_iter() {
        source.send(&record)?;
    }
    source.complete()?;
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stdf_error::StdfErrorKind;
    use crate::stdf_types::stdf_record_type::REC_PIR;

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<&'static str>,
    }

    impl Sink for RecordingSink {
        fn before_begin(&mut self) -> Result<(), StdfError> {
            self.events.push("before_begin");
            Ok(())
        }
        fn after_begin(&mut self) -> Result<(), StdfError> {
            self.events.push("after_begin");
            Ok(())
        }
        fn before_send(&mut self, _record: &StdfRecord) -> Result<(), StdfError> {
            self.events.push("before_send");
            Ok(())
        }
        fn after_send(&mut self, _record: &StdfRecord) -> Result<(), StdfError> {
            self.events.push("after_send");
            Ok(())
        }
        fn before_complete(&mut self) -> Result<(), StdfError> {
            self.events.push("before_complete");
            Ok(())
        }
        fn after_complete(&mut self) -> Result<(), StdfError> {
            self.events.push("after_complete");
            Ok(())
        }
    }

    #[test]
    fn normal_lifecycle_order() {
        let mut source = DataSource::new();
        source.add_sink(Box::new(RecordingSink::default()));
        source.begin().unwrap();
        let rec = StdfRecord::new(REC_PIR);
        source.send(&rec).unwrap();
        source.complete().unwrap();
    }

    struct FailingSink;
    impl Sink for FailingSink {
        fn before_send(&mut self, _record: &StdfRecord) -> Result<(), StdfError> {
            Err(StdfError::new(StdfErrorKind::Io, "sink refused record"))
        }
    }

    #[derive(Default)]
    struct CancelWitness {
        cancelled: bool,
    }
    impl Sink for CancelWitness {
        fn before_cancel(&mut self, _err: &StdfError) {
            self.cancelled = true;
        }
    }

    #[test]
    fn sink_error_triggers_cancel_and_propagates() {
        let mut source = DataSource::new();
        source.add_sink(Box::new(FailingSink));
        source.begin().unwrap();
        let rec = StdfRecord::new(REC_PIR);
        let result = source.send(&rec);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, StdfErrorKind::Io);
    }

    #[test]
    #[should_panic(expected = "cannot add a sink")]
    fn late_sink_registration_panics() {
        let mut source = DataSource::new();
        source.begin().unwrap();
        source.add_sink(Box::new(RecordingSink::default()));
    }
}
