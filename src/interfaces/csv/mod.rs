pub mod breakdown_writer;
pub mod event_reader;
