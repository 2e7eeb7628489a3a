//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the plugin, using the
//! OpenTelemetry OTLP JSON format with file-based exporting. The Zellij
//! sandbox has no network collector to talk to, so spans land in a rotating
//! JSON file for offline analysis.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK
//!                → FileSpanExporter → rotating JSON file
//! ```
//!
//! Diagnostics are the only surfacing channel for search failures; the UI
//! itself never shows an error state.
//!
//! # Configuration
//!
//! Trace level comes from the `trace_level` plugin configuration option
//! (default `"info"`).
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `tracer`: Custom tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
