// src/ingest.rs

use crate::{
    buffer::PayloadBuffer,
    config::{Config, MAX_LINE_LENGTH, Mode, OutputFormat},
    error::{IngestError, ParseError},
    models::Payload,
    parser::parse,
};
use std::{io::Write, path::Path};
use tokio::{
    fs::File,
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
};

/// Counts of lines turned into payloads and lines discarded as invalid.
/// Blank lines are counted in neither.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub skipped: usize,
}

/// Applies the line-length cap and parses. Blank lines yield `Ok(None)`.
pub fn accept_line(line: &str) -> Result<Option<Payload>, ParseError> {
    if line.is_empty() {
        return Ok(None);
    }
    if line.len() > MAX_LINE_LENGTH {
        return Err(ParseError::LineTooLong {
            length: line.len(),
            limit: MAX_LINE_LENGTH,
        });
    }
    parse(line).map(Some)
}

fn report_skip(line_number: usize, err: &ParseError) {
    match err.unknown_command() {
        Some(name) => eprintln!("Ignoring invalid command {}", name),
        None => eprintln!("Skipping line {}: {}", line_number, err),
    }
}

/// Opens the input file for line-by-line reading.
pub async fn open_input(path: &Path) -> Result<BufReader<File>, IngestError> {
    let file = File::open(path).await.map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Reads every line from `reader`, appending each valid payload to `buffer`.
/// Invalid lines are reported on stderr and skipped.
pub async fn read_into_buffer<R>(
    reader: R,
    buffer: &mut PayloadBuffer,
) -> Result<IngestReport, IngestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut report = IngestReport::default();
    let mut lines = reader.lines();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await.map_err(IngestError::Read)? {
        line_number += 1;
        match accept_line(&line) {
            Ok(Some(payload)) => {
                buffer.append(payload);
                report.accepted += 1;
            }
            Ok(None) => {}
            Err(err) => {
                report_skip(line_number, &err);
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

/// Writes one processed payload in the requested format.
pub fn write_payload<W: Write>(
    payload: &Payload,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), IngestError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", payload).map_err(IngestError::Write),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, payload)?;
            writeln!(out).map_err(IngestError::Write)
        }
    }
}

/// Ingests everything first, then drains the buffer in order.
pub async fn run_buffered<R, W>(
    reader: R,
    out: &mut W,
    format: OutputFormat,
    quiet: bool,
) -> Result<IngestReport, IngestError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buffer = PayloadBuffer::new();

    if !quiet {
        writeln!(out, "--- Reading payloads ---").map_err(IngestError::Write)?;
    }
    let report = read_into_buffer(reader, &mut buffer).await?;
    let total = buffer.len();
    if !quiet {
        writeln!(out, "Read {} payloads\n", total).map_err(IngestError::Write)?;
        writeln!(out, "--- Processing payloads ---").map_err(IngestError::Write)?;
    }

    for i in 0..total {
        if !quiet {
            writeln!(out, "Processing payload {} of {}", i + 1, total)
                .map_err(IngestError::Write)?;
        }
        match format {
            OutputFormat::Text => buffer.process_next(out).map_err(IngestError::Write)?,
            OutputFormat::Json => write_payload(buffer.take_next(), format, out)?,
        }
        if !quiet {
            writeln!(out).map_err(IngestError::Write)?;
        }
    }

    buffer.destroy();
    Ok(report)
}

/// Processes each line as soon as it is read, without buffering.
pub async fn run_streaming<R, W>(
    reader: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<IngestReport, IngestError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut report = IngestReport::default();
    let mut lines = reader.lines();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await.map_err(IngestError::Read)? {
        line_number += 1;
        match accept_line(&line) {
            Ok(Some(payload)) => {
                write_payload(&payload, format, out)?;
                payload.release();
                report.accepted += 1;
            }
            Ok(None) => {}
            Err(err) => {
                report_skip(line_number, &err);
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

/// Opens the configured input and runs it in the configured mode.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<IngestReport, IngestError> {
    let reader = open_input(&config.input).await?;
    match config.mode {
        Mode::Buffered => run_buffered(reader, out, config.format, config.quiet).await,
        Mode::Streaming => run_streaming(reader, out, config.format).await,
    }
}
