//! End-to-end conversion of a `.save` dump into a `_converted.sql` file.

use crate::blocks::blocks;
use crate::config::ConverterConfig;
use crate::emitter::Emitter;
use crate::error::{ConvertError, Result};
use crate::file_utils::{converted_output_path, encoding_for_label, read_text_file};
use crate::models::ConversionSummary;
use crate::properties::PropertyMap;
use crate::sql::write_sql_file;
use std::path::Path;

/// Run every block of a decoded dump through a fresh emitter.
pub fn collect_records(text: &str, config: &ConverterConfig) -> Emitter {
    let mut emitter = Emitter::new(config);
    for block in blocks(text) {
        let props = PropertyMap::from_lines(block.lines.iter().copied());
        emitter.process(&props);
    }
    emitter
}

/// Convert `input` and write the result next to it.
///
/// The input is read and classified completely before the output file is
/// opened, so a read failure leaves no output behind. A write failure may
/// leave a partial file.
pub fn convert_file(input: &Path, config: &ConverterConfig) -> Result<ConversionSummary> {
    let output_path = converted_output_path(input);
    tracing::info!("Converting {:?} into {:?}", input, output_path);

    let encoding = encoding_for_label(&config.input_encoding).map_err(ConvertError::read_input)?;
    let text = read_text_file(input, encoding).map_err(ConvertError::read_input)?;
    let emitter = collect_records(&text, config);

    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let generated_at = chrono::Local::now().naive_local();

    write_sql_file(
        &output_path,
        &source_name,
        generated_at,
        emitter.creatures(),
        emitter.gameobjects(),
    )
    .map_err(ConvertError::write_output)?;

    let summary = ConversionSummary {
        output_path,
        blocks_seen: emitter.blocks_seen(),
        creatures: emitter.creatures().len(),
        gameobjects: emitter.gameobjects().len(),
        skipped: emitter.skipped(),
    };
    tracing::info!(
        "Wrote {} creatures and {} gameobjects from {} blocks ({} skipped)",
        summary.creatures,
        summary.gameobjects,
        summary.blocks_seen,
        summary.skipped
    );
    Ok(summary)
}
