use tracing::debug;

use crate::cli::OutputFormat;
use crate::core::result::ResultCollection;

/// Replace ipcress mismatch counts with counts recomputed from the alignments
///
/// # Errors
///
/// Returns an error if any result has an alignment that cannot be compared.
pub fn recalculate(results: ResultCollection) -> anyhow::Result<ResultCollection> {
    let recalculated = results.clone().with_recalculated_mismatches()?;

    for (index, (before, after)) in results.iter().zip(recalculated.iter()).enumerate() {
        if (before.forward_mismatches, before.reverse_mismatches)
            != (after.forward_mismatches, after.reverse_mismatches)
        {
            debug!(
                result = index + 1,
                reported_forward = before.forward_mismatches,
                reported_reverse = before.reverse_mismatches,
                forward = after.forward_mismatches,
                reverse = after.reverse_mismatches,
                "Recalculated mismatches differ from ipcress"
            );
        }
    }

    Ok(recalculated)
}

/// Print results in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_results(results: &ResultCollection, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_results(results),
        OutputFormat::Json => print_json_results(results)?,
        OutputFormat::Tsv => print_tsv_results(results),
    }
    Ok(())
}

fn print_text_results(results: &ResultCollection) {
    println!("Ipcress Results");
    println!("{}", "=".repeat(60));
    println!("Results: {}", results.len());

    for (i, result) in results.iter().enumerate() {
        println!(
            "\n[{}] {} ({})",
            i + 1,
            result.experiment_name,
            result.result_type
        );
        println!("  Primers: {}", result.primers);
        println!("  Target: {}", result.target);
        println!("  Matches: {}", result.matches);
        println!("  Product: {}", result.product);
        println!("  Length: {}  Start: {}", result.length, result.start);
        println!(
            "  Mismatches: forward {}, reverse {}",
            result.forward_mismatches, result.reverse_mismatches
        );
        println!(
            "  Forward: {} / {}",
            result.forward_matching_sequence, result.forward_primer_sequence
        );
        println!(
            "  Reverse: {} / {}",
            result.reverse_matching_sequence, result.reverse_primer_sequence
        );
    }
}

fn print_json_results(results: &ResultCollection) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "count": results.len(),
        "results": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &ResultCollection) {
    println!(
        "experiment\tprimers\ttarget\tresult_type\tlength\tstart\tforward_mismatches\treverse_mismatches\tmatches\tproduct"
    );
    for result in results {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            result.experiment_name,
            result.primers,
            result.target,
            result.result_type,
            result.length,
            result.start,
            result.forward_mismatches,
            result.reverse_mismatches,
            result.matches,
            result.product,
        );
    }
}
