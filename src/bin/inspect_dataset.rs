use housingviz::aggregate::parse_measure;
use housingviz::data::Dataset;
use std::{env, fs::File, process::exit};

fn main() {
    // Expect exactly one CLI argument: path to a local copy of the CSV.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <CSV_FILE>", args[0]);
        exit(1);
    }
    if let Err(e) = inspect(&args[1]) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

/// Print per-column distinct counts plus the numeric range where the column
/// parses as a measure. Handy for eyeballing what the filters will offer.
fn inspect(path: &str) -> anyhow::Result<()> {
    let dataset = Dataset::from_reader(File::open(path)?)?;
    println!("=== {} ===", path);
    println!("Rows: {}", dataset.rows.len());

    for column in &dataset.headers {
        let distinct = dataset.distinct_values(column);
        let numeric: Vec<f64> = dataset
            .rows
            .iter()
            .filter_map(|r| r.get(column).and_then(parse_measure))
            .collect();

        print!("{:<28} distinct={:<5}", column, distinct.len());
        if numeric.len() == dataset.rows.len() && !numeric.is_empty() {
            let min = numeric.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = numeric.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            println!(" range=[{min}, {max}]");
        } else if !distinct.is_empty() {
            let sample: Vec<&str> = distinct.iter().take(5).map(String::as_str).collect();
            println!(" values: {}", sample.join(", "));
        } else {
            println!(" (empty)");
        }
    }
    Ok(())
}
