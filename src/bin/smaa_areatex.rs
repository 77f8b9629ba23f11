//! Generate the SMAA area lookup tables and write them to disk.

use smaa_filter::areatex::export::{write_csource, write_tga};
use smaa_filter::AreaTexData;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "smaa_areatex".to_string());
    let args: Vec<String> = env::args().skip(1).collect();

    let mut subsampling = false;
    let mut quantize = false;
    let mut tga = false;

    let (options, outfile) = match args.split_last() {
        Some((last, options)) => (options, PathBuf::from(last)),
        None => return Err(usage(&program)),
    };

    for option in options {
        match option.as_str() {
            "-s" => subsampling = true,
            "-q" => quantize = true,
            "-t" => tga = true,
            other => {
                return Err(format!("Unknown option: {other}\n{}", usage(&program)));
            }
        }
    }

    let file = File::create(&outfile)
        .map_err(|e| format!("Unable to open file: {} ({e})", outfile.display()))?;
    let mut out = BufWriter::new(file);

    eprintln!("Generating {}", outfile.display());

    let data = AreaTexData::build(subsampling);

    let result = if tga {
        write_tga(&mut out, &data)
    } else {
        write_csource(&mut out, &data, quantize)
    };
    result
        .and_then(|_| out.flush())
        .map_err(|e| format!("Failed to write {}: {e}", outfile.display()))
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [OPTION]... OUTFILE\n\
         Options: -s  Calculate data for subpixel rendering\n\
         \x20        -q  Quantize data to 256 levels\n\
         \x20        -t  Write .tga file instead of C/C++ source"
    )
}
