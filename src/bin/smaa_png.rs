//! Antialias a PNG image with SMAA and write the result.

use smaa_filter::image::io::{load_rgba_image, save_rgba_image, BitDepth};
use smaa_filter::{EdgeDetectionMode, Image, ImageReader, Preset, SmaaFilter, SmaaOptions};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args().next().unwrap_or_else(|| "smaa_png".to_string());
    let config = parse_args(&program)?;

    if config.verbose {
        eprintln!("smaa_png version {}\n", env!("CARGO_PKG_VERSION"));
    }

    let loaded = load_rgba_image(&config.infile)?;
    let width = loaded.image.width();
    let height = loaded.image.height();

    if config.verbose {
        eprintln!("input file: {}", config.infile.display());
        eprintln!("  width x height: {width} x {height}");
        eprintln!(
            "  bit depth: {}",
            if loaded.bit_depth == BitDepth::Sixteen {
                16
            } else {
                8
            }
        );
        eprintln!(
            "  alpha channel: {}",
            if loaded.has_alpha { "yes" } else { "no" }
        );
    }

    let mut options = SmaaOptions::from_preset(config.preset);
    if let Some(threshold) = config.threshold {
        options.threshold = threshold;
        options.depth_threshold = threshold;
    }
    if let Some(factor) = config.adaptation {
        options.local_contrast_adaptation_factor = factor;
    }
    if let Some(steps) = config.ortho_steps {
        options.max_search_steps = steps;
    }
    match config.diag_steps {
        Some(None) => options.enable_diag_detection = false,
        Some(Some(steps)) => {
            options.enable_diag_detection = true;
            options.max_search_steps_diag = steps;
        }
        None => {}
    }
    match config.rounding {
        Some(None) => options.enable_corner_detection = false,
        Some(Some(rounding)) => {
            options.enable_corner_detection = true;
            options.corner_rounding = rounding;
        }
        None => {}
    }

    if config.verbose {
        print_config(&options, config.detection);
    }

    // In depth mode the alpha channel is consumed as the depth buffer.
    let (color, depth, has_alpha) = if config.detection == EdgeDetectionMode::Depth {
        let mut color = loaded.image.clone();
        let mut depth = Image::new(width, height).map_err(|e| e.to_string())?;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let mut c = color.get_pixel(x, y);
                depth
                    .put_pixel(x, y, [c[3], 0.0, 0.0, 0.0])
                    .map_err(|e| e.to_string())?;
                c[3] = 1.0;
                color.put_pixel(x, y, c).map_err(|e| e.to_string())?;
            }
        }
        (color, Some(depth), false)
    } else {
        (loaded.image, None, loaded.has_alpha)
    };

    let filter = SmaaFilter::new(config.detection, options);
    let result = filter
        .process_detailed(&color, depth.as_ref(), None)
        .map_err(|e| e.to_string())?;

    if config.verbose {
        let t = result.timings;
        eprintln!(
            "\nelapsed time: {:.1} ms (edges {:.1}, weights {:.1}, blend {:.1})\n",
            t.edges_ms + t.weights_ms + t.blend_ms,
            t.edges_ms,
            t.weights_ms,
            t.blend_ms
        );
    }

    save_rgba_image(&result.output, &config.outfile, loaded.bit_depth, has_alpha)?;

    if config.verbose {
        eprintln!("output file: {}", config.outfile.display());
        eprintln!("done.");
    }

    Ok(())
}

struct CliConfig {
    preset: Preset,
    detection: EdgeDetectionMode,
    threshold: Option<f32>,
    adaptation: Option<f32>,
    ortho_steps: Option<usize>,
    /// `Some(None)` disables diagonal processing (`-d -1`).
    diag_steps: Option<Option<usize>>,
    /// `Some(None)` disables corner processing (`-c -1`).
    rounding: Option<Option<u32>>,
    verbose: bool,
    infile: PathBuf,
    outfile: PathBuf,
}

fn parse_args(program: &str) -> Result<CliConfig, String> {
    let mut args = env::args().skip(1);
    let mut preset = Preset::High;
    let mut detection = EdgeDetectionMode::Color;
    let mut threshold = None;
    let mut adaptation = None;
    let mut ortho_steps = None;
    let mut diag_steps = None;
    let mut rounding = None;
    let mut verbose = false;
    let mut infile: Option<PathBuf> = None;
    let mut outfile: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", usage(program));
                std::process::exit(0);
            }
            "-v" => verbose = true,
            "-p" => {
                let value = expect_value(&mut args, "-p", program)?;
                preset = Preset::from_name(&value)
                    .ok_or_else(|| format!("Unknown preset name: {value}"))?;
            }
            "-e" => {
                let value = expect_value(&mut args, "-e", program)?;
                detection = EdgeDetectionMode::from_name(&value)
                    .ok_or_else(|| format!("Unknown detection type: {value}"))?;
            }
            "-t" => {
                let value = expect_value(&mut args, "-t", program)?;
                let parsed: f32 = value
                    .parse()
                    .map_err(|_| format!("Invalid threshold: {value}"))?;
                if parsed < 0.0 {
                    return Err(format!("Invalid threshold: {value}"));
                }
                threshold = Some(parsed);
            }
            "-a" => {
                let value = expect_value(&mut args, "-a", program)?;
                let parsed: f32 = value
                    .parse()
                    .map_err(|_| format!("Invalid contrast adaptation factor: {value}"))?;
                if parsed < 0.0 {
                    return Err(format!("Invalid contrast adaptation factor: {value}"));
                }
                adaptation = Some(parsed);
            }
            "-s" => {
                let value = expect_value(&mut args, "-s", program)?;
                let parsed: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid maximum search steps: {value}"))?;
                ortho_steps = Some(parsed);
            }
            "-d" => {
                let value = expect_value(&mut args, "-d", program)?;
                let parsed: i64 = value
                    .parse()
                    .map_err(|_| format!("Invalid maximum diagonal search steps: {value}"))?;
                diag_steps = match parsed {
                    -1 => Some(None),
                    n if n >= 0 => Some(Some(n as usize)),
                    _ => {
                        return Err(format!("Invalid maximum diagonal search steps: {value}"));
                    }
                };
            }
            "-c" => {
                let value = expect_value(&mut args, "-c", program)?;
                let parsed: i64 = value
                    .parse()
                    .map_err(|_| format!("Invalid corner rounding: {value}"))?;
                rounding = match parsed {
                    -1 => Some(None),
                    n if n >= 0 => Some(Some(n as u32)),
                    _ => return Err(format!("Invalid corner rounding: {value}")),
                };
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("Unknown option: {arg}\n{}", usage(program)));
            }
            _ => {
                if infile.is_none() {
                    infile = Some(PathBuf::from(arg));
                } else if outfile.is_none() {
                    outfile = Some(PathBuf::from(arg));
                } else {
                    return Err(format!("Too many file names: {arg}\n{}", usage(program)));
                }
            }
        }
    }

    let (infile, outfile) = match (infile, outfile) {
        (Some(i), Some(o)) => (i, o),
        _ => return Err(format!("Two file names are required.\n{}", usage(program))),
    };

    Ok(CliConfig {
        preset,
        detection,
        threshold,
        adaptation,
        ortho_steps,
        diag_steps,
        rounding,
        verbose,
        infile,
        outfile,
    })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str, program: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("Option {flag} requires an argument.\n{}", usage(program)))
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [OPTION]... INFILE OUTFILE\n\
         Remove jaggies from PNG image and write antialiased PNG image.\n\n\
         \x20 -p PRESET     Base configuration preset   [low|medium|high|ultra|extreme]\n\
         \x20 -e DETECTTYPE Edge detection type                    [luma|color|depth]\n\
         \x20               (depth edge detection uses the alpha channel as depths)\n\
         \x20 -t THRESHOLD  Threshold of edge detection                    [0.0, 0.5]\n\
         \x20 -a FACTOR     Local contrast adaptation factor               [1.0, inf]\n\
         \x20 -s STEPS      Maximum search steps                             [1, 362]\n\
         \x20 -d STEPS      Maximum diagonal search steps               -1 or [1, 19]\n\
         \x20               (-1 disables diagonal processing)\n\
         \x20 -c ROUNDING   Corner rounding                            -1 or [0, 100]\n\
         \x20               (-1 disables corner processing)\n\
         \x20 -v            Print details of what is being done\n\
         \x20 -h            Print this help and exit"
    )
}

fn print_config(options: &SmaaOptions, detection: EdgeDetectionMode) {
    eprintln!("\nedge detection type: {}", detection.name());
    eprintln!(
        "  threshold: {}",
        if detection == EdgeDetectionMode::Depth {
            options.depth_threshold
        } else {
            options.threshold
        }
    );
    eprintln!(
        "  local contrast adaptation factor: {}",
        options.local_contrast_adaptation_factor
    );
    eprintln!("maximum search steps: {}", options.max_search_steps);
    eprintln!(
        "diagonal search: {}",
        if options.enable_diag_detection {
            "on"
        } else {
            "off"
        }
    );
    if options.enable_diag_detection {
        eprintln!(
            "  maximum diagonal search steps: {}",
            options.max_search_steps_diag
        );
    }
    eprintln!(
        "corner processing: {}",
        if options.enable_corner_detection {
            "on"
        } else {
            "off"
        }
    );
    if options.enable_corner_detection {
        eprintln!("  corner rounding: {}", options.corner_rounding);
    }
}
