use clap::Parser;
use std::{fs, path::PathBuf, time::Instant};
use tpfmt::ast::SourceFile;
use tpfmt::config::{logging, output::PASCAL_EXTENSION};
use tpfmt::errors::{TpError, TpResult};
use tpfmt::{parse_tree, print_file, read};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Turbo Pascal pretty printer for parsed syntax trees",
    long_about = "Turbo Pascal pretty printer for parsed syntax trees.\n\
                 Reads a program or unit syntax tree produced by a parser (as JSON)\n\
                 and prints it back as canonically formatted Pascal source.\n\
                 \n\
                 Example usage:\n\
                 tpfmt tree.json                   # Print Pascal source to stdout\n\
                 tpfmt tree.json -o prog.pas       # Write Pascal source to a file\n\
                 tpfmt tree.json --show-tree       # Dump the decoded syntax tree\n\
                 tpfmt tree.json --verbose         # Verbose logging\n\
                 tpfmt tree.json --timing          # Show decode/print timing"
)]
struct Cli {
    // The syntax tree to print
    path: PathBuf,

    // Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show printing timing
    #[arg(short, long)]
    timing: bool,

    // Dump the decoded tree to stderr
    #[arg(long)]
    show_tree: bool,
}

#[derive(Debug, Default)]
struct PrintStats {
    read_time: f64,
    decode_time: f64,
    print_time: f64,
    input_bytes: usize,
    output_lines: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    let filter = if verbose { logging::VERBOSE_FILTER } else { logging::DEFAULT_FILTER };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn decode_phase(json: &str, stats: &mut PrintStats) -> TpResult<SourceFile> {
    let decode_start = Instant::now();
    let file = parse_tree(json)?;
    stats.decode_time = decode_start.elapsed().as_secs_f64();
    log::info!("decoded syntax tree in {:.3}s", stats.decode_time);
    Ok(file)
}

fn print_phase(file: &SourceFile, stats: &mut PrintStats) -> TpResult<String> {
    let print_start = Instant::now();
    let text = print_file(file)?;
    stats.print_time = print_start.elapsed().as_secs_f64();
    stats.output_lines = text.lines().count();
    log::info!("printed {} lines in {:.3}s", stats.output_lines, stats.print_time);
    Ok(text)
}

fn run(args: &Cli) -> TpResult<(String, PrintStats)> {
    let mut stats = PrintStats::default();

    if !args.path.exists() {
        return Err(TpError::FileReadError(format!(
            "Input file does not exist: {}",
            args.path.display()
        )));
    }

    let read_start = Instant::now();
    let json = read(&args.path)?;
    stats.read_time = read_start.elapsed().as_secs_f64();
    stats.input_bytes = json.len();
    log::info!("read {} bytes from {}", stats.input_bytes, args.path.display());

    let file = decode_phase(&json, &mut stats)?;

    if args.show_tree {
        eprintln!("{:#?}", file);
    }

    let text = print_phase(&file, &mut stats)?;
    Ok((text, stats))
}

fn print_stats(stats: &PrintStats) {
    eprintln!("\n Printing Statistics:");
    eprintln!("  Read:    {:>8.3}s ({} bytes)", stats.read_time, stats.input_bytes);
    eprintln!("  Decode:  {:>8.3}s", stats.decode_time);
    eprintln!("  Print:   {:>8.3}s ({} lines)", stats.print_time, stats.output_lines);
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok((text, stats)) => {
            match &args.output {
                Some(output_path) => {
                    if output_path.extension().map_or(true, |ext| ext != PASCAL_EXTENSION) {
                        log::warn!("output file does not have a .{} extension", PASCAL_EXTENSION);
                    }
                    if let Err(e) = fs::write(output_path, &text) {
                        let err = TpError::FileWriteError(format!("{}: {}", output_path.display(), e));
                        fatal(&err.to_string());
                    }
                    log::info!("Pascal source written to: {}", output_path.display());
                }
                None => print!("{}", text),
            }

            if args.timing {
                print_stats(&stats);
            }
        }
        Err(e) => fatal(&format!("Printing failed: {}", e)),
    }
}
