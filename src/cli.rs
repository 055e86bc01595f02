use crate::node::outline;
use crate::{GenerationError, Options, RenderEvent, StreamSession, attempt_parse_with_log};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use tracing_subscriber::EnvFilter;

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         Replays INPUT as a stream of fragments and prints every display update\n\
         as one compact JSON line. When INPUT is omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE         Write output to FILE (default stdout)\n\
               --chunk-size BYTES    Fragment size in bytes, rounded to char boundaries (default 16)\n\
               --final-only          Print only the final value\n\
               --outline             Print the UI outline of the final value instead of JSON\n\
               --strict-closers      Treat a mismatched closer as not parseable\n\
               --keep-trailing-comma Do not strip a dangling comma before closing\n\
               --emit-unchanged      Print updates even when the value did not change\n\
               --log                 Print the repair log of the final buffer to stderr\n\
           -h, --help                Show this help\n\
         \n\
         Diagnostics go to stderr; set RUST_LOG=partialjson=debug for more.\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    parse_args_from(env::args().collect())
}

/// `args` includes the program name, which may be missing.
pub(crate) fn parse_args_from(mut args: Vec<String>) -> (Options, CliMode) {
    let program = if args.is_empty() {
        "partialjson".to_string()
    } else {
        args.remove(0)
    };

    let mut opts = Options::default();
    let mut mode = CliMode {
        input: None,
        output: None,
        chunk_size: 16,
        final_only: false,
        outline: false,
        log: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                mode.output = Some(args[i].clone());
            }
            "--chunk-size" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing BYTES for --chunk-size");
                    std::process::exit(2);
                }
                match args[i].parse::<usize>() {
                    Ok(n) if n > 0 => mode.chunk_size = n,
                    _ => {
                        eprintln!("Invalid chunk size: {}", args[i]);
                        std::process::exit(2);
                    }
                }
            }
            "--final-only" => {
                mode.final_only = true;
            }
            "--outline" => {
                mode.outline = true;
                mode.final_only = true;
            }
            "--strict-closers" => {
                opts.strict_closers = true;
            }
            "--keep-trailing-comma" => {
                opts.strip_trailing_comma = false;
            }
            "--emit-unchanged" => {
                opts.emit_unchanged = true;
            }
            "--log" => {
                mode.log = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                mode.input = Some(path.to_string());
            }
        }
        i += 1;
    }

    (opts, mode)
}

pub(crate) struct CliMode {
    pub(crate) input: Option<String>,
    pub(crate) output: Option<String>,
    pub(crate) chunk_size: usize,
    pub(crate) final_only: bool,
    pub(crate) outline: bool,
    pub(crate) log: bool,
}

/// Split `s` into pieces of about `size` bytes without cutting a UTF-8 sequence.
pub fn split_chunks(s: &str, size: usize) -> Vec<&str> {
    let size = size.max(1);
    let mut out = Vec::with_capacity(s.len() / size + 1);
    let mut start = 0;
    while start < s.len() {
        let mut end = (start + size).min(s.len());
        while !s.is_char_boundary(end) {
            end += 1;
        }
        out.push(&s[start..end]);
        start = end;
    }
    out
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let (opts, mode) = parse_args();

    let content = match mode.input {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let mut session = StreamSession::new(opts.clone());
    for chunk in split_chunks(&content, mode.chunk_size) {
        if let Some(RenderEvent::Update(v)) = session.push(chunk)
            && !mode.final_only
        {
            writeln!(out_writer, "{}", serde_json::to_string(&v)?)?;
        }
    }

    if mode.log {
        let (_, entries) = attempt_parse_with_log(session.buffer(), &opts);
        for e in entries {
            eprintln!("repair @{}: {} [{}]", e.position, e.message, e.context);
        }
    }

    let result = match session.finish() {
        RenderEvent::Final(v) | RenderEvent::Update(v) | RenderEvent::Cancelled(Some(v)) => {
            if mode.outline {
                out_writer.write_all(outline(&v).as_bytes())?;
            } else {
                writeln!(out_writer, "{}", serde_json::to_string(&v)?)?;
            }
            Ok(())
        }
        RenderEvent::Error(err) => Err(err),
        RenderEvent::Cancelled(None) => Err(GenerationError::Malformed { len: content.len() }),
    };
    out_writer.flush()?;
    result.map_err(|err: GenerationError| {
        eprintln!("{}", err.user_message());
        err.into()
    })
}
