use std::io::Read;
use std::path::PathBuf;

use crate::cli::{CipherArgs, output};
use crate::config::app_config::AppConfig;
use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_kind::{CipherKind, Operation};
use crate::core::models::trace::{PairRule, Trace, TraceUnit};
use crate::core::services::cipher_service::{CipherOutcome, CipherRequest, CipherService};

/// Resolve the input text: positional argument, then `--file`, then stdin.
///
/// A single trailing line ending from a file or stdin is dropped.
pub fn read_text(args: &CipherArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let raw = match &args.file {
        Some(f) => {
            let path = PathBuf::from(f);
            if !path.exists() {
                return Err(CipherError::FileNotFound { path });
            }
            std::fs::read_to_string(&path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(trim_line_ending(&raw).to_string())
}

fn trim_line_ending(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}

/// Build a request from CLI arguments, filling gaps from config.
pub fn build_request(
    operation: Operation,
    args: &CipherArgs,
    config: &AppConfig,
) -> Result<CipherRequest> {
    let kind = args.cipher.unwrap_or(config.defaults.cipher);
    let text = read_text(args)?;
    Ok(CipherRequest {
        kind,
        operation,
        text,
        key: args.key.clone(),
        trace: args.trace || config.defaults.trace,
    })
}

/// Validate and run a request.
pub fn run(request: &CipherRequest) -> Result<CipherOutcome> {
    output::detail(&format!("Cipher: {}", request.kind));
    output::detail(request.kind.description());
    output::detail(&format!("Input: {} character(s)", request.text.chars().count()));
    CipherService.run(request)
}

/// Print an outcome as text or pretty JSON.
pub fn print_outcome(outcome: &CipherOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    let title = match outcome.operation {
        Operation::Encrypt => "Encrypted",
        Operation::Decrypt => "Decrypted",
    };
    output::header(&format!("{title} with {}", outcome.cipher));
    output::result(&outcome.result);

    if let Some(trace) = &outcome.trace {
        print_trace(trace);
    }
    Ok(())
}

/// Print a trace step by step.
pub fn print_trace(trace: &Trace) {
    match trace.cipher {
        CipherKind::Caesar => {
            output::header("Caesar cipher process");
            if let Some(shift) = first_shift(trace) {
                output::line(&format!("Alphabet shift: {shift} position(s)"));
                output::line(&shift_table(shift));
            }
        }
        CipherKind::Vigenere => output::header("Vigenère cipher process"),
        CipherKind::Playfair => {
            output::header("Playfair cipher process");
            if let Some(matrix) = &trace.matrix {
                output::line("5x5 key matrix:");
                for row in matrix.rows() {
                    let cells: Vec<String> = row.iter().map(char::to_string).collect();
                    output::line(&format!("  {}", cells.join(" ")));
                }
            }
            if let Some(prepared) = &trace.prepared {
                output::line(&format!("Processed text (pairs): {}", split_pairs(prepared)));
            }
        }
    }

    for step in &trace.steps {
        output::line(&format!("{:>4}  {}", step.position, describe(&step.unit)));
    }
}

fn describe(unit: &TraceUnit) -> String {
    match unit {
        TraceUnit::Char {
            original,
            key: Some(k),
            shift: Some(s),
            result,
        } => format!("{original} + {k} = {result}  (shift: {s})"),
        TraceUnit::Char {
            original,
            shift: Some(s),
            result,
            ..
        } => format!("{original} -> {result}  (shift: {s})"),
        TraceUnit::Char { original, .. } => format!("{original:?} unchanged"),
        TraceUnit::Pair {
            original: [a, b],
            rule: PairRule::Unmapped,
            ..
        } => format!("{a}{b} skipped (not in matrix)"),
        TraceUnit::Pair {
            original: [a, b],
            rule,
            result,
        } => {
            let [x, y] = result.unwrap_or([' ', ' ']);
            format!("{a}{b} -> {x}{y}  ({})", rule_name(*rule))
        }
    }
}

fn rule_name(rule: PairRule) -> &'static str {
    match rule {
        PairRule::SameRow => "same row",
        PairRule::SameColumn => "same column",
        PairRule::Rectangle => "rectangle",
        PairRule::Unmapped => "unmapped",
    }
}

fn first_shift(trace: &Trace) -> Option<u8> {
    trace.steps.iter().find_map(|s| match s.unit {
        TraceUnit::Char { shift, .. } => shift,
        TraceUnit::Pair { .. } => None,
    })
}

/// `A→D B→E ...` for a Caesar shift.
fn shift_table(shift: u8) -> String {
    ('A'..='Z')
        .map(|c| {
            let shifted = crate::core::alphabet::shift_char(c, i64::from(shift));
            format!("{c}→{shifted}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into space-separated pairs, e.g. `BA LX LO`.
pub fn split_pairs(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
