use anyhow::Result;
use clap::Parser;
use fpbits::bits::group_bits;
use fpbits::{
    by_name, classify, extract, format_width, BitField, DecodeError, FloatFormat, CATALOG,
};

/// Decode a textual floating-point encoding and classify it.
///
/// The input is a hex (`0x...`) or binary (`0b...`) string; `_` separators
/// and whitespace are ignored. Without `--format` every catalog format
/// decodes the same input side by side; without an input, the zero-filled
/// default grid is shown. Set `RUST_LOG=debug` to see when over-length
/// input is clipped to a container.
#[derive(Debug, Parser)]
#[command(name = "fpbits", version, about)]
struct Args {
    /// Hex (0x...) or binary (0b...) encoding to decode.
    input: Option<String>,

    /// Restrict output to a single format from the catalog.
    #[arg(short, long)]
    format: Option<String>,

    /// List the supported formats and exit.
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for fmt in &CATALOG {
            println!("{:<10} {:>2} bits", fmt.name, fmt.width);
        }
        return Ok(());
    }

    let Some(input) = args.input.as_deref() else {
        match args.format.as_deref() {
            Some(name) => print_zero_row(name)?,
            None => {
                for fmt in &CATALOG {
                    print_zero_row(fmt.name)?;
                }
            }
        }
        return Ok(());
    };

    match args.format.as_deref() {
        Some(name) => {
            let fmt = by_name(name).ok_or_else(|| DecodeError::UnknownFormat {
                name: name.to_string(),
            })?;
            print_row(input, fmt)?;
        }
        None => {
            // The grammar is format-independent, so the first failure would
            // repeat for every row; stop at it instead.
            for fmt in &CATALOG {
                print_row(input, fmt)?;
            }
        }
    }
    Ok(())
}

// The grid a display starts from before any input exists.
fn print_zero_row(name: &str) -> Result<()> {
    let width = format_width(name)?;
    let zeros = BitField::new(0, width);
    println!("{:<10} {}", name, group_bits(&zeros.to_string()));
    Ok(())
}

fn print_row(input: &str, fmt: &FloatFormat) -> Result<()> {
    let fields = extract(input, fmt)?;
    let class = classify(&fields, fmt);
    let container = BitField::new(fields.reassemble(fmt), fmt.width);
    println!("{:<10} {}", fmt.name, group_bits(&container.to_string()));
    println!(
        "{:<10} sign:{} exponent:{} mantissa:{}",
        "", fields.sign, fields.exponent, fields.mantissa
    );
    println!("{:<10} {class}", "");
    println!();
    Ok(())
}
