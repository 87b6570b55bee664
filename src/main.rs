use clap::{Parser, ValueEnum};
use num_bigint::BigInt;
use numcast::{
    cast::cast_with_scratch,
    types::{
        big_complex::BigComplex,
        descriptor::SampleType,
        primitive::{
            BitType, Float32Type, Float64Type, Int8Type, Int16Type, Int32Type, Int64Type,
            UInt8Type, UInt16Type, UInt32Type, UInt64Type,
        },
        unbounded::{BigComplexType, UnboundedIntType},
    },
};

/// numcast converts a numeric literal into another sample type and prints
/// the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The literal to convert. Integer literals are read as 64-bit signed
    /// integers, decimal literals as 64-bit floats.
    value: String,

    /// The sample type to convert the value into.
    #[arg(short, long, value_enum)]
    to: Target,
}

/// The sample types selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Target {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    Bit,
    BigInt,
    BigComplex,
}

fn main() {
    let args = Args::parse();

    let rendered = if let Ok(integer) = args.value.parse::<i64>() {
        convert(&Int64Type, &integer, args.to)
    } else if let Ok(real) = args.value.parse::<f64>() {
        convert(&Float64Type, &real, args.to)
    } else {
        eprintln!("'{}' is not an integer or decimal literal.", args.value);
        std::process::exit(1);
    };

    println!("{rendered}");
}

fn convert<U: SampleType>(input_type: &U, input: &U::Value, target: Target) -> String {
    let mut scratch = BigComplex::zero();

    macro_rules! into_target {
        ($output_type:expr, $zero:expr) => {{
            let mut output = $zero;
            cast_with_scratch(input_type, input, &$output_type, &mut output, &mut scratch);
            output.to_string()
        }};
    }

    match target {
        Target::Int8 => into_target!(Int8Type, 0_i8),
        Target::Uint8 => into_target!(UInt8Type, 0_u8),
        Target::Int16 => into_target!(Int16Type, 0_i16),
        Target::Uint16 => into_target!(UInt16Type, 0_u16),
        Target::Int32 => into_target!(Int32Type, 0_i32),
        Target::Uint32 => into_target!(UInt32Type, 0_u32),
        Target::Int64 => into_target!(Int64Type, 0_i64),
        Target::Uint64 => into_target!(UInt64Type, 0_u64),
        Target::Float32 => into_target!(Float32Type, 0.0_f32),
        Target::Float64 => into_target!(Float64Type, 0.0_f64),
        Target::Bit => into_target!(BitType, false),
        Target::BigInt => into_target!(UnboundedIntType, BigInt::from(0)),
        Target::BigComplex => into_target!(BigComplexType, BigComplex::zero()),
    }
}
