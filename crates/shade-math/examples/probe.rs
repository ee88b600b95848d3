//! Inspects storage layouts and packing results from the command line.
//!
//! ```text
//! cargo run --example probe -- layout
//! cargo run --example probe -- half 1.0 65504 1e-7
//! cargo run --example probe -- unorm4x8 1 0.5 0 1
//! cargo run --example probe -- snorm4x8 -1 0 0.5 1
//! ```

use anyhow::{bail, Context};
use log::LevelFilter;
use shade_math::{
    codec::{
        half_bits_to_f32, pack_half_1x16, pack_snorm_4x8, pack_unorm_4x8, unpack_snorm_4x8,
        unpack_unorm_4x8,
    },
    storage::{layout, Aligned, Capabilities, Packed},
    Vec4f,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("shade_math"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    Capabilities::current().log();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "layout".to_string());
    let values = args
        .map(|arg| {
            arg.parse::<f32>()
                .with_context(|| format!("invalid number `{arg}`"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match &*mode {
        "layout" => print_layouts(),
        "half" => {
            if values.is_empty() {
                bail!("`half` expects at least one number");
            }
            for value in values {
                let bits = pack_half_1x16(value);
                println!("{value:e} -> {bits:#06x} -> {:e}", half_bits_to_f32(bits));
            }
        }
        "unorm4x8" => {
            let v = vec4_from(&values)?;
            let packed = pack_unorm_4x8(v);
            let back: Vec4f = unpack_unorm_4x8(packed);
            println!("{v} -> {packed:#010x} -> {back}");
        }
        "snorm4x8" => {
            let v = vec4_from(&values)?;
            let packed = pack_snorm_4x8(v);
            let back: Vec4f = unpack_snorm_4x8(packed);
            println!("{v} -> {packed:#010x} -> {back}");
        }
        _ => bail!("unknown mode `{mode}` (expected layout, half, unorm4x8 or snorm4x8)"),
    }

    Ok(())
}

fn vec4_from(values: &[f32]) -> anyhow::Result<Vec4f> {
    match values {
        &[x, y, z, w] => Ok(Vec4f::from([x, y, z, w])),
        _ => bail!("expected 4 components, got {}", values.len()),
    }
}

fn print_layouts() {
    macro_rules! rows {
        ($($ty:ty),+) => {
            $(
                println!("{}", layout::<$ty, 1, Packed>());
                println!("{}", layout::<$ty, 2, Packed>());
                println!("{}", layout::<$ty, 3, Packed>());
                println!("{}", layout::<$ty, 4, Packed>());
                println!("{} (aligned)", layout::<$ty, 1, Aligned>());
                println!("{} (aligned)", layout::<$ty, 2, Aligned>());
                println!("{} (aligned)", layout::<$ty, 3, Aligned>());
                println!("{} (aligned)", layout::<$ty, 4, Aligned>());
            )+
        };
    }
    rows!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, bool);
}
