//! Serialization of the area tables: C source and TGA.
//!
//! Both writers are byte-deterministic for a given table, which the tests
//! rely on. The C-source form emits the two float arrays the runtime of a
//! C consumer would compile in; the TGA form packs both tables side by side
//! into one 32-bit image for visual inspection.

use std::io::{self, Write};

use super::pattern::AREATEX_SIZE;
use super::tables::AreaTexData;

/// Write both tables as a C source file.
///
/// Elements are printed 8 per line, either as `%.8f` literals or, with
/// `quantize`, as `n / 255.0` fractions.
pub fn write_csource<W: Write>(out: &mut W, data: &AreaTexData, quantize: bool) -> io::Result<()> {
    writeln!(out, "/* This file was generated by smaa_areatex */")?;

    writeln!(out, "\n/* Horizontal/Vertical Areas */")?;
    write_float_array(out, "areatex", &data.ortho, quantize)?;

    writeln!(out, "\n/* Diagonal Areas */")?;
    write_float_array(out, "areatex_diag", &data.diag, quantize)?;

    Ok(())
}

fn write_float_array<W: Write>(
    out: &mut W,
    name: &str,
    texels: &[[f64; 2]],
    quantize: bool,
) -> io::Result<()> {
    let length = texels.len() * 2;
    write!(out, "static const float {name}[{length}] = {{")?;

    for (n, value) in texels.iter().flatten().enumerate() {
        if n > 0 {
            write!(out, ",")?;
        }
        if n % 8 != 0 {
            write!(out, " ")?;
        } else {
            write!(out, "\n\t")?;
        }

        if quantize {
            write!(out, "{:>3} / 255.0", (value * 255.0) as i32)?;
        } else {
            write!(out, "{value:.8}")?;
        }
    }

    writeln!(out, "\n}};")?;
    Ok(())
}

/// Write both tables as one 32-bit uncompressed TGA.
///
/// The image is `5·16 + 4·20 = 160` texels wide and `slices · 80` tall.
/// TGA stores rows bottom to top, and slices are emitted from last to
/// first. Each texel becomes `(B=0, G=area.y·255, R=area.x·255, A=0)`;
/// diagonal columns of ortho-only slices are zero.
pub fn write_tga<W: Write>(out: &mut W, data: &AreaTexData) -> io::Result<()> {
    let samples = data.ortho_slices;
    let width = 2 * AREATEX_SIZE;
    let height = samples * AREATEX_SIZE;

    let mut header = [0u8; 18];
    header[2] = 2; // uncompressed RGB
    header[12] = (width & 0xff) as u8;
    header[13] = (width >> 8) as u8;
    header[14] = (height & 0xff) as u8;
    header[15] = (height >> 8) as u8;
    header[16] = 32; // 32bit
    header[17] = 8; // 8bit alpha, left to right, bottom to top
    out.write_all(&header)?;

    let mut row = Vec::with_capacity(width * 4);
    for slice in (0..samples).rev() {
        let ortho_base = slice * AREATEX_SIZE * AREATEX_SIZE;
        let diag_base = slice * AREATEX_SIZE * AREATEX_SIZE;
        for y in (0..AREATEX_SIZE).rev() {
            row.clear();
            for x in 0..AREATEX_SIZE {
                let t = data.ortho[ortho_base + y * AREATEX_SIZE + x];
                row.extend_from_slice(&[0, byte(t[1]), byte(t[0]), 0]);
            }
            for x in 0..AREATEX_SIZE {
                if slice < data.diag_slices {
                    let t = data.diag[diag_base + y * AREATEX_SIZE + x];
                    row.extend_from_slice(&[0, byte(t[1]), byte(t[0]), 0]);
                } else {
                    row.extend_from_slice(&[0, 0, 0, 0]);
                }
            }
            out.write_all(&row)?;
        }
    }

    Ok(())
}

#[inline]
fn byte(v: f64) -> u8 {
    (v * 255.0) as u8
}
