//! PNM I/O regression test
//!
//! Reads the plain test images, re-encodes each of them in all six netpbm
//! formats through files and memory, and checks that decoding restores the
//! converted canvas exactly.

use netpbm_core::{AnyCanvas, PnmFormat};
use netpbm_io::{IoError, decode, encode, read_image, read_image_header, write_image};
use netpbm_test::{RegParams, load_test_image, regout_dir, test_data_path};
use std::fs;

const ALL_FORMATS: [PnmFormat; 6] = [
    PnmFormat::P1,
    PnmFormat::P2,
    PnmFormat::P3,
    PnmFormat::P4,
    PnmFormat::P5,
    PnmFormat::P6,
];

fn flag(ok: bool) -> f64 {
    if ok { 1.0 } else { 0.0 }
}

#[test_log::test]
fn pnmio_reg() {
    let mut rp = RegParams::new("pnmio");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");

    // --- Test 1: Headers of the test images ---
    let header = read_image_header(test_data_path("gradient.pgm")).expect("read header");
    rp.compare_values(4.0, header.width as f64, 0.0);
    rp.compare_values(4.0, header.height as f64, 0.0);
    rp.compare_values(15.0, header.max_value as f64, 0.0);
    rp.compare_values(1.0, flag(header.format == PnmFormat::P2), 0.0);

    // --- Test 2: Every image through every format via files ---
    for name in ["shapes.pbm", "gradient.pgm", "colors.ppm"] {
        let src = load_test_image(name).expect("load test image");
        eprintln!("=== {} ({:?}, {}x{}) ===", name, src.format(), src.width(), src.height());

        for format in ALL_FORMATS {
            let converted = src.convert(format).expect("convert");
            let path = format!(
                "{}/pnmio_{}.{}",
                outdir,
                format.magic(),
                format.extension()
            );
            write_image(&converted, &path).expect("write image");
            let back = read_image(&path).expect("read image");
            let ok = back == converted;
            rp.compare_values(1.0, flag(ok), 0.0);
            eprintln!(
                "  {} file roundtrip: {}",
                format.magic(),
                if ok { "OK" } else { "FAILED" }
            );
        }
    }

    // --- Test 3: Memory roundtrip keeps raw bytes stable ---
    let colors = load_test_image("colors.ppm").expect("load colors.ppm");
    let raw = colors.convert(PnmFormat::P6).expect("convert to P6");
    let data = encode(&raw).expect("encode P6");
    rp.compare_values((3 * 2 * 3 + b"P6\n3 2\n255\n".len()) as f64, data.len() as f64, 0.0);
    let again = encode(&decode(&data).expect("decode P6")).expect("encode P6 (2)");
    rp.compare_strings(&data, &again);
    rp.write_data_and_check(&data, "ppm").expect("write P6 data");

    // --- Test 4: Plain bitmap output for golden comparison ---
    let shapes = load_test_image("shapes.pbm").expect("load shapes.pbm");
    rp.write_canvas_and_check(&shapes).expect("write shapes");
    let packed = shapes.convert(PnmFormat::P4).expect("convert to P4");
    rp.write_canvas_and_check(&packed).expect("write packed shapes");

    // --- Test 5: Malformed input ---
    let cases: [(&[u8], fn(&IoError) -> bool); 4] = [
        (b"P9\n1 1\n", |e| matches!(e, IoError::InvalidData(_))),
        (b"P2\n2 1\n65535\n0 1\n", |e| matches!(e, IoError::UnsupportedFormat(_))),
        (b"P5\n2 2\n255\n\x00", |e| matches!(e, IoError::DecodeError(_))),
        (b"P3\n1 1\n100\n0 101 0\n", |e| matches!(e, IoError::InvalidData(_))),
    ];
    for (bytes, expected) in cases {
        let ok = decode(bytes).err().is_some_and(|e| expected(&e));
        rp.compare_values(1.0, flag(ok), 0.0);
    }

    // --- Test 6: A missing file is an I/O error ---
    let missing = read_image(format!("{}/does-not-exist.pgm", outdir));
    rp.compare_values(1.0, flag(matches!(missing, Err(IoError::Io(_)))), 0.0);

    // --- Test 7: Written files use the canvas tag ---
    let gray = AnyCanvas::from(
        colors
            .into_color()
            .expect("pixmap")
            .convert_to_gray(),
    );
    let data = encode(&gray).expect("encode gray");
    rp.compare_values(1.0, flag(data.starts_with(b"P2\n3 2\n255\n")), 0.0);

    assert!(rp.cleanup(), "pnmio regression test failed");
}
