// End-to-end runs of the icon-forge binary in a scratch working directory
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("icon-forge-cli-{tag}-{nanos}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_test_png(path: &PathBuf, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8, 200])
    });
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("encode png");
    fs::write(path, cursor.into_inner()).expect("write png");
}

fn run_in(dir: &PathBuf) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_icon-forge"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn icon-forge")
}

#[test]
fn converts_icon_png_in_working_directory() {
    let dir = unique_temp_dir("ok");
    write_test_png(&dir.join("icon.png"), 320, 320);

    let output = run_in(&dir);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Successfully converted icon.png to icon.ico with multiple sizes\n"
    );

    let bytes = fs::read(dir.join("icon.ico")).expect("icon.ico should exist");
    let icon = ico::IconDir::read(Cursor::new(bytes)).expect("parse ico");
    let sizes: Vec<u32> = icon.entries().iter().map(|e| e.width()).collect();
    assert_eq!(sizes, vec![16, 32, 48, 64, 128, 256]);
    for entry in icon.entries() {
        assert_eq!(entry.width(), entry.height());
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_icon_png_exits_non_zero_without_output() {
    let dir = unique_temp_dir("missing");

    let output = run_in(&dir);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!dir.join("icon.ico").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn repeated_runs_produce_identical_files() {
    let dir = unique_temp_dir("repeat");
    write_test_png(&dir.join("icon.png"), 100, 40);

    assert!(run_in(&dir).status.success());
    let first = fs::read(dir.join("icon.ico")).expect("first icon");
    assert!(run_in(&dir).status.success());
    let second = fs::read(dir.join("icon.ico")).expect("second icon");

    assert_eq!(first, second);
    let _ = fs::remove_dir_all(dir);
}
