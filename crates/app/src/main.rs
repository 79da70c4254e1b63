//! `perun`: command line front end for the import/export plugins.
//!
//!   perun inspect <file> [--importer=WavAudioImporter]
//!   perun checkerboard <out> [--size=64] [--converter=PngImageConverter]
//!   perun plugins

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use asset::Image2D;
use trade::{AudioImporterExt, ImageConverterExt, PluginFactory, audio_importers, image_converters};

const DEFAULT_IMPORTER: &str = "WavAudioImporter";
const DEFAULT_CONVERTER: &str = "PngImageConverter";
const DEFAULT_SIZE: u32 = 64;

const USAGE: &str = "usage:
  perun inspect <file> [--importer=<name>]
  perun checkerboard <out> [--size=N] [--converter=<name>]
  perun plugins";

/// Value of `--<name>=value`; the last occurrence wins.
fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    let prefix = format!("--{name}=");
    args.iter()
        .rev()
        .find_map(|arg| arg.strip_prefix(prefix.as_str()))
}

fn positional(args: &[String]) -> impl Iterator<Item = &str> {
    args.iter()
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
}

fn parse_size_arg(args: &[String]) -> u32 {
    match flag_value(args, "size").map(str::parse::<u32>) {
        Some(Ok(size)) if size > 0 => size,
        Some(_) => {
            log::warn!("Invalid --size, falling back to {DEFAULT_SIZE}");
            DEFAULT_SIZE
        }
        None => DEFAULT_SIZE,
    }
}

/// Open `path` with the named importer and describe the stream.
fn inspect(path: &Path, importer_name: &str) -> Result<String> {
    let mut importer = audio_importers()
        .instantiate(importer_name)
        .ok_or_else(|| anyhow!("Unknown importer '{importer_name}'"))?;

    importer
        .open_file(path)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    let audio = importer.take_audio()?;

    Ok(format!(
        "{}: {:?}, {} Hz, {} bytes, {:.3} s",
        path.display(),
        audio.format(),
        audio.frequency(),
        audio.data().len(),
        audio.duration().as_secs_f64()
    ))
}

/// Export the checkerboard test image through the named converter.
fn checkerboard(out: &Path, size: u32, converter_name: &str) -> Result<()> {
    let converter = image_converters()
        .instantiate(converter_name)
        .ok_or_else(|| anyhow!("Unknown converter '{converter_name}'"))?;

    let image = Image2D::checkerboard(size);
    converter
        .export_to_file(image.view(), out)
        .with_context(|| format!("Failed to export {}", out.display()))?;
    log::info!("Wrote {size}x{size} checkerboard to {}", out.display());
    Ok(())
}

fn plugins() -> String {
    let mut lines = vec![String::from("audio importers:")];
    lines.extend(audio_importers().plugin_list().into_iter().map(|n| format!("  {n}")));
    lines.push(String::from("image converters:"));
    lines.extend(image_converters().plugin_list().into_iter().map(|n| format!("  {n}")));
    lines.join("\n")
}

fn run(args: &[String]) -> Result<()> {
    let mut positional = positional(args);
    match positional.next() {
        Some("inspect") => {
            let file = positional.next().context("inspect needs a file")?;
            let importer = flag_value(args, "importer").unwrap_or(DEFAULT_IMPORTER);
            println!("{}", inspect(Path::new(file), importer)?);
        }
        Some("checkerboard") => {
            let out = positional.next().context("checkerboard needs an output path")?;
            let converter = flag_value(args, "converter").unwrap_or(DEFAULT_CONVERTER);
            checkerboard(Path::new(out), parse_size_arg(args), converter)?;
        }
        Some("plugins") => println!("{}", plugins()),
        Some(other) => bail!("Unknown command '{other}'\n{USAGE}"),
        None => bail!("{USAGE}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_and_positionals() {
        let a = args(&["inspect", "--importer=X", "a.wav", "--importer=Y"]);
        assert_eq!(flag_value(&a, "importer"), Some("Y"));
        assert_eq!(flag_value(&a, "size"), None);
        assert_eq!(positional(&a).collect::<Vec<_>>(), vec!["inspect", "a.wav"]);
    }

    #[test]
    fn size_falls_back_on_garbage() {
        assert_eq!(parse_size_arg(&args(&["--size=32"])), 32);
        assert_eq!(parse_size_arg(&args(&["--size=0"])), DEFAULT_SIZE);
        assert_eq!(parse_size_arg(&args(&["--size=big"])), DEFAULT_SIZE);
        assert_eq!(parse_size_arg(&[]), DEFAULT_SIZE);
    }

    #[test]
    fn inspect_describes_the_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let mut file = Vec::new();
        file.extend_from_slice(b"RIFF\x2c\x00\x00\x00WAVEfmt \x10\x00\x00\x00");
        file.extend_from_slice(&[1, 0, 2, 0, 4, 0, 0, 0, 16, 0, 0, 0, 4, 0, 16, 0]);
        file.extend_from_slice(b"data\x08\x00\x00\x00");
        file.extend_from_slice(&[0; 8]);
        std::fs::write(&path, &file).unwrap();

        let line = inspect(&path, DEFAULT_IMPORTER).unwrap();
        assert!(line.ends_with("Stereo16, 4 Hz, 8 bytes, 0.500 s"), "{line}");
    }

    #[test]
    fn unknown_plugins_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(inspect(&dir.path().join("x.wav"), "Nope").is_err());
        assert!(checkerboard(&dir.path().join("x.png"), 8, "Nope").is_err());
    }

    #[test]
    fn checkerboard_writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("board.png");
        run(&args(&["checkerboard", out.to_str().unwrap(), "--size=16"])).unwrap();
        assert!(std::fs::read(&out).unwrap().starts_with(b"\x89PNG"));
    }

    #[test]
    fn plugin_listing_names_builtins() {
        let listing = plugins();
        assert!(listing.contains("WavAudioImporter"));
        assert!(listing.contains("PngImageConverter"));
    }
}
