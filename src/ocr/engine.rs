use anyhow::{anyhow, Result};
use image::GrayImage;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

use super::setup::{find_tessdata_dir, find_tesseract_executable};
use super::{Recognition, Recognizer};
use crate::config::Config;

/// Runs the external `tesseract` binary on single-character cell crops.
pub struct TesseractEngine {
    executable: PathBuf,
    tessdata: Option<PathBuf>,
    language: String,
}

impl TesseractEngine {
    /// Resolves the tesseract executable once up front, so a missing engine
    /// surfaces as one readable error before any cell is processed.
    pub fn new(config: &Config) -> Result<Self> {
        let executable = find_tesseract_executable()?;
        let tessdata = find_tessdata_dir(config.tessdata_dir.as_deref(), &config.ocr_language);
        Ok(Self {
            executable,
            tessdata,
            language: config.ocr_language.clone(),
        })
    }
}

impl Recognizer for TesseractEngine {
    /// Runs Tesseract on one cell crop with single-character segmentation
    /// and a 1-9 whitelist, returning text plus mean confidence.
    fn recognize(&self, cell: &GrayImage) -> Result<Recognition> {
        // Save image to temporary file
        let temp_input = NamedTempFile::with_suffix(".png")?;
        cell.save(temp_input.path())?;

        // Create temporary output file (Tesseract adds .tsv extension)
        let temp_output = NamedTempFile::new()?;
        let output_base = temp_output.path().to_string_lossy().to_string();

        let mut cmd = Command::new(&self.executable);
        cmd.arg(temp_input.path()).arg(&output_base);
        if let Some(tessdata) = &self.tessdata {
            cmd.arg("--tessdata-dir").arg(tessdata);
        }
        let output = cmd
            .arg("-l")
            .arg(&self.language)
            .arg("--psm")
            .arg("10") // Treat the image as a single character
            .arg("-c")
            .arg("tessedit_char_whitelist=123456789")
            .arg("tsv") // Output TSV format for confidence scores
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("Tesseract failed: {}", stderr));
        }

        // Read TSV output
        let tsv_path = format!("{}.tsv", output_base);
        let tsv_content = std::fs::read_to_string(&tsv_path)
            .map_err(|e| anyhow!("Failed to read Tesseract output: {}", e))?;

        // Clean up output file
        let _ = std::fs::remove_file(&tsv_path);

        Ok(parse_tsv_output(&tsv_content))
    }
}

/// Collapses Tesseract TSV word rows into one text plus mean confidence.
///
/// A cell crop holds at most one glyph, so everything recognized on the
/// page is concatenated and the word confidences are averaged, normalized
/// from Tesseract's 0-100 range to 0.0-1.0. No words at all is an empty
/// recognition with zero confidence, not an error.
fn parse_tsv_output(tsv: &str) -> Recognition {
    let mut text = String::new();
    let mut conf_sum: f32 = 0.0;
    let mut word_count: usize = 0;

    for line in tsv.lines().skip(1) {
        // Skip header
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 12 {
            continue;
        }

        // TSV fields: level, page_num, block_num, par_num, line_num, word_num,
        //             left, top, width, height, conf, text
        let level: i32 = fields[0].parse().unwrap_or(-1);
        let conf: f32 = fields[10].parse().unwrap_or(-1.0);
        let word = fields[11].trim();

        // Level 5 = word
        if level != 5 || word.is_empty() || conf < 0.0 {
            continue;
        }

        text.push_str(word);
        conf_sum += conf;
        word_count += 1;
    }

    let confidence = if word_count > 0 {
        conf_sum / word_count as f32 / 100.0
    } else {
        0.0
    };

    Recognition { text, confidence }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSV_HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    #[test]
    fn test_parse_single_word() {
        let tsv = format!(
            "{}\n1\t1\t0\t0\t0\t0\t0\t0\t90\t90\t-1\t\n5\t1\t1\t1\t1\t1\t10\t10\t40\t60\t95.5\t7",
            TSV_HEADER
        );
        let rec = parse_tsv_output(&tsv);
        assert_eq!(rec.text, "7");
        assert!((rec.confidence - 0.955).abs() < 1e-5);
    }

    #[test]
    fn test_parse_no_words_is_blank() {
        let tsv = format!("{}\n1\t1\t0\t0\t0\t0\t0\t0\t90\t90\t-1\t", TSV_HEADER);
        let rec = parse_tsv_output(&tsv);
        assert_eq!(rec.text, "");
        assert_eq!(rec.confidence, 0.0);
    }

    #[test]
    fn test_parse_averages_word_confidences() {
        let tsv = format!(
            "{}\n5\t1\t1\t1\t1\t1\t0\t0\t10\t10\t80\t1\n5\t1\t1\t1\t1\t2\t10\t0\t10\t10\t60\t2",
            TSV_HEADER
        );
        let rec = parse_tsv_output(&tsv);
        assert_eq!(rec.text, "12");
        assert!((rec.confidence - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_parse_skips_non_word_levels() {
        // Level 4 rows (lines) carry no usable text
        let tsv = format!("{}\n4\t1\t1\t1\t1\t0\t0\t0\t90\t90\t-1\t5", TSV_HEADER);
        let rec = parse_tsv_output(&tsv);
        assert_eq!(rec.text, "");
    }
}
