//! Slicing recordings into per-interval WAV files along a tier.

use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::config::{EMPTY_LABEL, SPAN_JOINER};
use crate::error::TierError;
use crate::tiers::textgrid_io::read_utterance;
use crate::types::PointTier;

/// A labeled sample range `[start_sample, end_sample)` of a recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    pub name: String,
    pub start_sample: u64,
    pub end_sample: u64,
}

/// One chunk per labeled interval of `tier`, named `{prefix}_{index:04}_{label}` where
/// `index` is the interval's position in the tier (unlabeled intervals included).
pub fn label_sample_ranges(tier: &PointTier, sample_rate: u32, prefix: &str) -> Vec<AudioChunk> {
    let mut chunks = Vec::new();
    let mut start = 0.0;
    for (idx, boundary) in tier.iter().enumerate() {
        if boundary.label != EMPTY_LABEL {
            chunks.push(AudioChunk {
                name: format!(
                    "{prefix}{SPAN_JOINER}{idx:04}{SPAN_JOINER}{}",
                    boundary.label
                ),
                start_sample: seconds_to_sample(start, sample_rate),
                end_sample: seconds_to_sample(boundary.time, sample_rate),
            });
        }
        start = boundary.time;
    }
    chunks
}

fn seconds_to_sample(seconds: f64, sample_rate: u32) -> u64 {
    (seconds * f64::from(sample_rate)).max(0.0) as u64
}

/// Writes every chunk of `wav_path` to `out_dir/<name>.wav` with the source's format.
pub fn write_chunks(
    wav_path: &Path,
    chunks: &[AudioChunk],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, TierError> {
    let mut reader =
        WavReader::open(wav_path).map_err(|e| TierError::audio("open source recording", e))?;
    let spec = reader.spec();
    fs::create_dir_all(out_dir).map_err(|e| TierError::io("create chunk directory", e))?;

    match spec.sample_format {
        SampleFormat::Int => {
            let samples = reader
                .samples::<i32>()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| TierError::audio("read source samples", e))?;
            write_sample_chunks(&samples, spec, chunks, out_dir)
        }
        SampleFormat::Float => {
            let samples = reader
                .samples::<f32>()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| TierError::audio("read source samples", e))?;
            write_sample_chunks(&samples, spec, chunks, out_dir)
        }
    }
}

fn write_sample_chunks<S: hound::Sample + Copy>(
    samples: &[S],
    spec: WavSpec,
    chunks: &[AudioChunk],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, TierError> {
    let channels = usize::from(spec.channels.max(1));
    let total_frames = samples.len() / channels;
    let mut written = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        let start = (chunk.start_sample as usize).min(total_frames);
        let end = (chunk.end_sample as usize).clamp(start, total_frames);
        if end < chunk.end_sample as usize {
            tracing::warn!(
                chunk = chunk.name.as_str(),
                end_sample = chunk.end_sample,
                total_frames,
                "chunk extends past end of recording; truncating"
            );
        }

        let out_path = out_dir.join(format!("{}.wav", chunk.name));
        tracing::info!(chunk = chunk.name.as_str(), "saving chunk");
        let mut writer =
            WavWriter::create(&out_path, spec).map_err(|e| TierError::audio("create chunk", e))?;
        for &sample in &samples[start * channels..end * channels] {
            writer
                .write_sample(sample)
                .map_err(|e| TierError::audio("write chunk samples", e))?;
        }
        writer
            .finalize()
            .map_err(|e| TierError::audio("finalize chunk", e))?;
        written.push(out_path);
    }
    Ok(written)
}

/// Slices `wav_path` along `tier` of `textgrid_path`, prefixing chunk names with the
/// TextGrid's file stem.
pub fn chunk_recording(
    wav_path: &Path,
    textgrid_path: &Path,
    tier: &str,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, TierError> {
    let (_, tier_encoding) = read_utterance(textgrid_path, tier)?;
    let prefix = textgrid_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            TierError::invalid_input(format!(
                "cannot derive chunk prefix from '{}'",
                textgrid_path.display()
            ))
        })?;
    let sample_rate = WavReader::open(wav_path)
        .map_err(|e| TierError::audio("open source recording", e))?
        .spec()
        .sample_rate;

    let chunks = label_sample_ranges(&tier_encoding, sample_rate, prefix);
    tracing::info!(chunks = chunks.len(), tier, "slicing recording");
    write_chunks(wav_path, &chunks, out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_skip_unlabeled_intervals_but_keep_their_index() {
        let tier = PointTier::from_pairs([(0.5, ""), (1.25, "IP"), (2.0, ""), (3.0, "IP")]);
        let chunks = label_sample_ranges(&tier, 16_000, "utt7");
        assert_eq!(
            chunks,
            [
                AudioChunk {
                    name: "utt7_0001_IP".to_string(),
                    start_sample: 8_000,
                    end_sample: 20_000,
                },
                AudioChunk {
                    name: "utt7_0003_IP".to_string(),
                    start_sample: 32_000,
                    end_sample: 48_000,
                },
            ]
        );
    }

    #[test]
    fn sample_positions_truncate() {
        assert_eq!(seconds_to_sample(0.99999, 10), 9);
        assert_eq!(seconds_to_sample(0.0, 44_100), 0);
    }
}
