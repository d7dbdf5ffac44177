use std::path::PathBuf;

use clap::Args;
use prosody_tiers::chunking::chunk_recording;

#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Source recording (WAV)
    wav: PathBuf,
    /// TextGrid aligned with the recording
    textgrid: PathBuf,
    /// Directory receiving one WAV file per labeled interval
    out_dir: PathBuf,
    /// Tier whose labeled intervals become chunks
    #[arg(long, default_value = "iphrases")]
    tier: String,
}

pub fn run(args: ChunkArgs) -> Result<(), String> {
    let written = chunk_recording(&args.wav, &args.textgrid, &args.tier, &args.out_dir)
        .map_err(|err| format!("Failed to chunk '{}': {err}", args.wav.display()))?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
