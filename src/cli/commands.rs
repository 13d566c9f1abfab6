use crate::checksum::Algorithm;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the checksum of each file (stdin when none, or for `-`)
    Sum {
        /// Checksum algorithm
        #[arg(short = 'a', long, value_enum, default_value_t = Algorithm::Crc32c)]
        algorithm: Algorithm,

        /// Maximum bytes per backend call (default: 128MB)
        #[arg(short = 'c', long = "chunk-size", value_name = "SIZE")]
        chunk_size: Option<String>,

        /// Stream files through a read buffer instead of memory-mapping them
        #[arg(long = "no-mmap")]
        no_mmap: bool,

        /// Input files
        files: Vec<PathBuf>,
    },

    /// Check a file against an expected checksum (hex, optional `0x`)
    Verify {
        /// Checksum algorithm
        #[arg(short = 'a', long, value_enum, default_value_t = Algorithm::Crc32c)]
        algorithm: Algorithm,

        /// Maximum bytes per backend call (default: 128MB)
        #[arg(short = 'c', long = "chunk-size", value_name = "SIZE")]
        chunk_size: Option<String>,

        /// The file to check
        file: PathBuf,

        /// The expected checksum
        expected: String,
    },

    /// Show backend availability and hardware acceleration
    Info,
}
