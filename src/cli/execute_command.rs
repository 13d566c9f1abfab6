use crate::checksum::{Algorithm, BackendKind, IncrementalChecksum, load_backend};
use crate::cli::{Cli, Commands};
use crate::config::ChecksumConfig;
use crate::utils::{format_bytes, parse_buffer_size, parse_checksum, verify_file_existence};
use simd_r_checksum_direct::DirectBuffer;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

/// Executes a parsed command line.
///
/// Errors are printed to stderr and terminate the process with status 1.
/// A failed `verify` also exits with status 1.
///
/// # References
/// - [`Commands`](crate::cli::Commands): Defines the available CLI commands.
/// - [`IncrementalChecksum`](crate::IncrementalChecksum): The checksum engine.
pub fn execute_command(cli: &Cli) {
    match &cli.command {
        Commands::Sum {
            algorithm,
            chunk_size,
            no_mmap,
            files,
        } => {
            let config = resolve_config(chunk_size.as_deref());
            let stdin_only = [Path::new("-").to_path_buf()];
            let inputs = if files.is_empty() {
                &stdin_only[..]
            } else {
                &files[..]
            };

            let mut failed = false;

            for path in inputs {
                match checksum_path(path, *algorithm, &config, !no_mmap) {
                    Ok((value, bytes)) => println!("{:08x}  {}  {}", value, bytes, path.display()),
                    Err(err) => {
                        eprintln!("Error: {}: {}", path.display(), err);
                        failed = true;
                    }
                }
            }

            if failed {
                std::process::exit(1);
            }
        }

        Commands::Verify {
            algorithm,
            chunk_size,
            file,
            expected,
        } => {
            let config = resolve_config(chunk_size.as_deref());

            let expected_value = match parse_checksum(expected) {
                Ok(value) => value,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            };

            let value = match checksum_path(file, *algorithm, &config, true) {
                Ok((value, _)) => value,
                Err(err) => {
                    eprintln!("Error: {}: {}", file.display(), err);
                    std::process::exit(1);
                }
            };

            if value == expected_value {
                println!("{}: OK", file.display());
            } else {
                println!(
                    "{}: FAILED (expected {:08x}, got {:08x})",
                    file.display(),
                    expected_value,
                    value
                );
                std::process::exit(1);
            }
        }

        Commands::Info => {
            let config = resolve_config(None);

            println!("\n{:=^50}", " CHECKSUM BACKEND ");

            match load_backend(config.policy()) {
                Ok(status) => {
                    println!("{:<25} {}", "AVAILABLE:", "YES");
                    println!("{:-<50}", ""); // Separator

                    for algorithm in Algorithm::ALL {
                        let label = format!("{}:", algorithm.name().to_uppercase());
                        let kind = match status.kind(algorithm) {
                            BackendKind::Accelerated => "HARDWARE ACCELERATED",
                            BackendKind::Portable => "PORTABLE (SOFTWARE)",
                        };
                        println!("{:<25} {}", label, kind);
                    }
                }
                Err(err) => {
                    println!("{:<25} NO ({})", "AVAILABLE:", err);
                }
            }

            println!("{:-<50}", ""); // Separator
            println!("{:<25} {:?}", "POLICY:", config.policy());
            println!(
                "{:<25} {}",
                "CHUNK SIZE:",
                format_bytes(config.chunk_size() as u64)
            );
            println!("{:=<50}", ""); // Footer
        }
    }
}

/// Computes the checksum of `path` (`-` for stdin).
///
/// Files are memory-mapped and fed through the direct path when `use_mmap`
/// is set, streamed through a read buffer otherwise.
///
/// # Returns
/// - `Ok((checksum, bytes))`
/// - `Err(std::io::Error)` if the input cannot be read or the backend is unavailable.
pub fn checksum_path(
    path: &Path,
    algorithm: Algorithm,
    config: &ChecksumConfig,
    use_mmap: bool,
) -> io::Result<(u32, u64)> {
    let mut crc = IncrementalChecksum::with_config(algorithm, config)?;

    if path == Path::new("-") {
        let bytes = crc.update_reader(&mut io::stdin().lock())?;
        return Ok((crc.value(), bytes));
    }

    verify_file_existence(path)?;
    let file = File::open(path)?;

    let bytes = if use_mmap {
        let buffer = DirectBuffer::map_file(&file)?;
        buffer.advise_sequential()?;
        crc.update_direct(&buffer, 0, buffer.len())?;
        buffer.len() as u64
    } else {
        crc.update_reader(&mut BufReader::new(file))?
    };

    debug!(
        "{} of {} ({}) = {:08x}",
        algorithm,
        path.display(),
        format_bytes(bytes),
        crc.value()
    );

    Ok((crc.value(), bytes))
}

fn resolve_config(chunk_size: Option<&str>) -> ChecksumConfig {
    let config = ChecksumConfig::from_env().unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    });

    match chunk_size {
        Some(size) => match parse_buffer_size(size) {
            Ok(0) => {
                eprintln!("Error: chunk size must be greater than zero");
                std::process::exit(1);
            }
            Ok(size) => config.with_chunk_size(size),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },
        None => config,
    }
}
