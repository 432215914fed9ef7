//! Prints the 256-bit Keccak digest of a file, coreutils style.

use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
	let mut args = env::args().skip(1);

	let path = match (args.next(), args.next()) {
		(Some(path), None) => path,
		_ => {
			eprintln!("usage: keccaksum <path>");
			return ExitCode::FAILURE;
		}
	};

	match fs::read(&path) {
		Ok(bytes) => {
			println!("{}  {}", hex::encode(libkeccak::keccak256(&bytes)), path);
			ExitCode::SUCCESS
		}
		Err(error) => {
			eprintln!("keccaksum: {}: {}", path, error);
			ExitCode::FAILURE
		}
	}
}
