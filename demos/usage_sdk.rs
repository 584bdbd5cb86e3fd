use rlecoder::config::{CodecConfig, Method};
use rlecoder::pipeline;

fn main() {
	let data = b"hello hello hello hello aaaaaaaaaaaaaaaaaaaaaa".to_vec();
	let mut compressed = Vec::new();
	let cfg = CodecConfig::default().with_method(Method::B);
	let stats = pipeline::encode_with(&cfg, std::io::Cursor::new(&data), &mut compressed).unwrap();
	println!("compressed {} -> {} (method {})", stats.original_size, stats.compressed_size, stats.method);

	let mut restored = Vec::new();
	let report = pipeline::decode(std::io::Cursor::new(compressed), &mut restored).unwrap();
	println!("restored {} bytes, encoded at {}", restored.len(), report.timestamp);
}
