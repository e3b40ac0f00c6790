//! Command-line arguments

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
	name = "umapd",
	author,
	version,
	about = "UMAP embedding server with k-nearest-neighbor graphs"
)]
pub struct Cli {
	/// Address to bind (overrides --port when it contains one, e.g. 127.0.0.1:9000)
	#[arg(short = 'a', long = "address")]
	pub address: Option<String>,

	/// Port to listen on
	#[arg(short = 'p', long = "port", default_value_t = crate::config::DEFAULT_PORT)]
	pub port: u16,

	/// Log level (error, warn, info, debug, trace)
	#[arg(long = "log-level", default_value = "info")]
	pub log_level: String,
}
