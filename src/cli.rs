use clap::Parser;

#[derive(Parser)]
#[command(name = "vidport")]
#[command(author, version, about = "HTTP API for video metadata lookup and media/MP3 downloads", long_about = None)]
pub struct Cli {
    /// Address to bind, e.g. 127.0.0.1:8080 (overrides BIND_ADDR)
    #[arg(long)]
    pub bind: Option<String>,

    /// Download folder (overrides DOWNLOAD_FOLDER)
    #[arg(long)]
    pub download_dir: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
