use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the chat widget and the /chat endpoint over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Directory served under /static (created if missing)
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Directory holding home.html (created if missing)
        #[arg(long, default_value = "templates")]
        templates_dir: PathBuf,
    },

    /// Send a single message through the chat gateway and print the reply
    Ask {
        message: String,

        /// Support category: technical, order, refund or billing
        #[arg(short, long)]
        option: Option<String>,

        /// Image file to attach
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Description of the attached image
        #[arg(short, long)]
        description: Option<String>,
    },
}
